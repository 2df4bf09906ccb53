use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next entity identifier for this process.
///
/// Ids track the wall clock in milliseconds so they sort alongside ids written
/// by earlier sessions, but two calls within the same millisecond still get
/// distinct, increasing values.
pub fn next_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1)
}

/// Current time as an ISO-8601 timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_ids_are_unique_and_increasing() {
        let ids: Vec<i64> = (0..1000).map(|_| next_id()).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "{} should be greater than {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn ids_follow_the_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        assert!(next_id() >= before);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let stamp = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
        assert!(stamp.ends_with('Z'));
    }
}
