//! Shape shared by both stores: a pure `(state, action) -> state` function
//! plus the whole-record helpers every entity collection uses.

use crate::models::{Bill, Employee, MenuItem, Order, SalaryPayment};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub trait Reducer {
    type State: Serialize + Clone + PartialEq + Debug;
    /// Partial state read back from storage. Absent keys keep their current value.
    type Patch: DeserializeOwned;
    type Action: Debug;

    /// Produces the next state. Never mutates `state`; unrecognized actions
    /// return an equal copy.
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;

    /// The bulk-load action that merges a restored patch into the state.
    fn load_action(patch: Self::Patch) -> Self::Action;
}

/// An action as it arrives on the wire: `{"type": ..., "payload": ...}`.
///
/// Decoding goes through this first so that an unknown `type` can be
/// dropped whatever its payload looks like.
#[derive(Deserialize)]
pub(crate) struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl RawAction {
    pub fn payload<T: DeserializeOwned, E: de::Error>(self) -> Result<T, E> {
        serde_json::from_value(self.payload)
            .map_err(|e| E::custom(format!("invalid payload for {}: {}", self.kind, e)))
    }
}

/// Records addressed by a numeric identifier.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

impl_identified!(MenuItem, Order, Bill, Employee, SalaryPayment);

pub fn appended<T: Clone>(records: &[T], record: &T) -> Vec<T> {
    let mut next = records.to_vec();
    next.push(record.clone());
    next
}

/// Swaps in `record` wherever the id matches; other records are copied as-is.
pub fn replaced<T: Identified + Clone>(records: &[T], record: &T) -> Vec<T> {
    records
        .iter()
        .map(|existing| {
            if existing.id() == record.id() {
                record.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}

pub fn without<T: Identified + Clone>(records: &[T], id: i64) -> Vec<T> {
    records.iter().filter(|r| r.id() != id).cloned().collect()
}

pub fn contains_id<T: Identified>(records: &[T], id: i64) -> bool {
    records.iter().any(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            position: "Cook".to_string(),
            email: String::new(),
            phone: String::new(),
            salary: 1000.0,
            hire_date: "2024-01-01".to_string(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn replaced_swaps_only_matching_record() {
        let records = vec![employee(1, "A"), employee(2, "B")];
        let next = replaced(&records, &employee(2, "Bee"));

        assert_eq!(next[0], records[0]);
        assert_eq!(next[1].name, "Bee");
        assert_eq!(records[1].name, "B");
    }

    #[test]
    fn without_is_a_noop_for_missing_id() {
        let records = vec![employee(1, "A")];
        assert_eq!(without(&records, 9), records);
        assert!(without(&records, 1).is_empty());
        assert!(contains_id(&records, 1));
        assert!(!contains_id(&records, 9));
    }
}
