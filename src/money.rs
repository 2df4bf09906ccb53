//! Money helpers. Amounts are plain `f64` rupees; nothing is rounded until it
//! is formatted for display.

pub const CURRENCY_PREFIX: &str = "Rs.";
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// `percent` of `amount`, e.g. `percent_of(1000.0, 10.0) == 100.0`.
pub fn percent_of(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

/// Subtotal plus tax minus discount, both taken independently off the subtotal.
pub fn bill_total(subtotal: f64, tax_percent: f64, discount_percent: f64) -> f64 {
    subtotal + percent_of(subtotal, tax_percent) - percent_of(subtotal, discount_percent)
}

/// NaN and infinities become zero. JSON has no spelling for them, so they
/// would otherwise be written as `null`.
pub fn finite_or_zero(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// Formats an amount as `Rs. 1234.50`.
pub fn format_amount(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, amount)
}

pub fn display_customer(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => WALK_IN_CUSTOMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_amounts_collapse_to_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(-12.5), -12.5);
    }

    #[test]
    fn bill_total_applies_tax_and_discount_off_subtotal() {
        assert_eq!(bill_total(1000.0, 10.0, 5.0), 1050.0);
        assert_eq!(bill_total(1000.0, 0.0, 0.0), 1000.0);
        assert_eq!(bill_total(0.0, 16.0, 10.0), 0.0);
    }

    #[test]
    fn discounts_above_hundred_percent_are_not_clamped() {
        assert_eq!(bill_total(200.0, 0.0, 150.0), -100.0);
    }

    #[test]
    fn format_amount_uses_two_decimals() {
        assert_eq!(format_amount(1050.0), "Rs. 1050.00");
        assert_eq!(format_amount(12.5), "Rs. 12.50");
        assert_eq!(format_amount(0.0), "Rs. 0.00");
    }

    #[test]
    fn blank_customer_falls_back_to_walk_in() {
        assert_eq!(display_customer(Some("Ayesha")), "Ayesha");
        assert_eq!(display_customer(Some("")), WALK_IN_CUSTOMER);
        assert_eq!(display_customer(None), WALK_IN_CUSTOMER);
    }
}
