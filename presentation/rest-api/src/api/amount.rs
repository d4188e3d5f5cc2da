//! Conversions between domain decimals and JSON numbers.

use bigdecimal::BigDecimal;
use business::domain::price::model::to_cents;
use num_traits::{FromPrimitive, ToPrimitive};

/// Decimal for an incoming JSON number; `None` for NaN or infinities.
pub fn from_json_number(value: f64) -> Option<BigDecimal> {
    BigDecimal::from_f64(value)
}

/// JSON number for a domain amount, rounded to cents.
pub fn to_json_number(amount: &BigDecimal) -> f64 {
    to_cents(amount).to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_round_amount_to_two_decimals() {
        let amount = BigDecimal::from_str("3.14159").unwrap();
        assert_eq!(to_json_number(&amount), 3.14);
    }

    #[test]
    fn should_reject_non_finite_numbers() {
        assert!(from_json_number(f64::NAN).is_none());
        assert!(from_json_number(f64::INFINITY).is_none());
    }

    #[test]
    fn should_keep_cents_of_incoming_number() {
        let amount = from_json_number(2.99).unwrap();
        assert_eq!(to_cents(&amount), BigDecimal::from_str("2.99").unwrap());
    }
}
