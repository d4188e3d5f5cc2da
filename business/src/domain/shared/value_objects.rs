use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed interval during which an advertised price is considered active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl ValidityPeriod {
    /// Creates a period, returning `None` when `from` is after `to`.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Option<Self> {
        if from > to {
            return None;
        }
        Some(Self { from, to })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.to
    }
}

/// Returns true when an optional text attribute fits in `max_chars` characters.
pub fn fits_length(value: Option<&str>, max_chars: usize) -> bool {
    value.is_none_or(|v| v.chars().count() <= max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_reject_period_when_from_after_to() {
        let now = Utc::now();
        assert!(ValidityPeriod::new(now, now - Duration::seconds(1)).is_none());
    }

    #[test]
    fn should_accept_single_instant_period() {
        let now = Utc::now();
        let period = ValidityPeriod::new(now, now).unwrap();
        assert!(period.contains(now));
    }

    #[test]
    fn should_include_both_bounds() {
        let from = Utc::now();
        let to = from + Duration::days(7);
        let period = ValidityPeriod::new(from, to).unwrap();

        assert!(period.contains(from));
        assert!(period.contains(to));
        assert!(!period.contains(from - Duration::seconds(1)));
        assert!(!period.contains(to + Duration::seconds(1)));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert!(fits_length(Some("Lácteos"), 7));
        assert!(!fits_length(Some("Lácteos!"), 7));
        assert!(fits_length(None, 0));
    }
}
