//! Inclusive integer range rule.

use std::fmt;

use ward_core::{ValidationError, Value, ValueKind};

use crate::Check;

/// Accepts integers in `[min_value, max_value]`.
///
/// `min_value <= max_value` is the caller's responsibility; an inverted
/// range simply rejects every integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRule {
    min_value: i64,
    max_value: i64,
}

impl RangeRule {
    pub fn new(min_value: i64, max_value: i64) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Check if an integer lies within the bounds (both inclusive).
    pub fn contains(&self, value: i64) -> bool {
        self.min_value <= value && value <= self.max_value
    }
}

impl Check for RangeRule {
    fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        // Identity check on the variant: Bool and Float never pass as Int.
        let Some(value) = candidate.as_int() else {
            return Err(ValidationError::type_mismatch(
                ValueKind::Int,
                candidate.kind(),
            ));
        };

        if !self.contains(value) {
            return Err(ValidationError::out_of_range(
                self.min_value,
                self.max_value,
                value,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for RangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min_value, self.max_value)
    }
}
