//! The closed set of rule kinds.

use std::fmt;

use ward_core::{ValidationError, Value};

use crate::{Check, MembershipRule, RangeRule};

/// A rule bound to a field, dispatched through [`Check`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Inclusive integer bounds.
    Range(RangeRule),
    /// Fixed candidate set.
    Membership(MembershipRule),
}

impl ValidationRule {
    /// Shorthand for `ValidationRule::Range(RangeRule::new(min, max))`.
    pub fn range(min_value: i64, max_value: i64) -> Self {
        Self::Range(RangeRule::new(min_value, max_value))
    }

    /// Shorthand for `ValidationRule::Membership(MembershipRule::new(..))`.
    pub fn one_of<I, V>(candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Membership(MembershipRule::new(candidates))
    }
}

impl Check for ValidationRule {
    fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Range(rule) => rule.check(candidate),
            Self::Membership(rule) => rule.check(candidate),
        }
    }
}

impl From<RangeRule> for ValidationRule {
    fn from(rule: RangeRule) -> Self {
        Self::Range(rule)
    }
}

impl From<MembershipRule> for ValidationRule {
    fn from(rule: MembershipRule) -> Self {
        Self::Membership(rule)
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(rule) => fmt::Display::fmt(rule, f),
            Self::Membership(rule) => fmt::Display::fmt(rule, f),
        }
    }
}
