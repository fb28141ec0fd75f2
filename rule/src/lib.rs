//! Ward Rule
//!
//! Validation rules attached to fields.
//!
//! Responsibilities:
//! - Check a candidate value against a rule's configuration
//! - Report rejections as typed `ValidationError`s
//!
//! # Module Structure
//!
//! - `range` - Inclusive integer bounds
//! - `membership` - Fixed candidate set
//! - `rule` - The closed `ValidationRule` sum over both kinds

mod membership;
mod range;
mod rule;

pub use membership::MembershipRule;
pub use range::RangeRule;
pub use rule::ValidationRule;

use ward_core::{ValidationError, Value};

/// The single capability every rule provides.
///
/// Implementations are pure: they see only their own configuration and
/// the candidate, never the record or sibling fields.
pub trait Check {
    fn check(&self, candidate: &Value) -> Result<(), ValidationError>;
}
