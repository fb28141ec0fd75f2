//! Fixed candidate set rule.

use std::fmt;

use ward_core::{ValidationError, Value};

use crate::Check;

/// Accepts any value exactly equal to one of its candidates.
///
/// Candidates keep their declaration order; duplicates are allowed and
/// have no effect on the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipRule {
    candidates: Vec<Value>,
}

impl MembershipRule {
    pub fn new<I, V>(candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }

    /// Exact, case-sensitive and variant-sensitive membership test.
    pub fn contains(&self, value: &Value) -> bool {
        self.candidates.iter().any(|c| c == value)
    }
}

impl Check for MembershipRule {
    fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        if self.contains(candidate) {
            Ok(())
        } else {
            Err(ValidationError::not_a_member(
                candidate.clone(),
                self.candidates.clone(),
            ))
        }
    }
}

impl fmt::Display for MembershipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one of [")?;
        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", candidate)?;
        }
        write!(f, "]")
    }
}
