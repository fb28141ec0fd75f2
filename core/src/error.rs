//! Rule-level validation errors.

use crate::{Value, ValueKind};
use thiserror::Error;

/// Why a rule rejected a candidate value.
///
/// Carries no field name: rules are evaluated in isolation and the
/// owning field attaches its name when the error crosses a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("value must be {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("quantity must not be less than {min} and not greater than {max}")]
    OutOfRange { min: i64, max: i64, value: i64 },

    #[error("expected {candidate} to be one of [{}]", join(.candidates))]
    NotAMember {
        candidate: Value,
        candidates: Vec<Value>,
    },
}

impl ValidationError {
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    pub fn out_of_range(min: i64, max: i64, value: i64) -> Self {
        Self::OutOfRange { min, max, value }
    }

    pub fn not_a_member(candidate: Value, candidates: impl Into<Vec<Value>>) -> Self {
        Self::NotAMember {
            candidate,
            candidates: candidates.into(),
        }
    }

    /// Short, stable name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::NotAMember { .. } => "NotAMember",
        }
    }
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
