//! Schema and record error types.

use thiserror::Error;
use ward_core::ValidationError;

use crate::Record;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while defining a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Schema {0} declares no fields")]
    NoFields(String),
}

/// Errors that can occur while writing to a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Invalid value for field {field}: {source}")]
    Rejected {
        field: String,
        source: ValidationError,
    },

    #[error("Unknown field: {field} on schema {schema}")]
    UnknownField { schema: String, field: String },

    #[error("Invalid arity: expected {expected} values, got {actual} for schema {schema}")]
    Arity {
        schema: String,
        expected: usize,
        actual: usize,
    },
}

impl RecordError {
    pub fn rejected(field: impl Into<String>, source: ValidationError) -> Self {
        Self::Rejected {
            field: field.into(),
            source,
        }
    }

    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    pub fn arity(schema: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::Arity {
            schema: schema.into(),
            expected,
            actual,
        }
    }

    /// The field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Rejected { field, .. } | Self::UnknownField { field, .. } => Some(field),
            Self::Arity { .. } => None,
        }
    }

    /// The rule-level cause, if a rule rejected the value.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A construction that stopped at the first rejected field.
///
/// `record` holds every field assigned before the failure; nothing is
/// rolled back.
#[derive(Debug, Error)]
#[error("Construction of {} aborted: {error}", .record.schema().name())]
pub struct ConstructError {
    pub record: Record,
    #[source]
    pub error: RecordError,
}

impl ConstructError {
    pub fn new(record: Record, error: RecordError) -> Self {
        Self { record, error }
    }

    /// Discard the partial record and keep the cause.
    pub fn into_error(self) -> RecordError {
        self.error
    }

    /// The partially populated record.
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl From<ConstructError> for RecordError {
    fn from(e: ConstructError) -> Self {
        e.error
    }
}
