//! Assertion types and builders for verifying step results.

use ward_core::Value;
use ward_schema::{Record, RecordError, RecordState};

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    // Outcome assertions
    pub ok: bool,
    /// Expected (field, ValidationError variant name).
    pub rejected: Option<(String, String)>,
    pub error: Option<String>,

    // Record assertions
    pub reads: Vec<(String, Option<Value>)>,
    pub state: Option<RecordState>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step outcome and the record after it.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<(), RecordError>,
        record: &Record,
    ) -> ScenarioResult<()> {
        self.verify_outcome(step, result)?;
        self.verify_record(step, record)
    }

    fn verify_outcome(&self, step: &str, result: &Result<(), RecordError>) -> ScenarioResult<()> {
        let expects_error = self.rejected.is_some() || self.error.is_some();

        let err = match result {
            Ok(()) if expects_error => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "expected an error, but step succeeded",
                ))
            }
            Ok(()) => return Ok(()),
            Err(err) if self.ok || !expects_error => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("step failed: {}", err),
                ))
            }
            Err(err) => err,
        };

        if let Some((field, kind)) = &self.rejected {
            let actual_kind = err.validation_error().map(|e| e.kind_name());
            if err.field() != Some(field.as_str()) || actual_kind != Some(kind.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} on field {}, got: {:?}", kind, field, err),
                ));
            }
        }

        if let Some(expected) = &self.error {
            let message = err.to_string();
            if !message.contains(expected.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, message),
                ));
            }
        }

        Ok(())
    }

    fn verify_record(&self, step: &str, record: &Record) -> ScenarioResult<()> {
        for (field, expected) in &self.reads {
            let actual = record.get(field);
            if actual != expected.as_ref() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "field {} mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        field, expected, actual
                    ),
                ));
            }
        }

        if let Some(expected) = self.state {
            let actual = record.state();
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected state {:?}, got {:?}", expected, actual),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for fluent assertion construction.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Outcome assertions ==========

    /// Assert that the step succeeds.
    pub fn ok(mut self) -> Self {
        self.assertion.ok = true;
        self
    }

    /// Assert that `field` is rejected with the given ValidationError variant.
    pub fn rejected(mut self, field: impl Into<String>, kind: impl Into<String>) -> Self {
        self.assertion.rejected = Some((field.into(), kind.into()));
        self
    }

    /// Assert that the step fails with an error containing the given text.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    // ========== Record assertions ==========

    /// Assert that `field` reads back `value` after the step.
    pub fn reads(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assertion
            .reads
            .push((field.into(), Some(value.into())));
        self
    }

    /// Assert that `field` holds no value after the step.
    pub fn unset(mut self, field: impl Into<String>) -> Self {
        self.assertion.reads.push((field.into(), None));
        self
    }

    /// Assert the record's state after the step.
    pub fn state(mut self, state: RecordState) -> Self {
        self.assertion.state = Some(state);
        self
    }
}
