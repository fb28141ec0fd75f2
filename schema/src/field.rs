//! A rule bound to one named field of a host type.

use ward_core::{ValidationError, Value};
use ward_rule::{Check, ValidationRule};

use crate::error::{RecordError, RecordResult};

/// One declared field of a schema.
///
/// Created once by [`SchemaBuilder::build`](crate::SchemaBuilder::build)
/// and never mutated afterwards; every record of the schema shares it.
/// `slot` is the field's position in declaration order and addresses its
/// storage in each record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedField {
    name: String,
    slot: usize,
    rule: ValidationRule,
}

impl ValidatedField {
    pub(crate) fn bind(name: String, slot: usize, rule: ValidationRule) -> Self {
        Self { name, slot, rule }
    }

    /// Field name as the host type declares it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in declaration order.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    /// Run the bound rule without touching any record.
    pub fn check(&self, candidate: &Value) -> Result<(), ValidationError> {
        self.rule.check(candidate)
    }

    /// Current value of this field in `slots`. Never re-validates.
    pub(crate) fn read<'r>(&self, slots: &'r [Option<Value>]) -> Option<&'r Value> {
        slots.get(self.slot).and_then(Option::as_ref)
    }

    /// Validate `candidate`, then store it.
    ///
    /// On rejection the slot keeps its previous value (or stays empty).
    /// Only this field's slot is ever touched.
    pub(crate) fn write(&self, slots: &mut [Option<Value>], candidate: Value) -> RecordResult<()> {
        if let Err(error) = self.rule.check(&candidate) {
            tracing::debug!(field = %self.name, %error, "rejected field write");
            return Err(RecordError::rejected(&self.name, error));
        }

        tracing::trace!(field = %self.name, value = %candidate, "accepted field write");
        slots[self.slot] = Some(candidate);
        Ok(())
    }
}
