//! Record instances of a schema.

use std::fmt;
use std::sync::Arc;

use ward_core::Value;

use crate::error::{ConstructError, RecordError, RecordResult};
use crate::Schema;

/// Where a record stands relative to its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// No field has been assigned.
    Uninitialized,
    /// Some, but not all, fields hold a validated value.
    Partial { assigned: usize },
    /// Every field holds a validated value.
    Valid,
}

/// One instance of a host type.
///
/// Every stored value has passed its field's rule. A record is plain
/// mutable state: share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    /// One slot per declared field, indexed by `ValidatedField::slot`.
    slots: Vec<Option<Value>>,
}

impl Record {
    /// Create a record with every field unassigned.
    pub fn uninit(schema: Arc<Schema>) -> Self {
        let slots = vec![None; schema.len()];
        Self { schema, slots }
    }

    /// Create a record by assigning `values` to the schema's fields in
    /// declaration order.
    ///
    /// Stops at the first rejected value. The error carries the record
    /// with every earlier field still assigned.
    pub fn construct<I>(schema: Arc<Schema>, values: I) -> Result<Self, ConstructError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut record = Self::uninit(schema);
        match record.populate(values) {
            Ok(()) => Ok(record),
            Err(error) => {
                tracing::debug!(
                    schema = %record.schema.name(),
                    field = error.field().unwrap_or("-"),
                    assigned = record.assigned(),
                    %error,
                    "construction aborted"
                );
                Err(ConstructError::new(record, error))
            }
        }
    }

    /// Assign `values` to the schema's fields in declaration order.
    ///
    /// The number of values is checked before anything is written. After
    /// that, each write goes through its field's rule and the first
    /// rejection aborts; writes already performed are kept.
    pub fn populate<I>(&mut self, values: I) -> RecordResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.schema.len() {
            return Err(RecordError::arity(
                self.schema.name(),
                self.schema.len(),
                values.len(),
            ));
        }

        for (field, value) in self.schema.fields().iter().zip(values) {
            field.write(&mut self.slots, value)?;
        }
        Ok(())
    }

    /// Read a field. Returns None for unknown or unassigned fields.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema
            .field(name)
            .and_then(|field| field.read(&self.slots))
    }

    /// Reassign one field through its rule.
    ///
    /// On failure the field keeps its previous value and no other field
    /// is affected.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> RecordResult<()> {
        let Some(field) = self.schema.field(name) else {
            return Err(RecordError::unknown_field(self.schema.name(), name));
        };
        field.write(&mut self.slots, value.into())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of fields holding a value.
    pub fn assigned(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn state(&self) -> RecordState {
        match self.assigned() {
            0 => RecordState::Uninitialized,
            n if n == self.slots.len() => RecordState::Valid,
            assigned => RecordState::Partial { assigned },
        }
    }

    /// Check if every field holds a validated value.
    pub fn is_valid(&self) -> bool {
        self.state() == RecordState::Valid
    }

    /// Iterate `(field name, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.schema
            .fields()
            .iter()
            .map(|field| (field.name(), field.read(&self.slots)))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.schema.name())?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match value {
                Some(value) => write!(f, " {}: {}", name, value)?,
                None => write!(f, " {}: <unset>", name)?,
            }
        }
        write!(f, " }}")
    }
}
