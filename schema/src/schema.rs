//! The Schema - immutable field declarations of a host type.

use std::collections::HashMap;

use crate::{SchemaBuilder, ValidatedField};

/// The ordered, validated fields of one host type.
/// It is immutable after construction and shared read-only by every
/// record of the type, usually behind an `Arc`.
#[derive(Debug)]
pub struct Schema {
    /// Host type name.
    name: String,
    /// Fields in declaration order; `fields[i].slot() == i`.
    fields: Vec<ValidatedField>,
    /// Field slot lookup by name.
    slots: HashMap<String, usize>,
}

impl Schema {
    /// Start declaring a host type.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Create a schema (use SchemaBuilder for construction).
    pub(crate) fn new(name: String, fields: Vec<ValidatedField>) -> Self {
        let slots = fields
            .iter()
            .map(|f| (f.name().to_string(), f.slot()))
            .collect();
        Self {
            name,
            fields,
            slots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[ValidatedField] {
        &self.fields
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&ValidatedField> {
        self.slots.get(name).map(|&slot| &self.fields[slot])
    }

    /// Check if this schema declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
