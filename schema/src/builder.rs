//! SchemaBuilder for declaring a host type's fields.

use std::collections::HashSet;

use ward_rule::ValidationRule;

use crate::{Schema, SchemaError, ValidatedField};

/// Builder for constructing an immutable Schema.
///
/// Declaration order is kept: it is the order in which construction
/// assigns fields.
#[derive(Debug)]
pub struct SchemaBuilder {
    /// Host type name.
    name: String,
    /// Declared (name, rule) pairs, in order.
    fields: Vec<(String, ValidationRule)>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare the next field and the rule guarding it.
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<ValidationRule>) -> Self {
        self.fields.push((name.into(), rule.into()));
        self
    }

    /// Bind every declared field and build the immutable Schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields(self.name));
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());

        for (slot, (name, rule)) in self.fields.into_iter().enumerate() {
            if name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(name.clone()) {
                return Err(SchemaError::DuplicateField(name));
            }
            fields.push(ValidatedField::bind(name, slot, rule));
        }

        Ok(Schema::new(self.name, fields))
    }
}
