//! The BurgerRecipe record.

use std::fmt;
use std::sync::{Arc, OnceLock};

use ward_core::Value;
use ward_rule::ValidationRule;
use ward_schema::{ConstructError, Record, RecordResult, Schema, SchemaError};

use crate::limits::*;

static SCHEMA: OnceLock<Arc<Schema>> = OnceLock::new();

fn build_schema() -> Result<Schema, SchemaError> {
    let builder = QUANTITIES
        .iter()
        .fold(Schema::builder(RECIPE), |builder, &(name, (min, max))| {
            builder.field(name, ValidationRule::range(min, max))
        });
    builder.field(SAUCE, ValidationRule::one_of(SAUCES)).build()
}

/// The recipe schema, built once per process and shared by every recipe.
pub fn recipe_schema() -> &'static Arc<Schema> {
    SCHEMA.get_or_init(|| {
        // Field names are compile-time constants and distinct.
        Arc::new(build_schema().expect("burger recipe schema is well-formed"))
    })
}

/// A burger recipe whose every field satisfies its rule.
#[derive(Debug, Clone)]
pub struct BurgerRecipe {
    record: Record,
}

impl BurgerRecipe {
    /// Build a recipe, assigning fields in the order
    /// `buns, cheese, tomatoes, cutlets, eggs, sauce`.
    ///
    /// On failure the returned error holds the partially populated
    /// record: fields before the rejected one keep their values.
    pub fn new(
        buns: impl Into<Value>,
        cheese: impl Into<Value>,
        tomatoes: impl Into<Value>,
        cutlets: impl Into<Value>,
        eggs: impl Into<Value>,
        sauce: impl Into<Value>,
    ) -> Result<Self, ConstructError> {
        let values: [Value; 6] = [
            buns.into(),
            cheese.into(),
            tomatoes.into(),
            cutlets.into(),
            eggs.into(),
            sauce.into(),
        ];
        let record = Record::construct(Arc::clone(recipe_schema()), values)?;
        Ok(Self { record })
    }

    pub fn schema() -> &'static Schema {
        recipe_schema()
    }

    pub fn buns(&self) -> i64 {
        self.quantity(BUNS)
    }

    pub fn cheese(&self) -> i64 {
        self.quantity(CHEESE)
    }

    pub fn tomatoes(&self) -> i64 {
        self.quantity(TOMATOES)
    }

    pub fn cutlets(&self) -> i64 {
        self.quantity(CUTLETS)
    }

    pub fn eggs(&self) -> i64 {
        self.quantity(EGGS)
    }

    pub fn sauce(&self) -> &str {
        self.record
            .get(SAUCE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_buns(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(BUNS, value)
    }

    pub fn set_cheese(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(CHEESE, value)
    }

    pub fn set_tomatoes(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(TOMATOES, value)
    }

    pub fn set_cutlets(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(CUTLETS, value)
    }

    pub fn set_eggs(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(EGGS, value)
    }

    pub fn set_sauce(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.reassign(SAUCE, value)
    }

    /// Reassign a field by name. A rejected value leaves the recipe as it was.
    pub fn reassign(&mut self, field: &str, value: impl Into<Value>) -> RecordResult<()> {
        self.record.set(field, value)
    }

    /// The underlying record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    // Every slot is filled with a rule-checked Int once construction succeeds.
    fn quantity(&self, name: &str) -> i64 {
        self.record
            .get(name)
            .and_then(Value::as_int)
            .unwrap_or_default()
    }
}

impl fmt::Display for BurgerRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}
