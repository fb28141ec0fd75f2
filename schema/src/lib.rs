//! Ward Schema
//!
//! Bind validation rules to the named fields of a host type and enforce
//! them on every write.
//!
//! Responsibilities:
//! - Declare a host type's ordered fields once (`SchemaBuilder`)
//! - Route every field write through its rule before storing
//! - Construct records field by field in declaration order
//!
//! # Module Structure
//!
//! - `builder` - SchemaBuilder that validates declarations into a Schema
//! - `schema` - The immutable, shared Schema of a host type
//! - `field` - ValidatedField: one rule bound to one named slot
//! - `record` - Record instances and their state
//! - `error` - Error types for schema and record failures
//!
//! # Sharp edge
//!
//! Construction is not transactional. If field `k` is rejected, fields
//! `1..k` keep their validated values; [`ConstructError`] hands the
//! partially populated record back so callers can see exactly that.

mod builder;
mod error;
mod field;
mod record;
mod schema;

pub use builder::SchemaBuilder;
pub use error::{ConstructError, RecordError, RecordResult, SchemaError};
pub use field::ValidatedField;
pub use record::{Record, RecordState};
pub use schema::Schema;
