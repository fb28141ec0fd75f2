//! Ward Core Types
//!
//! This crate provides the foundational types used throughout ward:
//! - Value types (the Value enum and its ValueKind discriminant)
//! - The rule-level ValidationError

mod error;
mod value;

pub use error::*;
pub use value::*;
