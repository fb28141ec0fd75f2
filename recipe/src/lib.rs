//! Ward Recipe
//!
//! A burger recipe: six fields, each guarded by a rule.
//!
//! ```text
//! buns      [2..=3]
//! cheese    [0..=2]
//! tomatoes  [0..=3]
//! cutlets   [1..=3]
//! eggs      [0..=2]
//! sauce     one of ["ketchup", "mayo", "burger"]
//! ```
//!
//! Construction assigns fields in that order and stops at the first
//! rejected value without undoing earlier assignments.

mod limits;
mod recipe;

pub use limits::*;
pub use recipe::{recipe_schema, BurgerRecipe};
