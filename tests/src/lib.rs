//! Ward Tests
//!
//! A small scenario framework: a scenario is an ordered list of steps
//! (construct a record, reassign a field), each followed by an assertion
//! on the outcome and on the record's observable state.
//!
//! ```ignore
//! Scenario::new("reassign_keeps_value")
//!     .construct("build", values![2, 1, 1, 1, 1, "burger"], |a| a.ok())
//!     .set("bad_cheese", "cheese", "two", |a| {
//!         a.rejected("cheese", "TypeMismatch").reads("cheese", 1)
//!     })
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod runner;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use runner::Runner;
pub use scenario::{Action, Scenario, Step};
pub use ward_core::Value;

/// Build a `Vec<Value>` from heterogeneous literals.
#[macro_export]
macro_rules! values {
    () => {
        Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

pub mod prelude {
    pub use crate::values;
    pub use crate::{AssertionBuilder, Scenario, ScenarioError, ScenarioResult, Value};
    pub use ward_recipe::{recipe_schema, BurgerRecipe};
    pub use ward_schema::{Record, RecordError, RecordState};
}
