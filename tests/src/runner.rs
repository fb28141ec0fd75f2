//! Scenario runner.

use std::sync::Arc;

use ward_schema::Record;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Action, Scenario};

/// Runs a scenario's steps against one record.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<Record> {
        if self.scenario.steps().is_empty() {
            return Err(ScenarioError::empty(self.scenario.name()));
        }

        let schema = self.scenario.schema_ref();
        let mut record = Record::uninit(Arc::clone(schema));

        for step in self.scenario.steps() {
            let result = match &step.action {
                Action::Construct(values) => {
                    match Record::construct(Arc::clone(schema), values.clone()) {
                        Ok(built) => {
                            record = built;
                            Ok(())
                        }
                        // Keep the partial record: later assertions inspect it.
                        Err(e) => {
                            record = e.record;
                            Err(e.error)
                        }
                    }
                }
                Action::Set { field, value } => record.set(field, value.clone()),
            };

            step.assertion.verify(&step.name, &result, &record)?;
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use crate::values;
    use crate::Scenario;

    #[test]
    fn test_empty_scenario_is_an_error() {
        let err = Scenario::new("nothing").run().unwrap_err();

        assert_eq!(err.to_string(), "Scenario nothing has no steps");
    }

    #[test]
    fn test_failed_assertion_names_step() {
        // GIVEN - a valid recipe asserted to fail
        let scenario = Scenario::new("wrong_expectation").construct(
            "build",
            values![2, 1, 1, 1, 1, "burger"],
            |a| a.rejected("buns", "OutOfRange"),
        );

        // WHEN
        let err = scenario.run().unwrap_err();

        // THEN
        assert!(err.to_string().contains("step 'build'"));
    }
}
