//! Scenario runner and report rendering for the `propkit` binary.

use propkit_model::{ErrorKind, FieldOwner, ParamEntry, Result, SampleObject, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Result of one step of the walkthrough.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Variant>,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub action: String,
    pub outcome: Outcome,
}

/// Everything the walkthrough observed, in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScenarioReport {
    pub fields: Vec<String>,
    pub steps: Vec<Step>,
    pub final_values: Vec<ParamEntry>,
}

impl fmt::Display for ScenarioReport {
    /// Plain text, one line per fact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered params:")?;
        for name in &self.fields {
            writeln!(f, "  {name}")?;
        }
        for step in &self.steps {
            match &step.outcome {
                Outcome::Ok { value: Some(v) } => writeln!(f, "{}: ok ({v})", step.action)?,
                Outcome::Ok { value: None } => writeln!(f, "{}: ok", step.action)?,
                Outcome::Failed { message, .. } => {
                    writeln!(f, "{}: failed - {message}", step.action)?
                }
            }
        }
        for entry in &self.final_values {
            writeln!(f, "{:<10}{}", format!("{}:", entry.name), entry.value)?;
        }
        Ok(())
    }
}

fn record(steps: &mut Vec<Step>, action: impl Into<String>, result: Result<Option<Variant>>) {
    let action = action.into();
    let outcome = match result {
        Ok(value) => Outcome::Ok { value },
        Err(e) => {
            info!(action = %action, error = %e, "Step rejected");
            Outcome::Failed {
                kind: e.kind(),
                message: e.to_string(),
            }
        }
    };
    steps.push(Step { action, outcome });
}

/// Runs the standard walkthrough against a fresh [`SampleObject`].
///
/// Rejected writes are recorded in the report, not returned as errors; only
/// a failure to build the object is.
pub fn run_scenario() -> Result<ScenarioReport> {
    let mut object = SampleObject::new()?;
    let fields = object.list_fields().map(str::to_string).collect();
    let mut steps = Vec::new();

    info!("Setting myInt = 5");
    let result = object
        .set_param(SampleObject::MY_INT, Variant::from(5_i64))
        .and_then(|()| object.get_param(SampleObject::MY_INT))
        .map(Some);
    record(&mut steps, "set myInt = 5", result);

    let too_long = "012345678901234567890";
    let result = object
        .set_param(SampleObject::MY_STRING, Variant::from(too_long))
        .map(|()| None);
    record(&mut steps, format!("set myString = {too_long:?}"), result);

    let result = object
        .set_param(SampleObject::MY_DOUBLE, Variant::from("123"))
        .map(|()| None);
    record(&mut steps, "set myDouble = \"123\"", result);

    info!("Zeroing all fields from the object itself");
    let result = object.reset_to_zero().map(|()| None);
    record(&mut steps, "reset_to_zero", result);

    Ok(ScenarioReport {
        fields,
        steps,
        final_values: object.snapshot(),
    })
}
