use crate::actions::{Action, ActionContext, StepOutcome};
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Refinement payload: `{ "refinement": ... }` or the instruction as a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RefineDetails {
    Object {
        /// What to change in the current code
        refinement: String,
    },
    /// What to change in the current code
    Text(String),
}

impl RefineDetails {
    pub fn refinement(&self) -> &str {
        match self {
            RefineDetails::Object { refinement } | RefineDetails::Text(refinement) => refinement,
        }
    }
}

/// Sends the current code through the refinement provider.
///
/// Refinement is best effort: with nothing extracted yet, or when the provider fails, the
/// step is skipped and the run state stays as it was.
#[derive(Default)]
pub struct RefineCodeAction;

impl Action for RefineCodeAction {
    type Details = RefineDetails;

    fn name(&self) -> &'static str {
        "refineCode"
    }

    fn description(&self) -> &'static str {
        "Rewrite the extracted code with an instruction. Requires an earlier extractCode. details: {\"refinement\": ...}."
    }

    fn execute_typed(&self, details: &RefineDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        if !context.state.has_code() {
            return Ok(StepOutcome::Skipped("no code has been extracted yet".to_string()));
        }

        let refinement = details.refinement();
        log::info!("Refining code: {}", refinement);

        let refined = match context.refiner.refine_code(context.state.current_code(), refinement) {
            Ok(code) => code,
            Err(e) => return Ok(StepOutcome::Skipped(format!("refinement provider failed: {}", e))),
        };
        if refined.trim().is_empty() {
            return Ok(StepOutcome::Skipped("refinement provider returned no code".to_string()));
        }

        let iteration = context.state.iteration_count() + 1;
        let path = context.artifacts.write_iteration(iteration, &refined)?;
        context.state.record_refinement(refined);

        Ok(StepOutcome::Persisted(path))
    }
}
