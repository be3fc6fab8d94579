//! The step interpreter.
//!
//! Runs a decoded instruction list against one page, strictly in order: each step finishes
//! (or fails) before the next one starts, because later steps depend on what earlier ones
//! left behind. Skipped steps are logged and the run continues; an `Err` from a step ends
//! the run and the remaining steps never execute.

pub mod state;

pub use state::RunState;

use crate::{actions::{Action, ActionContext, ClickAction, ExtractCodeAction, NavigateAction, RefineCodeAction,
                      StepOutcome, TypeAction, WaitAction},
            artifacts::ArtifactStore,
            browser::PageDriver,
            config::TimingConfig,
            error::Result,
            instruction::Step,
            llm::RefinementProvider};
use std::path::PathBuf;

/// Result of a complete pass over an instruction list
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub state: RunState,
    pub executed: usize,
    pub skipped: usize,
    /// Code artifacts written, in order
    pub artifacts: Vec<PathBuf>,
}

impl Execution {
    pub fn final_code(&self) -> Option<&str> {
        self.state.has_code().then(|| self.state.current_code())
    }
}

/// Executes instruction lists against a page
pub struct Interpreter<'a> {
    page: &'a dyn PageDriver,
    refiner: &'a dyn RefinementProvider,
    artifacts: &'a ArtifactStore,
    timing: TimingConfig,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        page: &'a dyn PageDriver,
        refiner: &'a dyn RefinementProvider,
        artifacts: &'a ArtifactStore,
        timing: TimingConfig,
    ) -> Self {
        Self { page, refiner, artifacts, timing }
    }

    /// Run every step with a fresh [`RunState`]
    pub fn execute(&self, steps: &[Step]) -> Result<Execution> {
        let mut execution = Execution { state: RunState::new(), executed: 0, skipped: 0, artifacts: Vec::new() };
        let total = steps.len();

        for (index, step) in steps.iter().enumerate() {
            log::info!("Step {}/{}: {}", index + 1, total, step.action_name());

            let mut context = ActionContext {
                page: self.page,
                refiner: self.refiner,
                artifacts: self.artifacts,
                timing: &self.timing,
                state: &mut execution.state,
            };

            match dispatch(step, &mut context)? {
                StepOutcome::Completed => execution.executed += 1,
                StepOutcome::Persisted(path) => {
                    log::info!("Saved {}", path.display());
                    execution.executed += 1;
                    execution.artifacts.push(path);
                }
                StepOutcome::Skipped(reason) => {
                    log::warn!("Skipping step {} ({}): {}", index + 1, step.action_name(), reason);
                    execution.skipped += 1;
                }
            }
        }

        Ok(execution)
    }
}

fn dispatch(step: &Step, context: &mut ActionContext) -> Result<StepOutcome> {
    match step {
        Step::Navigate(details) => NavigateAction.execute_typed(details, context),
        Step::Wait(details) => WaitAction.execute_typed(details, context),
        Step::Type(details) => TypeAction.execute_typed(details, context),
        Step::Click(details) => ClickAction.execute_typed(details, context),
        Step::ExtractCode(details) => ExtractCodeAction.execute_typed(details, context),
        Step::RefineCode(details) => RefineCodeAction.execute_typed(details, context),
        Step::Malformed { reason, .. } => Ok(StepOutcome::Skipped(format!("malformed details: {}", reason))),
        Step::Unknown { action, .. } if action.is_empty() => Ok(StepOutcome::Skipped("missing action".to_string())),
        Step::Unknown { action, .. } => Ok(StepOutcome::Skipped(format!("unknown action '{}'", action))),
    }
}
