//! End-to-end run: command → steps → browser → screenshot → report.

use crate::{artifacts::ArtifactStore,
            browser::PageDriver,
            config::{DEFAULT_COMMAND, TimingConfig},
            error::Result,
            interpreter::Interpreter,
            llm::{InstructionProvider, RefinementProvider}};
use std::path::PathBuf;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub command: String,
    /// Last extracted or refined code; `None` when no extraction happened
    pub final_code: Option<String>,
    pub iteration_count: u32,
    pub steps_total: usize,
    pub steps_executed: usize,
    pub steps_skipped: usize,
    /// Plan and code artifacts, in write order
    pub artifacts: Vec<PathBuf>,
    pub screenshot: PathBuf,
}

/// Pick the command to run: the caller's, unless it is missing or blank
pub fn resolve_command(command: Option<String>) -> String {
    command
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string())
}

/// Sequences one command execution
pub struct RunDriver<'a> {
    planner: &'a dyn InstructionProvider,
    refiner: &'a dyn RefinementProvider,
    artifacts: ArtifactStore,
    timing: TimingConfig,
}

impl<'a> RunDriver<'a> {
    pub fn new(
        planner: &'a dyn InstructionProvider,
        refiner: &'a dyn RefinementProvider,
        artifacts: ArtifactStore,
        timing: TimingConfig,
    ) -> Self {
        Self { planner, refiner, artifacts, timing }
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    /// Run `command` end to end.
    ///
    /// The page is only opened once a valid plan exists, so a bad plan never starts a
    /// browser. Any error ends the run; artifacts written before it stay on disk.
    pub fn run<P, F>(&self, command: &str, open_page: F) -> Result<RunReport>
    where
        P: PageDriver,
        F: FnOnce() -> Result<P>,
    {
        log::info!("Command: {}", command);

        let steps = self.planner.generate_instructions(command)?;
        log::info!("Received {} steps", steps.len());
        let plan_path = self.artifacts.write_instructions(&steps)?;

        let page = open_page()?;
        let interpreter = Interpreter::new(&page, self.refiner, &self.artifacts, self.timing);
        let execution = interpreter.execute(&steps)?;

        let screenshot = self.artifacts.screenshot_path();
        page.screenshot(&screenshot)?;
        log::info!("Saved screenshot to {}", screenshot.display());

        let mut artifacts = vec![plan_path];
        artifacts.extend(execution.artifacts);

        let report = RunReport {
            command: command.to_string(),
            iteration_count: execution.state.iteration_count(),
            final_code: execution.state.into_final_code(),
            steps_total: steps.len(),
            steps_executed: execution.executed,
            steps_skipped: execution.skipped,
            artifacts,
            screenshot,
        };

        match &report.final_code {
            Some(code) => log::info!(
                "Finished: {} bytes of code after {} refinement(s), {} of {} steps skipped",
                code.len(),
                report.iteration_count,
                report.steps_skipped,
                report.steps_total
            ),
            None => log::info!(
                "Finished without extracting any code, {} of {} steps skipped",
                report.steps_skipped,
                report.steps_total
            ),
        }

        Ok(report)
    }
}
