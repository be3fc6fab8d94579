//! Step handlers.
//!
//! Each action owns the shape of its `details` payload (`Action::Details`) and executes a
//! decoded payload against the page, the run state and, for refinement, the refinement
//! provider. Recoverable problems come back as [`StepOutcome::Skipped`]; only errors that
//! mean the page is not in the expected state are returned as `Err`.

pub mod click;
pub mod extract;
pub mod input;
pub mod navigate;
pub mod refine;
pub mod utils;
pub mod wait;

pub use click::ClickAction;
pub use extract::ExtractCodeAction;
pub use input::{TypeAction, TypeDetails};
pub use navigate::{NavigateAction, NavigateDetails};
pub use refine::{RefineCodeAction, RefineDetails};
pub use utils::SelectorDetails;
pub use wait::{WaitAction, WaitDetails};

use crate::{artifacts::ArtifactStore,
            browser::PageDriver,
            config::TimingConfig,
            error::Result,
            interpreter::RunState,
            llm::RefinementProvider};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Everything a step handler may touch while it runs
pub struct ActionContext<'a> {
    pub page: &'a dyn PageDriver,
    pub refiner: &'a dyn RefinementProvider,
    pub artifacts: &'a ArtifactStore,
    pub timing: &'a TimingConfig,
    pub state: &'a mut RunState,
}

/// How a step ended
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Completed,
    /// Completed and wrote an artifact
    Persisted(PathBuf),
    /// Recoverable problem; the run continues with the next step
    Skipped(String),
}

/// A browser action an instruction list can name
pub trait Action {
    type Details: DeserializeOwned + JsonSchema;

    /// Action tag as it appears in instruction lists
    fn name(&self) -> &'static str;

    /// One-line description shown to the instruction model
    fn description(&self) -> &'static str;

    /// JSON Schema of the accepted `details` payload
    fn details_schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Self::Details)).unwrap_or_default()
    }

    fn execute_typed(&self, details: &Self::Details, context: &mut ActionContext) -> Result<StepOutcome>;
}
