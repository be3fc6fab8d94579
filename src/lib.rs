//! # builder-pilot
//!
//! Drive an AI web UI builder from a natural-language command: a language model turns the
//! command into browser steps, the steps run against Chrome via the Chrome DevTools Protocol
//! (CDP), the generated UI code is extracted, and further steps refine it through the model.
//!
//! ## Running
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run -- "Open v0.dev, ask for a kanban board, extract the code, then add a dark mode"
//! ```
//!
//! Every extraction and refinement is written to the output directory
//! (`extracted_code.html`, `refined_code_iteration_<n>.html`), together with the decoded plan
//! (`instructions.json`) and a screenshot of the final page (`final_state.png`).
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use builder_pilot::{AppConfig, ArtifactStore, OpenAiClient, RunDriver, browser};
//!
//! # fn main() -> builder_pilot::Result<()> {
//! let config = AppConfig::from_env()?;
//! let client = OpenAiClient::from_config(&config.llm)?;
//! let driver = RunDriver::new(&client, &client, ArtifactStore::new(&config.output_dir), config.timing);
//!
//! let report = driver.run("Build a landing page for a bakery on v0.dev and make it responsive", || {
//!     browser::open_session(&config.browser)
//! })?;
//! println!("{} refinement(s)", report.iteration_count);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running a fixed plan
//!
//! Step lists can also be written by hand and run directly through the [`Interpreter`]:
//!
//! ```rust,no_run
//! use builder_pilot::{ArtifactStore, BrowserSession, LaunchOptions, Interpreter, config::TimingConfig};
//! use builder_pilot::instruction::parse_steps;
//! use serde_json::json;
//!
//! # fn main() -> builder_pilot::Result<()> {
//! let steps = parse_steps(json!([
//!     {"action": "navigate", "details": "https://example.com"},
//!     {"action": "extractCode", "details": "body"}
//! ]))?;
//!
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let artifacts = ArtifactStore::new("output");
//! let no_refinement = |code: &str, _: &str| -> builder_pilot::Result<String> { Ok(code.to_string()) };
//! let timing = TimingConfig {
//!     navigate_settle: std::time::Duration::from_secs(1),
//!     input_settle: std::time::Duration::from_millis(500),
//!     element_timeout: std::time::Duration::from_secs(10),
//! };
//!
//! let execution = Interpreter::new(&session, &no_refinement, &artifacts, timing).execute(&steps)?;
//! println!("{:?}", execution.final_code());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`instruction`]: step lists and their decoding
//! - [`interpreter`]: sequential step execution and run state
//! - [`actions`]: per-action handlers
//! - [`browser`]: the page facade and its Chrome implementation
//! - [`llm`]: instruction and refinement providers
//! - [`driver`]: end-to-end orchestration
//! - [`artifacts`], [`config`], [`error`]

pub mod actions;
pub mod artifacts;
pub mod browser;
pub mod config;
pub mod driver;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod llm;

pub use artifacts::ArtifactStore;
pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, PageDriver};
pub use config::AppConfig;
pub use driver::{RunDriver, RunReport};
pub use error::{PilotError, Result};
pub use instruction::{RawStep, Step};
pub use interpreter::{Execution, Interpreter, RunState};
pub use llm::{InstructionProvider, OpenAiClient, RefinementProvider};
