use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while planning, driving the browser, or persisting artifacts
#[derive(Debug, Error)]
pub enum PilotError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// A selector did not resolve (or never became actionable) within its bound
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    /// The instruction provider returned something that is not a step list
    #[error("Malformed instruction list: {0}")]
    InstructionFormat(String),

    #[error("Refinement failed: {0}")]
    RefinementFailed(String),

    #[error("LLM request failed: {0}")]
    Llm(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PilotError {
    fn from(e: reqwest::Error) -> Self {
        PilotError::Llm(e.to_string())
    }
}

/// Result type alias for builder-pilot operations
pub type Result<T> = std::result::Result<T, PilotError>;
