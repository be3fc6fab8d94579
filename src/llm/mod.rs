//! Language-model collaborators: turning a command into steps and rewriting code.

pub mod openai;
pub mod prompts;

pub use openai::OpenAiClient;

use crate::error::Result;
use crate::instruction::Step;

/// Turns a natural-language command into an ordered step list.
///
/// Output that does not decode as a step list must fail with
/// [`PilotError::InstructionFormat`](crate::error::PilotError::InstructionFormat).
pub trait InstructionProvider {
    fn generate_instructions(&self, command: &str) -> Result<Vec<Step>>;
}

/// Rewrites a complete document according to an instruction, returning the whole new
/// document rather than a diff
pub trait RefinementProvider {
    fn refine_code(&self, code: &str, refinement: &str) -> Result<String>;
}

impl<F> InstructionProvider for F
where
    F: Fn(&str) -> Result<Vec<Step>>,
{
    fn generate_instructions(&self, command: &str) -> Result<Vec<Step>> {
        self(command)
    }
}

impl<F> RefinementProvider for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn refine_code(&self, code: &str, refinement: &str) -> Result<String> {
        self(code, refinement)
    }
}

/// Strip a surrounding markdown code fence (```json ... ```), which models add even when
/// told not to
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json", "html", ...) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}
