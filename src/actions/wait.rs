use crate::actions::{Action, ActionContext, StepOutcome};
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest single pause; larger durations are clamped to it
pub const MAX_WAIT_MS: u64 = 10 * 60 * 1000;

/// Wait payload: milliseconds as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum WaitDetails {
    /// Milliseconds
    Millis(f64),
    /// Milliseconds as text, e.g. "2000"
    Text(String),
}

impl WaitDetails {
    /// Milliseconds to wait, at most [`MAX_WAIT_MS`]. Strings are read up to the first
    /// non-digit, so "2000ms" is 2000; anything without a leading number is `None`.
    pub fn millis(&self) -> Option<u64> {
        match self {
            WaitDetails::Millis(ms) if ms.is_finite() && *ms >= 0.0 => {
                Some(ms.min(MAX_WAIT_MS as f64).trunc() as u64)
            }
            WaitDetails::Millis(_) => None,
            WaitDetails::Text(text) => {
                let digits: String = text.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
                if digits.is_empty() {
                    return None;
                }
                // Digit runs too long for u64 are still durations, just very long ones
                Some(digits.parse::<u64>().map_or(MAX_WAIT_MS, |ms| ms.min(MAX_WAIT_MS)))
            }
        }
    }
}

/// Pauses the step sequence
#[derive(Default)]
pub struct WaitAction;

impl Action for WaitAction {
    type Details = WaitDetails;

    fn name(&self) -> &'static str {
        "wait"
    }

    fn description(&self) -> &'static str {
        "Pause before the next step, e.g. while the builder generates. details: milliseconds as a number."
    }

    fn execute_typed(&self, details: &WaitDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        let Some(ms) = details.millis() else {
            return Ok(StepOutcome::Skipped(format!("wait duration {:?} is not a number", details)));
        };

        log::debug!("Waiting {}ms", ms);
        context.page.wait_for_timeout(Duration::from_millis(ms));
        Ok(StepOutcome::Completed)
    }
}
