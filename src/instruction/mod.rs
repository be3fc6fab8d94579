//! Instruction lists.
//!
//! Step lists come from a language model and are untrusted. They are decoded once, on
//! receipt, into [`Step`]: a list that is not an array of `{action, details}` objects is an
//! [`PilotError::InstructionFormat`] error, while an element whose `details` do not fit its
//! action, or whose action is unknown or missing, becomes a variant the interpreter skips.

use crate::actions::{Action, ClickAction, ExtractCodeAction, NavigateAction, NavigateDetails, RefineCodeAction,
                     RefineDetails, SelectorDetails, TypeAction, TypeDetails, WaitAction, WaitDetails};
use crate::error::{PilotError, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};

/// A step exactly as the instruction provider sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStep {
    pub action: String,
    #[serde(default)]
    pub details: Value,
}

/// A decoded step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Navigate(NavigateDetails),
    Wait(WaitDetails),
    Type(TypeDetails),
    Click(SelectorDetails),
    ExtractCode(SelectorDetails),
    RefineCode(RefineDetails),
    /// Known action whose details have the wrong shape
    Malformed { action: String, details: Value, reason: String },
    Unknown { action: String, details: Value },
}

impl Step {
    /// Decode a raw step. Never fails: bad payloads become `Malformed` or `Unknown`.
    pub fn from_raw(raw: RawStep) -> Self {
        let RawStep { action, details } = raw;

        match canonical_action(&action) {
            "navigate" => decode(&NavigateAction, action, details, Step::Navigate),
            "wait" => match serde_json::from_value::<WaitDetails>(details.clone()) {
                Ok(wait) if wait.millis().is_some() => Step::Wait(wait),
                Ok(_) => Step::Malformed { action, details, reason: "duration is not a number".to_string() },
                Err(e) => Step::Malformed { action, details, reason: e.to_string() },
            },
            "type" => decode(&TypeAction, action, details, Step::Type),
            "click" => decode(&ClickAction, action, details, Step::Click),
            "extractcode" => decode(&ExtractCodeAction, action, details, Step::ExtractCode),
            "refinecode" => decode(&RefineCodeAction, action, details, Step::RefineCode),
            _ => Step::Unknown { action, details },
        }
    }

    /// Action tag for logging
    pub fn action_name(&self) -> &str {
        match self {
            Step::Navigate(_) => NavigateAction.name(),
            Step::Wait(_) => WaitAction.name(),
            Step::Type(_) => TypeAction.name(),
            Step::Click(_) => ClickAction.name(),
            Step::ExtractCode(_) => ExtractCodeAction.name(),
            Step::RefineCode(_) => RefineCodeAction.name(),
            Step::Malformed { action, .. } | Step::Unknown { action, .. } => action.as_str(),
        }
    }

    /// Back to the wire shape, for persisting the plan
    pub fn to_raw(&self) -> RawStep {
        let details = match self {
            Step::Navigate(d) => serde_json::to_value(d),
            Step::Wait(d) => serde_json::to_value(d),
            Step::Type(d) => serde_json::to_value(d),
            Step::Click(d) | Step::ExtractCode(d) => serde_json::to_value(d),
            Step::RefineCode(d) => serde_json::to_value(d),
            Step::Malformed { details, .. } | Step::Unknown { details, .. } => Ok(details.clone()),
        };

        RawStep { action: self.action_name().to_string(), details: details.unwrap_or(Value::Null) }
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

fn decode<A: Action>(_action: &A, name: String, details: Value, wrap: fn(A::Details) -> Step) -> Step {
    match serde_json::from_value::<A::Details>(details.clone()) {
        Ok(decoded) => wrap(decoded),
        Err(e) => Step::Malformed { action: name, details, reason: e.to_string() },
    }
}

/// Case- and separator-insensitive action tag ("extract_code" and "extractCode" agree)
fn canonical_action(action: &str) -> &'static str {
    let folded: String = action
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match folded.as_str() {
        "navigate" | "goto" => "navigate",
        "wait" => "wait",
        "type" | "fill" => "type",
        "click" => "click",
        "extractcode" => "extractcode",
        "refinecode" => "refinecode",
        _ => "",
    }
}

/// Decode a step list from provider output.
///
/// Accepts a JSON array, or an object wrapping the array under `steps` or `instructions`.
/// Only the list itself can be malformed; bad elements decode to skippable steps.
pub fn parse_steps(value: Value) -> Result<Vec<Step>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("steps").or_else(|| map.remove("instructions")) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PilotError::InstructionFormat(
                    "expected a JSON array of steps or an object with a 'steps' array".to_string(),
                ));
            }
        },
        other => {
            return Err(PilotError::InstructionFormat(format!("expected a JSON array of steps, got {}", kind(&other))));
        }
    };

    Ok(items.into_iter().map(step_from_value).collect())
}

/// Decode one list element. An element without a string `action` is kept as `Unknown` so the
/// rest of the list still runs.
fn step_from_value(item: Value) -> Step {
    let Value::Object(mut map) = item else {
        return Step::Unknown { action: String::new(), details: item };
    };

    let details = map.remove("details").unwrap_or(Value::Null);
    match map.remove("action") {
        Some(Value::String(action)) => Step::from_raw(RawStep { action, details }),
        Some(other) => Step::Unknown { action: other.to_string(), details },
        None => Step::Unknown { action: String::new(), details },
    }
}

/// Decode a step list from raw provider text
pub fn parse_step_list(text: &str) -> Result<Vec<Step>> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| PilotError::InstructionFormat(format!("response is not valid JSON: {}", e)))?;
    parse_steps(value)
}

/// Every supported action with its description and details schema, in prompt order
pub fn action_catalog() -> Value {
    fn entry<A: Action>(action: A) -> Value {
        json!({
            "action": action.name(),
            "description": action.description(),
            "details": action.details_schema(),
        })
    }

    json!([
        entry(NavigateAction),
        entry(WaitAction),
        entry(TypeAction),
        entry(ClickAction),
        entry(ExtractCodeAction),
        entry(RefineCodeAction),
    ])
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
