use crate::instruction::action_catalog;

const PLANNER_PREAMBLE: &str = "You control a web browser pointed at an AI web UI builder. \
Translate the user's command into an ordered list of browser steps.

Respond with a JSON array only, no prose and no markdown. Each element has the form
{\"action\": <action name>, \"details\": <payload>}.

Rules:
- Start with a navigate step.
- After submitting a prompt to the builder, add a wait step long enough for generation (10000-30000 ms).
- Use extractCode on the element that holds the generated code before any refineCode step.
- Each refineCode step carries one self-contained change request.

Available actions (details must match the given JSON Schema):";

const REFINER_SYSTEM: &str = "You are a senior front-end engineer. You receive a UI document and a change request. \
Apply the change and return the complete updated document. Return only the code: no explanations and no markdown fences.";

/// System prompt for instruction generation, listing every action and its payload schema
pub fn planner_system_prompt() -> String {
    let catalog = serde_json::to_string_pretty(&action_catalog()).unwrap_or_default();
    format!("{}\n{}", PLANNER_PREAMBLE, catalog)
}

pub fn refiner_system_prompt() -> &'static str {
    REFINER_SYSTEM
}

/// User message for a refinement request
pub fn refiner_user_prompt(code: &str, refinement: &str) -> String {
    format!("Change request:\n{}\n\nCurrent code:\n{}", refinement, code)
}
