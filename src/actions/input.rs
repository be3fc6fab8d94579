use crate::actions::{Action, ActionContext, StepOutcome};
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TypeDetails {
    /// Selector of the input, textarea or contenteditable element
    pub selector: String,

    /// Text that replaces the element's current content
    pub text: String,
}

/// Fills an input with text, then lets the page settle
#[derive(Default)]
pub struct TypeAction;

impl Action for TypeAction {
    type Details = TypeDetails;

    fn name(&self) -> &'static str {
        "type"
    }

    fn description(&self) -> &'static str {
        "Fill a text field. details: {\"selector\": ..., \"text\": ...}."
    }

    fn execute_typed(&self, details: &TypeDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        log::info!("Typing {} characters into '{}'", details.text.chars().count(), details.selector);

        context.page.fill(&details.selector, &details.text, context.timing.element_timeout)?;
        context.page.wait_for_timeout(context.timing.input_settle);

        Ok(StepOutcome::Completed)
    }
}
