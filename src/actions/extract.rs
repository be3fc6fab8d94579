use crate::actions::{Action, ActionContext, StepOutcome, utils::SelectorDetails};
use crate::error::Result;

/// Reads the inner HTML of the generated UI into the run state and persists it
#[derive(Default)]
pub struct ExtractCodeAction;

impl Action for ExtractCodeAction {
    type Details = SelectorDetails;

    fn name(&self) -> &'static str {
        "extractCode"
    }

    fn description(&self) -> &'static str {
        "Capture the generated UI code from the element holding it. details: a CSS selector."
    }

    fn execute_typed(&self, details: &SelectorDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        let html = context.page.inner_html(details.selector(), context.timing.element_timeout)?;
        log::info!("Extracted {} bytes of code from '{}'", html.len(), details.selector());

        let path = context.artifacts.write_extracted(&html)?;
        context.state.set_code(html);

        Ok(StepOutcome::Persisted(path))
    }
}
