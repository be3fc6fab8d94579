use crate::actions::{Action, ActionContext, StepOutcome, utils::SelectorDetails};
use crate::error::Result;

/// Clicks an element once it is actionable, then lets the page settle.
///
/// A selector that does not resolve within the element timeout fails the whole run.
#[derive(Default)]
pub struct ClickAction;

impl Action for ClickAction {
    type Details = SelectorDetails;

    fn name(&self) -> &'static str {
        "click"
    }

    fn description(&self) -> &'static str {
        "Click an element. details: a CSS selector, or text=<visible text>."
    }

    fn execute_typed(&self, details: &SelectorDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        log::info!("Clicking '{}'", details.selector());

        context.page.click(details.selector(), context.timing.element_timeout)?;
        context.page.wait_for_timeout(context.timing.input_settle);

        Ok(StepOutcome::Completed)
    }
}
