use crate::actions::{Action, ActionContext, StepOutcome, utils::normalize_url};
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Navigate payload: a bare URL string or `{ "url": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NavigateDetails {
    /// URL to open
    Url(String),
    Object {
        /// URL to open
        url: String,
    },
}

impl NavigateDetails {
    pub fn url(&self) -> &str {
        match self {
            NavigateDetails::Url(url) | NavigateDetails::Object { url } => url,
        }
    }
}

/// Opens a URL, then lets the page settle
#[derive(Default)]
pub struct NavigateAction;

impl Action for NavigateAction {
    type Details = NavigateDetails;

    fn name(&self) -> &'static str {
        "navigate"
    }

    fn description(&self) -> &'static str {
        "Open a URL in the browser. details: the URL string."
    }

    fn execute_typed(&self, details: &NavigateDetails, context: &mut ActionContext) -> Result<StepOutcome> {
        let url = normalize_url(details.url());
        log::info!("Navigating to {}", url);

        context.page.goto(&url)?;
        context.page.wait_for_timeout(context.timing.navigate_settle);

        Ok(StepOutcome::Completed)
    }
}
