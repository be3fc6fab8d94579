use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Normalize an incomplete URL by adding missing protocol and handling common patterns
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    // If already has a protocol, return as-is
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
        || trimmed.starts_with("chrome://")
    {
        return trimmed.to_string();
    }

    // Relative paths resolve against the current page
    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with("../") {
        return trimmed.to_string();
    }

    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    if trimmed.contains('.') {
        return format!("https://{}", trimmed);
    }

    // Single word: "v0" -> "https://www.v0.com"
    format!("https://www.{}.com", trimmed)
}

/// Selector payload shared by `click` and `extractCode`: either a bare selector string or
/// an object carrying a `selector` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SelectorDetails {
    /// CSS selector, `text=...` or `xpath=...`
    Selector(String),
    Object {
        /// CSS selector, `text=...` or `xpath=...`
        selector: String,
    },
}

impl SelectorDetails {
    pub fn selector(&self) -> &str {
        match self {
            SelectorDetails::Selector(selector) | SelectorDetails::Object { selector } => selector,
        }
    }
}
