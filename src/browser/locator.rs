/// A parsed element selector.
///
/// Instruction lists mix plain CSS with Playwright-style prefixes, so every selector string
/// is classified before it reaches the browser:
/// - `text=Generate` matches an element whose own text contains "Generate"
/// - `xpath=//button` or a bare `//button` is XPath
/// - `css=.panel` or anything else is CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    XPath(String),
    Text(String),
}

impl Locator {
    pub fn parse(selector: &str) -> Self {
        let trimmed = selector.trim();

        if let Some(text) = trimmed.strip_prefix("text=") {
            return Locator::Text(unquote(text.trim()).to_string());
        }
        if let Some(xpath) = trimmed.strip_prefix("xpath=") {
            return Locator::XPath(xpath.trim().to_string());
        }
        if let Some(css) = trimmed.strip_prefix("css=") {
            return Locator::Css(css.trim().to_string());
        }
        if trimmed.starts_with("//") || trimmed.starts_with("(//") {
            return Locator::XPath(trimmed.to_string());
        }

        Locator::Css(trimmed.to_string())
    }

    /// XPath expression for non-CSS locators
    pub fn to_xpath(&self) -> Option<String> {
        match self {
            Locator::Css(_) => None,
            Locator::XPath(xpath) => Some(xpath.clone()),
            Locator::Text(text) => Some(format!(
                "//*[not(self::script) and not(self::style) and contains(normalize-space(text()), {})]",
                xpath_literal(text)
            )),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Css(css) => write!(f, "css={}", css),
            Locator::XPath(xpath) => write!(f, "xpath={}", xpath),
            Locator::Text(text) => write!(f, "text={}", text),
        }
    }
}

fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Quote a string as an XPath 1.0 literal (which has no escape syntax)
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        return format!("'{}'", text);
    }
    if !text.contains('"') {
        return format!("\"{}\"", text);
    }

    let parts: Vec<String> = text.split('\'').map(|part| format!("'{}'", part)).collect();
    format!("concat({})", parts.join(", \"'\", "))
}
