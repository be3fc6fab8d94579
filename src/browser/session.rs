use crate::{browser::{config::{ConnectionOptions, LaunchOptions},
                      locator::Locator,
                      page::PageDriver},
            error::{PilotError, Result}};
use headless_chrome::{Browser, Element, Tab, protocol::cdp::Page::CaptureScreenshotFormatOption};
use std::{ffi::OsStr, path::Path, sync::Arc, time::Duration};

/// Clears an input, textarea or contenteditable element and focuses it
const CLEAR_AND_FOCUS_JS: &str = r#"function() {
    if ('value' in this) {
        this.value = '';
        this.dispatchEvent(new Event('input', { bubbles: true }));
    } else if (this.isContentEditable) {
        this.textContent = '';
    }
    this.focus();
    return true;
}"#;

const INNER_HTML_JS: &str = "function() { return this.innerHTML; }";

/// Browser session that owns a Chrome/Chromium instance and the single page it drives
pub struct BrowserSession {
    /// Owns the Chrome process; dropping it shuts the browser down
    _browser: Browser,

    /// The page every step runs against
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Builder UIs can take minutes to generate, keep the browser alive meanwhile
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.path = options.chrome_path;
        launch_opts.user_data_dir = options.user_data_dir;
        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| PilotError::LaunchFailed(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| PilotError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::info!("Launched browser (headless: {})", options.headless);
        Ok(Self { _browser: browser, tab })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect_with_timeout(options.ws_url.clone(), Duration::from_millis(options.timeout))
            .map_err(|e| PilotError::ConnectionFailed(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| PilotError::TabOperationFailed(format!("Failed to create tab: {}", e)))?;

        log::info!("Connected to browser at {}", options.ws_url);
        Ok(Self { _browser: browser, tab })
    }

    /// Resolve a locator, waiting at most `timeout` for a match
    fn wait_for(&self, selector: &str, timeout: Duration) -> Result<Element<'_>> {
        let locator = Locator::parse(selector);
        let found = match locator.to_xpath() {
            Some(xpath) => self.tab.wait_for_xpath_with_custom_timeout(&xpath, timeout),
            None => self.tab.wait_for_element_with_custom_timeout(selector_css(&locator), timeout),
        };

        found.map_err(|e| {
            PilotError::ElementNotFound(format!("'{}' not found within {}ms: {}", locator, timeout.as_millis(), e))
        })
    }
}

fn selector_css(locator: &Locator) -> &str {
    match locator {
        Locator::Css(css) => css,
        Locator::XPath(s) | Locator::Text(s) => s,
    }
}

impl PageDriver for BrowserSession {
    fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| PilotError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| PilotError::NavigationFailed(format!("Navigation timeout: {}", e)))?;
        Ok(())
    }

    fn fill(&self, selector: &str, text: &str, timeout: Duration) -> Result<()> {
        let element = self.wait_for(selector, timeout)?;

        element
            .call_js_fn(CLEAR_AND_FOCUS_JS, vec![], false)
            .map_err(|e| PilotError::EvaluationFailed(e.to_string()))?;
        element
            .type_into(text)
            .map_err(|e| PilotError::ActionFailed { action: "type".to_string(), reason: e.to_string() })?;

        Ok(())
    }

    fn click(&self, selector: &str, timeout: Duration) -> Result<()> {
        let element = self.wait_for(selector, timeout)?;
        element
            .click()
            .map_err(|e| PilotError::ActionFailed { action: "click".to_string(), reason: e.to_string() })?;
        Ok(())
    }

    fn inner_html(&self, selector: &str, timeout: Duration) -> Result<String> {
        let element = self.wait_for(selector, timeout)?;
        let result = element
            .call_js_fn(INNER_HTML_JS, vec![], false)
            .map_err(|e| PilotError::EvaluationFailed(e.to_string()))?;

        match result.value {
            Some(serde_json::Value::String(html)) => Ok(html),
            Some(other) => Ok(other.to_string()),
            None => Ok(String::new()),
        }
    }

    fn screenshot(&self, path: &Path) -> Result<()> {
        let png = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| PilotError::ScreenshotFailed(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, png)
            .map_err(|source| PilotError::Artifact { path: path.to_path_buf(), source })?;
        Ok(())
    }

    fn wait_for_timeout(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
