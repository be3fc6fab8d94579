use crate::error::Result;
use std::{path::Path, time::Duration};

/// The page-level capabilities the interpreter drives.
///
/// One implementation talks to Chrome ([`BrowserSession`](super::BrowserSession)); tests
/// provide recording stubs. Every call blocks until the underlying operation settles, so
/// steps execute strictly one after another.
pub trait PageDriver {
    /// Navigate the page to `url` and wait for the navigation to commit
    fn goto(&self, url: &str) -> Result<()>;

    /// Replace the content of the element matching `selector` with `text`, waiting at most
    /// `timeout` for it to appear
    fn fill(&self, selector: &str, text: &str, timeout: Duration) -> Result<()>;

    /// Click the element matching `selector`, waiting at most `timeout` for it to appear
    fn click(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Wait at most `timeout` for `selector`, then return the element's inner HTML
    fn inner_html(&self, selector: &str, timeout: Duration) -> Result<String>;

    /// Write a PNG screenshot of the current viewport to `path`
    fn screenshot(&self, path: &Path) -> Result<()>;

    /// Pause the step sequence
    fn wait_for_timeout(&self, duration: Duration);
}
