#![allow(dead_code)]

use builder_pilot::config::TimingConfig;
use builder_pilot::{PageDriver, PilotError, RefinementProvider, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

pub const NAVIGATE_SETTLE: Duration = Duration::from_millis(3000);
pub const INPUT_SETTLE: Duration = Duration::from_millis(1000);
pub const ELEMENT_TIMEOUT: Duration = Duration::from_millis(5000);

pub fn timing() -> TimingConfig {
    TimingConfig { navigate_settle: NAVIGATE_SETTLE, input_settle: INPUT_SETTLE, element_timeout: ELEMENT_TIMEOUT }
}

/// One call made against the page
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Goto(String),
    Fill(String, String, Duration),
    Click(String, Duration),
    InnerHtml(String, Duration),
    Screenshot(PathBuf),
    Wait(Duration),
}

/// Page stub that records every call; clones share the same log
#[derive(Clone, Default)]
pub struct RecordingPage {
    calls: Rc<RefCell<Vec<Call>>>,
    html: HashMap<String, String>,
    missing: HashSet<String>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for extraction from `selector`
    pub fn with_html(mut self, selector: &str, html: &str) -> Self {
        self.html.insert(selector.to_string(), html.to_string());
        self
    }

    /// Make `selector` never resolve
    pub fn with_missing(mut self, selector: &str) -> Self {
        self.missing.insert(selector.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PageDriver for RecordingPage {
    fn goto(&self, url: &str) -> Result<()> {
        self.record(Call::Goto(url.to_string()));
        Ok(())
    }

    fn fill(&self, selector: &str, text: &str, timeout: Duration) -> Result<()> {
        self.record(Call::Fill(selector.to_string(), text.to_string(), timeout));
        if self.missing.contains(selector) {
            return Err(PilotError::ElementNotFound(format!("'{}' not found within {}ms", selector, timeout.as_millis())));
        }
        Ok(())
    }

    fn click(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.record(Call::Click(selector.to_string(), timeout));
        if self.missing.contains(selector) {
            return Err(PilotError::ElementNotFound(format!("'{}' not found within {}ms", selector, timeout.as_millis())));
        }
        Ok(())
    }

    fn inner_html(&self, selector: &str, timeout: Duration) -> Result<String> {
        self.record(Call::InnerHtml(selector.to_string(), timeout));
        match self.html.get(selector) {
            Some(html) if !self.missing.contains(selector) => Ok(html.clone()),
            _ => Err(PilotError::ElementNotFound(format!("'{}' not found within {}ms", selector, timeout.as_millis()))),
        }
    }

    fn screenshot(&self, path: &Path) -> Result<()> {
        self.record(Call::Screenshot(path.to_path_buf()));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, b"\x89PNG")?;
        Ok(())
    }

    fn wait_for_timeout(&self, duration: Duration) {
        self.record(Call::Wait(duration));
    }
}

/// Refinement stub returning queued answers and recording what it was asked
#[derive(Default)]
pub struct ScriptedRefiner {
    requests: RefCell<Vec<(String, String)>>,
    responses: RefCell<VecDeque<Result<String>>>,
}

impl ScriptedRefiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, code: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(code.to_string()));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(PilotError::RefinementFailed(reason.to_string())));
        self
    }

    /// (code, refinement) pairs received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

impl RefinementProvider for ScriptedRefiner {
    fn refine_code(&self, code: &str, refinement: &str) -> Result<String> {
        self.requests.borrow_mut().push((code.to_string(), refinement.to_string()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PilotError::RefinementFailed("no scripted answer left".to_string())))
    }
}
