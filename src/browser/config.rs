use crate::config::BrowserConfig;
use std::path::PathBuf;

/// Options for launching a new browser instance
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run the browser without a visible window
    pub headless: bool,

    /// Window width in pixels
    pub window_width: u32,

    /// Window height in pixels
    pub window_height: u32,

    /// Custom Chrome/Chromium binary
    pub chrome_path: Option<PathBuf>,

    /// Persistent profile directory
    pub user_data_dir: Option<PathBuf>,

    /// Enable the Chrome sandbox
    pub sandbox: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1440,
            window_height: 900,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method: set Chrome binary path
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: set user data directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Builder method: toggle the sandbox
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}

impl From<&BrowserConfig> for LaunchOptions {
    fn from(config: &BrowserConfig) -> Self {
        let mut options = Self::new().headless(config.headless);
        if let Some(path) = &config.chrome_path {
            options = options.chrome_path(path.clone());
        }
        options
    }
}

/// Options for connecting to an already running browser
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// WebSocket debugger URL (ws://host:port/devtools/browser/<id>)
    pub ws_url: String,

    /// Connection timeout in milliseconds
    pub timeout: u64,
}

impl ConnectionOptions {
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self { ws_url: ws_url.into(), timeout: 30_000 }
    }

    /// Builder method: set connection timeout
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}
