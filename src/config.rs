//! Runtime configuration with environment variable support.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `BUILDER_PILOT_LLM_ENDPOINT` | OpenAI-compatible API base URL | `https://api.openai.com/v1` |
//! | `BUILDER_PILOT_LLM_MODEL` | Model used for planning and refinement | `gpt-4o` |
//! | `BUILDER_PILOT_API_KEY` | Bearer token (falls back to `OPENAI_API_KEY`) | unset |
//! | `BUILDER_PILOT_OUTPUT_DIR` | Directory receiving code artifacts and the screenshot | `output` |
//! | `BUILDER_PILOT_HEADLESS` | Run Chrome headless | `true` |
//! | `BUILDER_PILOT_CHROME_PATH` | Chrome/Chromium binary | auto-detect |
//! | `BUILDER_PILOT_WS_ENDPOINT` | Attach to a running Chrome instead of launching one | unset |
//! | `BUILDER_PILOT_NAVIGATE_SETTLE_MS` | Delay after each navigation | `3000` |
//! | `BUILDER_PILOT_INPUT_SETTLE_MS` | Delay after each fill or click | `1000` |
//! | `BUILDER_PILOT_ELEMENT_TIMEOUT_MS` | Bound for click actionability and extraction waits | `10000` |
//! | `BUILDER_PILOT_REQUEST_TIMEOUT_SECS` | HTTP timeout for LLM calls | `120` |
//!
//! ```bash
//! export BUILDER_PILOT_LLM_ENDPOINT="http://localhost:11434/v1"
//! export BUILDER_PILOT_LLM_MODEL="qwen2.5-coder"
//! export BUILDER_PILOT_HEADLESS=false
//! ```

use crate::error::{PilotError, Result};
use std::{path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_NAVIGATE_SETTLE_MS: u64 = 3000;
pub const DEFAULT_INPUT_SETTLE_MS: u64 = 1000;
pub const DEFAULT_ELEMENT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

pub const ENV_LLM_ENDPOINT: &str = "BUILDER_PILOT_LLM_ENDPOINT";
pub const ENV_LLM_MODEL: &str = "BUILDER_PILOT_LLM_MODEL";
pub const ENV_API_KEY: &str = "BUILDER_PILOT_API_KEY";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OUTPUT_DIR: &str = "BUILDER_PILOT_OUTPUT_DIR";
pub const ENV_HEADLESS: &str = "BUILDER_PILOT_HEADLESS";
pub const ENV_CHROME_PATH: &str = "BUILDER_PILOT_CHROME_PATH";
pub const ENV_WS_ENDPOINT: &str = "BUILDER_PILOT_WS_ENDPOINT";
pub const ENV_NAVIGATE_SETTLE_MS: &str = "BUILDER_PILOT_NAVIGATE_SETTLE_MS";
pub const ENV_INPUT_SETTLE_MS: &str = "BUILDER_PILOT_INPUT_SETTLE_MS";
pub const ENV_ELEMENT_TIMEOUT_MS: &str = "BUILDER_PILOT_ELEMENT_TIMEOUT_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "BUILDER_PILOT_REQUEST_TIMEOUT_SECS";

/// Command used when the CLI is invoked without one
pub const DEFAULT_COMMAND: &str = "Go to https://v0.dev, type 'a pricing page with three tiers and a FAQ section' \
     into the prompt box, submit it, wait 20 seconds for the generation to finish, extract the generated code \
     from the code panel, then make it responsive and switch it to a dark color scheme";

/// LLM connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

/// Browser settings
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    pub headless: bool,
    pub chrome_path: Option<PathBuf>,
    pub ws_endpoint: Option<String>,
}

/// Step timing settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    pub navigate_settle: Duration,
    pub input_settle: Duration,
    pub element_timeout: Duration,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub browser: BrowserConfig,
    pub timing: TimingConfig,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
                model: DEFAULT_LLM_MODEL.to_string(),
                api_key: None,
                request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            browser: BrowserConfig { headless: true, chrome_path: None, ws_endpoint: None },
            timing: TimingConfig {
                navigate_settle: Duration::from_millis(DEFAULT_NAVIGATE_SETTLE_MS),
                input_settle: Duration::from_millis(DEFAULT_INPUT_SETTLE_MS),
                element_timeout: Duration::from_millis(DEFAULT_ELEMENT_TIMEOUT_MS),
            },
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = get(ENV_LLM_ENDPOINT) {
            config.llm.endpoint = endpoint;
        }
        if let Some(model) = get(ENV_LLM_MODEL) {
            config.llm.model = model;
        }
        config.llm.api_key = get(ENV_API_KEY).or_else(|| get(ENV_OPENAI_API_KEY));
        if let Some(secs) = get(ENV_REQUEST_TIMEOUT_SECS) {
            config.llm.request_timeout = Duration::from_secs(parse_value(ENV_REQUEST_TIMEOUT_SECS, &secs)?);
        }

        if let Some(headless) = get(ENV_HEADLESS) {
            config.browser.headless = parse_bool(ENV_HEADLESS, &headless)?;
        }
        config.browser.chrome_path = get(ENV_CHROME_PATH).map(PathBuf::from);
        config.browser.ws_endpoint = get(ENV_WS_ENDPOINT);

        if let Some(ms) = get(ENV_NAVIGATE_SETTLE_MS) {
            config.timing.navigate_settle = Duration::from_millis(parse_value(ENV_NAVIGATE_SETTLE_MS, &ms)?);
        }
        if let Some(ms) = get(ENV_INPUT_SETTLE_MS) {
            config.timing.input_settle = Duration::from_millis(parse_value(ENV_INPUT_SETTLE_MS, &ms)?);
        }
        if let Some(ms) = get(ENV_ELEMENT_TIMEOUT_MS) {
            config.timing.element_timeout = Duration::from_millis(parse_value(ENV_ELEMENT_TIMEOUT_MS, &ms)?);
        }

        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Builder method: set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder method: set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.llm.model = model.into();
        self
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.browser.headless = headless;
        self
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| PilotError::Config(format!("{} has invalid value '{}'", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PilotError::Config(format!("{} has invalid value '{}'", key, raw))),
    }
}
