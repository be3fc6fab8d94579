//! Browser access: launch/connect options, selector parsing, the [`PageDriver`] facade
//! and its Chrome implementation.

pub mod config;
pub mod locator;
pub mod page;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use locator::Locator;
pub use page::PageDriver;
pub use session::BrowserSession;

use crate::{config::BrowserConfig, error::Result};

/// Open a session as described by the configuration: attach when a WebSocket endpoint is
/// configured, launch otherwise
pub fn open_session(config: &BrowserConfig) -> Result<BrowserSession> {
    match &config.ws_endpoint {
        Some(ws_url) => BrowserSession::connect(ConnectionOptions::new(ws_url.clone())),
        None => BrowserSession::launch(LaunchOptions::from(config)),
    }
}
