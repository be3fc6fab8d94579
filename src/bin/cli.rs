//! builder-pilot CLI
//!
//! Runs one natural-language command against a web UI builder and prints the final code.
//! Configuration comes from `BUILDER_PILOT_*` environment variables (see `builder_pilot::config`).

use anyhow::Context;
use builder_pilot::{AppConfig, ArtifactStore, OpenAiClient, RunDriver, browser, driver::resolve_command};
use clap::Parser;

#[derive(Parser)]
#[command(name = "builder-pilot")]
#[command(version)]
#[command(about = "Generate and refine UI code by driving a web UI builder with natural language", long_about = None)]
struct Cli {
    /// Natural-language command (a built-in demo command is used when omitted)
    command: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if config.llm.api_key.is_none() {
        log::warn!("No API key set (BUILDER_PILOT_API_KEY / OPENAI_API_KEY); sending unauthenticated requests");
    }

    let client = OpenAiClient::from_config(&config.llm).context("Failed to create LLM client")?;
    log::info!("Using model {} at {}", client.model(), config.llm.endpoint);
    let driver = RunDriver::new(&client, &client, ArtifactStore::new(&config.output_dir), config.timing);
    let command = resolve_command(cli.command);

    let report = match driver.run(&command, || browser::open_session(&config.browser)) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Run failed: {}", e);
            return Err(e).context("Run failed");
        }
    };

    for path in &report.artifacts {
        eprintln!("Artifact: {}", path.display());
    }
    eprintln!("Screenshot: {}", report.screenshot.display());

    match report.final_code {
        Some(code) => println!("{}", code),
        None => eprintln!("No code was extracted"),
    }

    Ok(())
}
