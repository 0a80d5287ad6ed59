//! CLI for resolving the d-installer main page.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dinst_core::config::{self, DinstConfig, EnvConfig, BASE_URL_VAR};
use std::path::PathBuf;

use commands::{run_completions, run_local, run_main_page, run_main_page_url, run_show};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dinst")]
#[command(about = "Resolve where the d-installer web UI is served", long_about = None)]
pub struct Cli {
    /// Base URL of the installer host (overrides BASE_URL and the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read defaults from this config file instead of ~/.config/dinst/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the path of the installer's entry page.
    MainPage,

    /// Print the absolute URL of the installer's entry page.
    MainPageUrl,

    /// Print whether a URL (default: the base URL) is a local connection.
    Local {
        /// URL to check.
        url: Option<String>,
    },

    /// Show base URL, resolved path, full URL, and connection kind.
    Show {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Effective configuration: `--base-url` > process env > config file.
    fn env(&self) -> Result<EnvConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config_or_default(config::load_or_init()),
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(self.layer(&cfg))
    }

    fn layer(&self, cfg: &DinstConfig) -> EnvConfig {
        let env = cfg.effective_env();
        match &self.base_url {
            Some(url) => env.with_override(BASE_URL_VAR, url.as_str()),
            None => env,
        }
    }
}

/// The default config file is optional: an unreadable or uncreatable one
/// means empty defaults. An explicit `--config` path is not covered by this.
fn config_or_default(loaded: Result<DinstConfig>) -> DinstConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        DinstConfig::default()
    })
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::MainPage => run_main_page(&cli.env()?)?,
            CliCommand::MainPageUrl => run_main_page_url(&cli.env()?)?,
            CliCommand::Local { url } => run_local(&cli.env()?, url.as_deref())?,
            CliCommand::Show { json } => run_show(&cli.env()?, *json)?,
            CliCommand::Completions { shell } => run_completions(*shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
