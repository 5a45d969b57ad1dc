use super::{SiteConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "tutoring-site")]
#[command(about = "Build and browse the tutoring services website")]
pub struct CliConfig {
    /// Path to the TOML site configuration (defaults to ./site.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the static site bundle
    Build {
        /// Output directory, overrides output.path
        #[arg(short, long)]
        output: Option<String>,

        /// Also write site.zip
        #[arg(long)]
        archive: bool,

        /// Directory the service images are resolved against
        #[arg(long)]
        assets_dir: Option<String>,

        /// Show what would be written without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Compose the consultation request for one service
    Compose {
        /// Service id
        id: u32,

        /// Open the request in the default mail client instead of printing it
        #[arg(long)]
        open: bool,
    },
    /// Browse the catalog interactively in the terminal
    Browse {
        /// Print mailto links instead of opening the mail client
        #[arg(long)]
        dry_run: bool,
    },
    /// List and validate the configured catalog
    Catalog,
}

impl CliConfig {
    /// Explicit `--config` must exist; otherwise `site.toml` is used when
    /// present and the builtin defaults when not.
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                SiteConfig::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                SiteConfig::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                tracing::debug!("No configuration file, using builtin defaults");
                Ok(SiteConfig::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Command::Build {
            output,
            archive,
            assets_dir,
            ..
        } = &self.command
        {
            if let Some(output) = output {
                config.output.path = output.clone();
                tracing::info!("Output path overridden to: {}", output);
            }
            if *archive {
                config.output.archive = true;
            }
            if let Some(dir) = assets_dir {
                config.output.assets_dir = Some(dir.clone());
            }
        }
    }
}
