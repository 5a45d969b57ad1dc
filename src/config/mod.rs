pub mod site_config;

pub use site_config::{CatalogConfig, CatalogSourceKind, OutputConfig, SiteConfig, DEFAULT_CONFIG_FILE};

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
