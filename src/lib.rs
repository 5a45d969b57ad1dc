pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BuiltinCatalog, FileCatalog, HttpCatalog, LocalStorage};
pub use app::{Browser, StaticSitePipeline};
pub use config::SiteConfig;
pub use self::core::{catalog::Catalog, composer::compose, site::SiteEngine};
pub use utils::error::{Result, SiteError};
