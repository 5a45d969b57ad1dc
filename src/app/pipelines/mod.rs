pub mod static_site;

pub use static_site::{StaticSitePipeline, ARCHIVE_NAME};
