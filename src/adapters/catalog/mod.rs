mod builtin;
mod file;
mod http;

pub use builtin::{builtin_services, BuiltinCatalog};
pub use file::FileCatalog;
pub use http::HttpCatalog;

use crate::domain::model::Service;
use serde::Deserialize;

/// Accepted layouts of a catalog document: `{ "services": [...] }` or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    Wrapped { services: Vec<Service> },
    Bare(Vec<Service>),
}

impl CatalogDocument {
    pub(crate) fn into_services(self) -> Vec<Service> {
        match self {
            CatalogDocument::Wrapped { services } | CatalogDocument::Bare(services) => services,
        }
    }
}
