use super::CatalogDocument;
use crate::domain::model::Service;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog kept in a local `.toml` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, content: &str) -> Result<Vec<Service>> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => {
                #[derive(serde::Deserialize)]
                struct TomlCatalog {
                    services: Vec<Service>,
                }
                let doc: TomlCatalog =
                    toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
                        field: "catalog".to_string(),
                        message: format!("TOML parsing error in {}: {}", self.path.display(), e),
                    })?;
                Ok(doc.services)
            }
            Some("json") => {
                let doc: CatalogDocument = serde_json::from_str(content)?;
                Ok(doc.into_services())
            }
            _ => Err(SiteError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: self.path.display().to_string(),
                reason: "Catalog file must end in .toml or .json".to_string(),
            }),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SiteError::CatalogNotFound {
                    location: self.path.display().to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        self.parse(&content)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
