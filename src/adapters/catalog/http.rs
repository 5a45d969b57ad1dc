use super::CatalogDocument;
use crate::domain::model::Service;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Catalog published as JSON over HTTP.
///
/// A 404 is reported as `CatalogNotFound`; any other non-success status is an
/// HTTP error. There is no fallback to the builtin catalog.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        tracing::debug!("Requesting catalog from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("Catalog response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SiteError::CatalogNotFound {
                location: self.endpoint.clone(),
            });
        }

        let body = response.error_for_status()?.text().await?;
        let doc: CatalogDocument = serde_json::from_str(&body)?;
        Ok(doc.into_services())
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetches_wrapped_document() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/catalog.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "services": super::super::builtin_services()
                }));
        });

        let source = HttpCatalog::new(server.url("/catalog.json"), Duration::from_secs(5)).unwrap();
        let services = source.fetch_services().await.unwrap();

        mock.assert();
        assert_eq!(services.len(), 3);
        assert_eq!(services[1].title, "SAT Preparation");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_catalog_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404);
        });

        let source = HttpCatalog::new(server.url("/missing.json"), Duration::from_secs(5)).unwrap();
        let err = source.fetch_services().await.unwrap_err();
        assert!(matches!(err, SiteError::CatalogNotFound { .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken.json");
            then.status(500);
        });

        let source = HttpCatalog::new(server.url("/broken.json"), Duration::from_secs(5)).unwrap();
        let err = source.fetch_services().await.unwrap_err();
        assert!(matches!(err, SiteError::HttpError(_)));
    }
}
