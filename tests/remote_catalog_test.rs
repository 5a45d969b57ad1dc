use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use tutoring_site::adapters::catalog::builtin_services;
use tutoring_site::core::catalog::load_catalog;
use tutoring_site::utils::validation::Validate;
use tutoring_site::{LocalStorage, SiteConfig, SiteEngine, SiteError, StaticSitePipeline};

fn http_config(endpoint: &str, output: &str) -> SiteConfig {
    let toml = format!(
        r#"
[site]
title = "Calgary Academic Excellence"

[contact]
email = "bookings@example.com"

[catalog]
source = "http"
endpoint = "{}"
timeout_seconds = 5

[output]
path = "{}"
"#,
        endpoint, output
    );
    SiteConfig::from_toml_str(&toml).unwrap()
}

#[tokio::test]
async fn test_build_site_from_remote_catalog() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "services": builtin_services() }));
    });

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().to_str().unwrap().to_string();
    let config = http_config(&server.url("/api/services"), &output);
    assert!(config.validate().is_ok());

    let source = config.catalog_source().unwrap();
    let pipeline = StaticSitePipeline::new(LocalStorage::new(output.clone()), config, source);
    let result = SiteEngine::new(pipeline).run().await.unwrap();

    catalog_mock.assert();
    assert_eq!(result, output);

    let sat = std::fs::read_to_string(temp_dir.path().join("service-2.html")).unwrap();
    assert!(sat.contains("mailto:bookings@example.com?subject=Consultation%20Request%20for%20SAT%20Preparation"));
    assert!(temp_dir.path().join("catalog.json").exists());
}

#[tokio::test]
async fn test_missing_remote_catalog_is_not_found() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(404);
    });

    let config = http_config(&server.url("/api/services"), "./unused");
    let source = config.catalog_source().unwrap();
    let err = load_catalog(source.as_ref()).await.unwrap_err();

    catalog_mock.assert();
    assert!(matches!(err, SiteError::CatalogNotFound { .. }));
    assert!(err.recovery_suggestion().contains("catalog"));
}

#[tokio::test]
async fn test_empty_remote_catalog_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(200).json_body(json!([]));
    });

    let config = http_config(&server.url("/api/services"), "./unused");
    let source = config.catalog_source().unwrap();
    let err = load_catalog(source.as_ref()).await.unwrap_err();

    assert!(matches!(err, SiteError::EmptyCatalog));
}

#[tokio::test]
async fn test_remote_server_error_is_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(500).body("boom");
    });

    let config = http_config(&server.url("/api/services"), "./unused");
    let source = config.catalog_source().unwrap();
    let err = load_catalog(source.as_ref()).await.unwrap_err();

    assert!(matches!(err, SiteError::HttpError(_)));
}
