use crate::adapters::catalog::{BuiltinCatalog, FileCatalog, HttpCatalog};
use crate::domain::model::{ContactInfo, SiteInfo, Theme};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub contact: ContactInfo,
    pub theme: Theme,
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    #[default]
    Builtin,
    File,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSourceKind,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub archive: bool,
    pub assets_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            archive: false,
            assets_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_range("site.card_feature_limit", self.site.card_feature_limit, 1, 20)?;

        validation::validate_email("contact.email", &self.contact.email)?;
        validation::validate_non_empty_string("contact.phone", &self.contact.phone)?;
        validation::validate_non_empty_string("contact.location", &self.contact.location)?;

        for (field, value) in [
            ("theme.primary", &self.theme.primary),
            ("theme.secondary", &self.theme.secondary),
            ("theme.accent", &self.theme.accent),
            ("theme.dark", &self.theme.dark),
            ("theme.light", &self.theme.light),
        ] {
            validation::validate_hex_color(field, value)?;
        }

        match self.catalog.source {
            CatalogSourceKind::Builtin => {}
            CatalogSourceKind::File => {
                let path = validation::validate_required_field("catalog.path", &self.catalog.path)?;
                validation::validate_path("catalog.path", path)?;
            }
            CatalogSourceKind::Http => {
                let endpoint =
                    validation::validate_required_field("catalog.endpoint", &self.catalog.endpoint)?;
                validation::validate_url("catalog.endpoint", endpoint)?;
            }
        }
        if let Some(timeout) = self.catalog.timeout_seconds {
            validation::validate_range("catalog.timeout_seconds", timeout, 1, 300)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        if let Some(dir) = &self.output.assets_dir {
            validation::validate_path("output.assets_dir", dir)?;
        }

        Ok(())
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds.unwrap_or(10))
    }

    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        match self.catalog.source {
            CatalogSourceKind::Builtin => Ok(Box::new(BuiltinCatalog)),
            CatalogSourceKind::File => {
                let path = validation::validate_required_field("catalog.path", &self.catalog.path)?;
                Ok(Box::new(FileCatalog::new(path)))
            }
            CatalogSourceKind::Http => {
                let endpoint =
                    validation::validate_required_field("catalog.endpoint", &self.catalog.endpoint)?;
                Ok(Box::new(HttpCatalog::new(endpoint.clone(), self.catalog_timeout())?))
            }
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn site(&self) -> &SiteInfo {
        &self.site
    }

    fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn assets_dir(&self) -> Option<&str> {
        self.output.assets_dir.as_deref()
    }

    fn archive(&self) -> bool {
        self.output.archive
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.contact.email, "mchandramouli@gmail.com");
        assert_eq!(config.site.card_feature_limit, 3);
        assert_eq!(config.catalog.source, CatalogSourceKind::Builtin);
        assert_eq!(config.output.path, "./dist");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[site]
title = "Bow River Tutoring"
tagline = "Math and science help"
hours = ["Weekdays: 4PM - 8PM"]
card_feature_limit = 2

[contact]
email = "hello@example.ca"
phone = "(403) 555-0100"
location = "Calgary, Alberta"

[theme]
primary = "#000000"

[catalog]
source = "file"
path = "catalog.toml"

[output]
path = "./public"
archive = true
assets_dir = "./assets"
"##;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.title, "Bow River Tutoring");
        assert_eq!(config.site.hours, vec!["Weekdays: 4PM - 8PM".to_string()]);
        assert_eq!(config.theme.primary, "#000000");
        assert_eq!(config.theme.secondary, "#2A9D8F");
        assert_eq!(config.catalog.source, CatalogSourceKind::File);
        assert!(config.archive());
        assert_eq!(config.assets_dir(), Some("./assets"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TUTORING_SITE_TEST_EMAIL", "env@example.ca");

        let config = SiteConfig::from_toml_str(
            r#"
[contact]
email = "${TUTORING_SITE_TEST_EMAIL}"
"#,
        )
        .unwrap();
        assert_eq!(config.contact.email, "env@example.ca");

        std::env::remove_var("TUTORING_SITE_TEST_EMAIL");
    }

    #[test]
    fn test_http_source_requires_valid_endpoint() {
        let missing = SiteConfig::from_toml_str("[catalog]\nsource = \"http\"\n").unwrap();
        assert!(matches!(
            missing.validate(),
            Err(SiteError::MissingConfigError { .. })
        ));

        let invalid = SiteConfig::from_toml_str(
            "[catalog]\nsource = \"http\"\nendpoint = \"ftp://example.com/catalog.json\"\n",
        )
        .unwrap();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_invalid_email_and_colour_rejected() {
        let bad_email = SiteConfig::from_toml_str("[contact]\nemail = \"nobody\"\n").unwrap();
        assert!(bad_email.validate().is_err());

        let bad_colour = SiteConfig::from_toml_str("[theme]\naccent = \"gold\"\n").unwrap();
        assert!(bad_colour.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\ntitle = \"File Test\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.title, "File Test");
    }
}
