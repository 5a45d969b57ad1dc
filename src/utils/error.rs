use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parsing failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog validation error: {message}")]
    CatalogValidationError { message: String },

    #[error("Catalog not found at {location}")]
    CatalogNotFound { location: String },

    #[error("Catalog contains no services")]
    EmptyCatalog,

    #[error("No service with id {id}")]
    ServiceNotFound { id: u32 },

    #[error("Mail handoff failed: {message}")]
    MailHandoffError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Network,
    Storage,
    Rendering,
    Handoff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::CatalogValidationError { .. }
            | SiteError::CatalogNotFound { .. }
            | SiteError::EmptyCatalog
            | SiteError::ServiceNotFound { .. }
            | SiteError::SerializationError(_) => ErrorCategory::Catalog,
            SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::ZipError(_) | SiteError::CsvError(_) | SiteError::IoError(_) => {
                ErrorCategory::Storage
            }
            SiteError::TemplateError(_) => ErrorCategory::Rendering,
            SiteError::MailHandoffError { .. } => ErrorCategory::Handoff,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::MailHandoffError { .. } => ErrorSeverity::Low,
            SiteError::HttpError(_) | SiteError::CatalogNotFound { .. } => ErrorSeverity::Medium,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::CatalogNotFound { location } => {
                format!("The service catalog could not be found at {}", location)
            }
            SiteError::EmptyCatalog => "The service catalog has no services to show".to_string(),
            SiteError::ServiceNotFound { id } => format!("There is no service with id {}", id),
            SiteError::HttpError(_) => "Could not download the service catalog".to_string(),
            SiteError::MailHandoffError { .. } => {
                "Could not open your mail client; copy the link above instead".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check site.toml against the documented sections",
            ErrorCategory::Catalog => "Check the catalog entries for duplicate ids or empty lists",
            ErrorCategory::Network => "Check the catalog endpoint and your network connection",
            ErrorCategory::Storage => "Check that the output directory is writable",
            ErrorCategory::Rendering => "Check the site text for values the page templates cannot display",
            ErrorCategory::Handoff => "Configure a default mail application",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_handoff_to_low() {
        let err = SiteError::MailHandoffError {
            message: "no handler".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Handoff);
    }

    #[test]
    fn test_catalog_errors_are_catalog_category() {
        assert_eq!(SiteError::EmptyCatalog.category(), ErrorCategory::Catalog);
        assert_eq!(
            SiteError::ServiceNotFound { id: 9 }.user_friendly_message(),
            "There is no service with id 9"
        );
    }
}
