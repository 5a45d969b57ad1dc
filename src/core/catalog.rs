use crate::domain::model::{Service, ServiceId};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;

/// Ordered, validated, read-only collection of services.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Result<Self> {
        if services.is_empty() {
            return Err(SiteError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id) {
                return Err(SiteError::CatalogValidationError {
                    message: format!("duplicate service id {}", service.id),
                });
            }
            if service.title.trim().is_empty() {
                return Err(SiteError::CatalogValidationError {
                    message: format!("service {} has an empty title", service.id),
                });
            }
            if service.features.is_empty() {
                return Err(SiteError::CatalogValidationError {
                    message: format!("service {} ({}) has no features", service.id, service.title),
                });
            }
            if service.details.approach.is_empty() {
                return Err(SiteError::CatalogValidationError {
                    message: format!(
                        "service {} ({}) has no approach items",
                        service.id, service.title
                    ),
                });
            }
        }

        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn require(&self, id: ServiceId) -> Result<&Service> {
        self.get(id).ok_or(SiteError::ServiceNotFound { id: id.0 })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

pub async fn load_catalog<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog> {
    tracing::debug!("Loading catalog from {}", source.describe());
    let services = source.fetch_services().await?;
    let catalog = Catalog::new(services)?;
    tracing::info!("Loaded {} services from {}", catalog.len(), source.describe());
    Ok(catalog)
}
