pub mod catalog;
pub mod composer;
pub mod selection;
pub mod session;
pub mod site;

pub use crate::domain::model::{ConsultationRequest, Service, ServiceId, SiteBundle};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, MailHandoff, SitePipeline, Storage};
pub use crate::utils::error::Result;
