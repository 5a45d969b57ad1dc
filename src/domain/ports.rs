use crate::core::catalog::Catalog;
use crate::core::selection::SelectionState;
use crate::domain::model::{ContactInfo, ResolvedAsset, Service, ServiceId, SiteBundle, SiteInfo, Theme};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn site(&self) -> &SiteInfo;
    fn contact(&self) -> &ContactInfo;
    fn theme(&self) -> &Theme;
    fn output_path(&self) -> &str;
    fn assets_dir(&self) -> Option<&str>;
    fn archive(&self) -> bool;
}

/// Where the service records come from. Implementations return raw records;
/// `Catalog::new` enforces the catalog invariants.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<Service>>;

    fn describe(&self) -> String;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn extract(&self) -> Result<Catalog>;
    async fn transform(&self, catalog: Catalog) -> Result<SiteBundle>;
    async fn load(&self, bundle: SiteBundle) -> Result<String>;
}

/// Hands a composed `mailto:` URI to whatever owns mail on the host.
pub trait MailHandoff {
    fn hand_off(&mut self, mailto_uri: &str) -> Result<()>;
}

/// Everything a page needs to render one selection state.
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a SelectionState,
    pub site: &'a SiteInfo,
    pub contact: &'a ContactInfo,
    pub assets: &'a HashMap<ServiceId, ResolvedAsset>,
    pub year: i32,
}

pub trait PageRenderer {
    fn render_page(&self, ctx: &PageContext<'_>) -> Result<String>;
}
