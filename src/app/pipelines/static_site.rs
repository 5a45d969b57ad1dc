use crate::core::catalog::{load_catalog, Catalog};
use crate::core::selection::SelectionState;
use crate::core::{CatalogSource, ConfigProvider, SitePipeline, Storage};
use crate::domain::model::{ResolvedAsset, ServiceId, SiteBundle};
use crate::domain::ports::{PageContext, PageRenderer};
use crate::render::stylesheet::render_stylesheet;
use crate::render::{page_path, AssetResolver, HtmlRenderer, PLACEHOLDER_PATH, PLACEHOLDER_SVG};
use crate::utils::error::{Result, SiteError};
use chrono::Datelike;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const ARCHIVE_NAME: &str = "site.zip";

/// Renders the catalog into a static HTML bundle: one page per selection state.
pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: Box<dyn CatalogSource>,
    renderer: HtmlRenderer,
    year: i32,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    pub fn new(storage: S, config: C, source: Box<dyn CatalogSource>) -> Self {
        Self {
            storage,
            config,
            source,
            renderer: HtmlRenderer::new(),
            year: chrono::Local::now().year(),
        }
    }

    /// Pins the footer year, for reproducible output.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn render_pages(
        &self,
        catalog: &Catalog,
        assets: &HashMap<ServiceId, ResolvedAsset>,
        bundle: &mut SiteBundle,
    ) -> Result<()> {
        // index.html for the closed modal, then one page per open service
        let states = std::iter::once(SelectionState::new())
            .chain(catalog.iter().map(|s| SelectionState::opened(s.id)));

        for selection in states {
            let ctx = PageContext {
                catalog,
                selection: &selection,
                site: self.config.site(),
                contact: self.config.contact(),
                assets,
                year: self.year,
            };
            let path = page_path(&selection);
            tracing::debug!("Rendering {}", path);
            bundle.push(path, self.renderer.render_page(&ctx)?);
        }
        Ok(())
    }

    fn price_sheet(catalog: &Catalog) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "title", "price_per_month", "schedule", "location"])?;
        for service in catalog {
            writer.write_record([
                service.id.to_string(),
                service.title.clone(),
                service.price.amount().to_string(),
                service.details.schedule.clone(),
                service.details.location.clone(),
            ])?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| SiteError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))
    }

    fn archive(bundle: &SiteBundle) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for file in &bundle.files {
            zip.start_file::<_, ()>(file.path.as_str(), FileOptions::default())?;
            zip.write_all(&file.contents)?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SitePipeline for StaticSitePipeline<S, C> {
    async fn extract(&self) -> Result<Catalog> {
        load_catalog(self.source.as_ref()).await
    }

    async fn transform(&self, catalog: Catalog) -> Result<SiteBundle> {
        let resolver = AssetResolver::new(self.config.assets_dir());
        let assets = resolver.resolve_all(&catalog);
        let mut bundle = SiteBundle::default();

        self.render_pages(&catalog, &assets, &mut bundle)?;
        bundle.push("styles.css", render_stylesheet(self.config.theme()));
        bundle.push(PLACEHOLDER_PATH, PLACEHOLDER_SVG);

        // Copy local images, once per path, in catalog order
        let mut copied = HashSet::new();
        for service in &catalog {
            if let Some(ResolvedAsset::Bundled {
                source,
                bundle_path,
            }) = assets.get(&service.id)
            {
                if copied.insert(bundle_path.clone()) {
                    tracing::debug!("Bundling image {}", source.display());
                    bundle.push(bundle_path.clone(), tokio::fs::read(source).await?);
                }
            }
        }

        // Machine-readable copies of the catalog
        bundle.push(
            "catalog.json",
            serde_json::to_string_pretty(catalog.services())?,
        );
        bundle.push("prices.csv", Self::price_sheet(&catalog)?);

        Ok(bundle)
    }

    async fn load(&self, bundle: SiteBundle) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        // Build the archive first so a failure leaves nothing half-written
        let zip_data = if self.config.archive() {
            Some(Self::archive(&bundle)?)
        } else {
            None
        };

        tracing::debug!("Writing {} files to {}", bundle.len(), output_path);
        for file in &bundle.files {
            self.storage.write_file(&file.path, &file.contents).await?;
        }

        if let Some(zip_data) = zip_data {
            tracing::debug!("Writing {} ({} bytes)", ARCHIVE_NAME, zip_data.len());
            self.storage.write_file(ARCHIVE_NAME, &zip_data).await?;
        }

        Ok(output_path)
    }
}
