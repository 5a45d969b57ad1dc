use crate::domain::model::SiteBundle;
use crate::domain::ports::SitePipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform only; nothing is written.
    pub async fn render(&self) -> Result<SiteBundle> {
        tracing::info!("Loading catalog...");
        let catalog = self.pipeline.extract().await?;
        tracing::info!("Loaded {} services", catalog.len());

        tracing::info!("Rendering pages...");
        let bundle = self.pipeline.transform(catalog).await?;
        tracing::info!("Rendered {} files", bundle.len());

        Ok(bundle)
    }

    pub async fn run(&self) -> Result<String> {
        let bundle = self.render().await?;

        tracing::info!("Writing bundle...");
        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!("Site written to: {}", output_path);

        Ok(output_path)
    }
}
