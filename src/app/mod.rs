pub mod browse;
pub mod pipelines;

pub use browse::Browser;
pub use pipelines::StaticSitePipeline;
