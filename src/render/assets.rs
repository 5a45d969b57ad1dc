use crate::core::catalog::Catalog;
use crate::domain::model::{ResolvedAsset, Service, ServiceId};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use url::Url;

pub const PLACEHOLDER_PATH: &str = "images/placeholder.svg";

/// Copied images live under this prefix, which no generated file uses.
pub const BUNDLED_ASSETS_DIR: &str = "assets";

pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360" viewBox="0 0 640 360">
  <rect width="640" height="360" fill="#E5E7EB"/>
  <path d="M250 230l50-60 40 45 30-35 60 50z" fill="#9CA3AF"/>
  <circle cx="270" cy="140" r="22" fill="#9CA3AF"/>
</svg>
"##;

/// Decides how each service image is displayed. Relative paths are looked up
/// under `assets_dir`; anything that cannot be found falls back to the
/// placeholder.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    assets_dir: Option<PathBuf>,
}

impl AssetResolver {
    pub fn new(assets_dir: Option<impl Into<PathBuf>>) -> Self {
        Self {
            assets_dir: assets_dir.map(Into::into),
        }
    }

    pub fn resolve(&self, service: &Service) -> ResolvedAsset {
        let image = service.image.trim();

        if let Ok(url) = Url::parse(image) {
            if matches!(url.scheme(), "http" | "https") {
                return ResolvedAsset::Remote(image.to_string());
            }
        }

        let relative = Path::new(image.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            tracing::warn!(
                "Image '{}' for service {} is not a plain relative path, using placeholder",
                image,
                service.id
            );
            return ResolvedAsset::Placeholder;
        }

        let Some(dir) = &self.assets_dir else {
            tracing::warn!(
                "No assets directory configured, using placeholder for '{}'",
                image
            );
            return ResolvedAsset::Placeholder;
        };

        let source = dir.join(relative);
        if source.is_file() {
            let bundle_path = std::iter::once(BUNDLED_ASSETS_DIR)
                .chain(relative.components().filter_map(|c| c.as_os_str().to_str()))
                .collect::<Vec<_>>()
                .join("/");
            ResolvedAsset::Bundled {
                source,
                bundle_path,
            }
        } else {
            tracing::warn!(
                "Image '{}' for service {} not found under {}, using placeholder",
                image,
                service.id,
                dir.display()
            );
            ResolvedAsset::Placeholder
        }
    }

    pub fn resolve_all(&self, catalog: &Catalog) -> HashMap<ServiceId, ResolvedAsset> {
        catalog
            .iter()
            .map(|service| (service.id, self.resolve(service)))
            .collect()
    }
}

/// `src` value for an image, with each path segment percent-encoded.
pub fn image_href(asset: Option<&ResolvedAsset>) -> String {
    match asset {
        Some(ResolvedAsset::Remote(url)) => url.clone(),
        Some(ResolvedAsset::Bundled { bundle_path, .. }) => bundle_path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Some(ResolvedAsset::Placeholder) | None => PLACEHOLDER_PATH.to_string(),
    }
}
