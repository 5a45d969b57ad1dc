use crate::domain::model::{ResolvedAsset, Service};
use crate::domain::ports::{PageContext, PageRenderer};
use crate::utils::error::Result;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Plain-text page for the terminal session.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_card(&self, ctx: &PageContext<'_>, service: &Service) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}] {}", service.id, service.title);
        let _ = writeln!(out, "    {}", image_label(ctx.assets.get(&service.id)));
        let _ = writeln!(out, "    {}", service.description);
        for feature in service.features.iter().take(ctx.site.card_feature_limit) {
            let _ = writeln!(out, "    * {}", feature);
        }
        let _ = writeln!(out, "    Starting at {}/month", service.price);
        let _ = writeln!(
            out,
            "    > more {id}  (Learn More)    > book {id}  (Book Consultation)",
            id = service.id
        );
        out
    }

    pub fn render_modal(&self, ctx: &PageContext<'_>) -> Option<String> {
        let service = ctx.selection.visible_service(ctx.catalog)?;
        let mut out = String::new();

        let _ = writeln!(out, "+{}+", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "  {}", service.title);
        let _ = writeln!(out, "  {}", image_label(ctx.assets.get(&service.id)));
        if let Some(subjects) = &service.details.subjects {
            let _ = writeln!(out, "\n  What We Cover:");
            for subject in subjects {
                let _ = writeln!(out, "    - {}", subject);
            }
        }
        let _ = writeln!(out, "\n  Our Approach:");
        for item in &service.details.approach {
            let _ = writeln!(out, "    - {}", item);
        }
        let _ = writeln!(out, "\n  Schedule: {}", service.details.schedule);
        let _ = writeln!(out, "  Location: {}", service.details.location);
        let _ = writeln!(out, "  Price: Starting at {}/month", service.price);
        let _ = writeln!(out, "\n  > close  (Close)    > book  (Book Consultation)");
        let _ = writeln!(out, "+{}+", "=".repeat(RULE_WIDTH));
        Some(out)
    }

    pub fn render_contact(&self, ctx: &PageContext<'_>) -> String {
        format!(
            "Contact Us\n    Email: {}\n    Phone: {}\n    Location: {}\n",
            ctx.contact.email, ctx.contact.phone, ctx.contact.location
        )
    }
}

fn image_label(asset: Option<&ResolvedAsset>) -> String {
    match asset {
        Some(ResolvedAsset::Remote(url)) => format!("(image: {})", url),
        Some(ResolvedAsset::Bundled { bundle_path, .. }) => format!("(image: {})", bundle_path),
        Some(ResolvedAsset::Placeholder) | None => "(image unavailable)".to_string(),
    }
}

impl PageRenderer for TextRenderer {
    fn render_page(&self, ctx: &PageContext<'_>) -> Result<String> {
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{}", ctx.site.title);
        let _ = writeln!(out, "{}", ctx.site.tagline);
        let _ = writeln!(out, "{}", rule);
        for service in ctx.catalog {
            out.push_str(&self.render_card(ctx, service));
            out.push('\n');
        }
        let _ = writeln!(out, "{}", rule);
        out.push_str(&self.render_contact(ctx));
        let _ = writeln!(out, "Hours");
        for line in &ctx.site.hours {
            let _ = writeln!(out, "    {}", line);
        }

        if let Some(modal) = self.render_modal(ctx) {
            out.push('\n');
            out.push_str(&modal);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::service;
    use crate::core::catalog::Catalog;
    use crate::core::selection::SelectionState;
    use crate::domain::model::{ContactInfo, ServiceId, SiteInfo};
    use std::collections::HashMap;

    #[test]
    fn test_text_page_with_and_without_modal() {
        let catalog = Catalog::new(vec![service(1, "Alberta Curriculum", 500)]).unwrap();
        let site = SiteInfo::default();
        let contact = ContactInfo::default();
        let assets = HashMap::new();
        let closed = SelectionState::new();
        let open = SelectionState::opened(ServiceId(1));

        let closed_ctx = PageContext {
            catalog: &catalog,
            selection: &closed,
            site: &site,
            contact: &contact,
            assets: &assets,
            year: 2026,
        };
        let open_ctx = PageContext {
            selection: &open,
            ..closed_ctx
        };

        let renderer = TextRenderer::new();
        let page = renderer.render_page(&closed_ctx).unwrap();
        assert!(page.contains("[1] Alberta Curriculum"));
        assert!(page.contains("Starting at $500/month"));
        assert!(page.contains("(image unavailable)"));
        assert!(!page.contains("Our Approach:"));

        let page = renderer.render_page(&open_ctx).unwrap();
        assert!(page.contains("Our Approach:"));
        assert!(page.contains("What We Cover:"));
    }
}
