use super::assets::image_href;
use super::views::{CardView, ContactView, FooterView, HeroView, ModalView, PageView};
use super::{page_path, INDEX_PAGE};
use crate::core::composer::compose;
use crate::core::selection::SelectionState;
use crate::domain::model::Service;
use crate::domain::ports::{PageContext, PageRenderer};
use crate::utils::error::Result;
use askama::Template;

const CLOSE_HREF: &str = "index.html#services";

/// Renders a complete, script-free HTML page for one selection state.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn card_view(&self, ctx: &PageContext<'_>, service: &Service) -> CardView {
        CardView::new(
            service,
            image_href(ctx.assets.get(&service.id)),
            page_path(&SelectionState::opened(service.id)),
            compose(service, &ctx.contact.email).mailto_uri(),
            ctx.site.card_feature_limit,
        )
    }

    fn modal_view(&self, ctx: &PageContext<'_>) -> Option<ModalView> {
        let service = ctx.selection.visible_service(ctx.catalog)?;
        Some(ModalView::new(
            service,
            image_href(ctx.assets.get(&service.id)),
            CLOSE_HREF,
            compose(service, &ctx.contact.email).mailto_uri(),
        ))
    }

    pub fn render_card(&self, ctx: &PageContext<'_>, service: &Service) -> Result<String> {
        Ok(self.card_view(ctx, service).render()?)
    }

    /// `None` when nothing is selected or the modal is closed.
    pub fn render_modal(&self, ctx: &PageContext<'_>) -> Result<Option<String>> {
        match self.modal_view(ctx) {
            Some(view) => Ok(Some(view.render()?)),
            None => Ok(None),
        }
    }
}

impl PageRenderer for HtmlRenderer {
    fn render_page(&self, ctx: &PageContext<'_>) -> Result<String> {
        let page_title = match ctx.selection.visible_service(ctx.catalog) {
            Some(service) => format!("{} | {}", service.title, ctx.site.title),
            None => ctx.site.title.clone(),
        };

        let view = PageView {
            page_title,
            index: INDEX_PAGE.to_string(),
            hero: HeroView::from(ctx.site),
            cards: ctx
                .catalog
                .iter()
                .map(|service| self.card_view(ctx, service))
                .collect(),
            contact: ContactView::from(ctx.contact),
            modal: self.modal_view(ctx),
            footer: FooterView::new(ctx.site, ctx.contact, ctx.year),
        };
        Ok(view.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::service;
    use crate::core::catalog::Catalog;
    use crate::domain::model::{ContactInfo, ResolvedAsset, ServiceId, SiteInfo};
    use std::collections::HashMap;

    struct Fixture {
        catalog: Catalog,
        site: SiteInfo,
        contact: ContactInfo,
        assets: HashMap<ServiceId, ResolvedAsset>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut tricky = service(2, "SAT <Prep> & More", 600);
            tricky.details.subjects = None;
            tricky.features = vec![
                "One".to_string(),
                "Two".to_string(),
                "Three".to_string(),
                "Four".to_string(),
            ];
            Self {
                catalog: Catalog::new(vec![service(1, "Alberta Curriculum", 500), tricky]).unwrap(),
                site: SiteInfo::default(),
                contact: ContactInfo::default(),
                assets: HashMap::new(),
            }
        }

        fn ctx<'a>(&'a self, selection: &'a SelectionState) -> PageContext<'a> {
            PageContext {
                catalog: &self.catalog,
                selection,
                site: &self.site,
                contact: &self.contact,
                assets: &self.assets,
                year: 2026,
            }
        }
    }

    #[test]
    fn test_modal_absent_without_selection() {
        let fixture = Fixture::new();
        let state = SelectionState::new();
        let ctx = fixture.ctx(&state);

        assert!(HtmlRenderer::new().render_modal(&ctx).unwrap().is_none());
        let page = HtmlRenderer::new().render_page(&ctx).unwrap();
        assert!(!page.contains("modal-backdrop"));
        assert!(page.contains("<body>"));
    }

    #[test]
    fn test_modal_shows_only_selected_service() {
        let fixture = Fixture::new();
        let mut state = SelectionState::new();
        state.learn_more(ServiceId(1));
        state.learn_more(ServiceId(2));

        let modal = HtmlRenderer::new()
            .render_modal(&fixture.ctx(&state))
            .unwrap()
            .unwrap();
        assert!(modal.contains("SAT &lt;Prep&gt; &amp; More"));
        assert!(!modal.contains("<Prep>"));
        assert!(!modal.contains("Alberta Curriculum"));
        assert!(!modal.contains("What We Cover"));
        assert!(modal.contains("Our Approach:"));
        assert!(modal.contains("Starting at $600/month"));
        assert!(modal.contains(r#"href="index.html#services""#));
    }

    #[test]
    fn test_modal_lists_subjects_when_present() {
        let fixture = Fixture::new();
        let state = SelectionState::opened(ServiceId(1));
        let modal = HtmlRenderer::new()
            .render_modal(&fixture.ctx(&state))
            .unwrap()
            .unwrap();
        assert!(modal.contains("What We Cover:"));
        assert!(modal.contains("<li>Mathematics</li>"));
    }

    #[test]
    fn test_card_limits_features_and_links_actions() {
        let fixture = Fixture::new();
        let state = SelectionState::new();
        let ctx = fixture.ctx(&state);
        let card = HtmlRenderer::new()
            .render_card(&ctx, fixture.catalog.get(ServiceId(2)).unwrap())
            .unwrap();

        assert!(card.contains("Three"));
        assert!(!card.contains("Four"));
        assert!(card.contains(r#"href="service-2.html""#));
        assert!(card.contains("mailto:mchandramouli@gmail.com?subject=Consultation%20Request%20for"));
        assert!(card.contains(super::super::PLACEHOLDER_PATH));
    }

    #[test]
    fn test_open_page_marks_body_and_title() {
        let fixture = Fixture::new();
        let state = SelectionState::opened(ServiceId(1));
        let page = HtmlRenderer::new().render_page(&fixture.ctx(&state)).unwrap();

        assert!(page.contains(r#"<body class="modal-open">"#));
        assert!(page.contains("<title>Alberta Curriculum | Calgary Academic Excellence</title>"));
        assert_eq!(page.matches("modal-backdrop").count(), 1);
    }

    #[test]
    fn test_page_contains_contact_and_footer() {
        let fixture = Fixture::new();
        let state = SelectionState::new();
        let page = HtmlRenderer::new().render_page(&fixture.ctx(&state)).unwrap();

        assert!(page.contains(r#"id="contact""#));
        assert!(page.contains(r#"href="mailto:mchandramouli@gmail.com""#));
        assert!(page.contains("(587) 718-2903"));
        assert!(page.contains("Sunday: Closed"));
        assert!(page.contains("&copy; 2026 Calgary Academic Excellence"));
    }
}
