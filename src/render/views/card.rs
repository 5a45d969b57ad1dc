use super::button::{ButtonVariant, ButtonView};
use askama::Template;
use crate::domain::model::{Service, ServiceId};

/// One service card in the grid.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/card.html")]
pub struct CardView {
    pub id: ServiceId,
    pub title: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
    pub learn_more: ButtonView,
    pub book: ButtonView,
}

impl CardView {
    /// Only the first `feature_limit` features are shown.
    pub fn new(
        service: &Service,
        image: String,
        learn_more_href: String,
        mailto: String,
        feature_limit: usize,
    ) -> Self {
        Self {
            id: service.id,
            title: service.title.clone(),
            image,
            description: service.description.clone(),
            features: service.features.iter().take(feature_limit).cloned().collect(),
            price: service.price.to_string(),
            learn_more: ButtonView::new("Learn More", learn_more_href, ButtonVariant::Outline, "flex-1"),
            book: ButtonView::new("Book Consultation", mailto, ButtonVariant::Primary, "flex-1"),
        }
    }
}
