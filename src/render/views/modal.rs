use super::button::{ButtonVariant, ButtonView};
use askama::Template;
use crate::domain::model::Service;

/// Detail overlay for the open service.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/modal.html")]
pub struct ModalView {
    pub title: String,
    pub image: String,
    pub subjects: Option<Vec<String>>,
    pub approach: Vec<String>,
    pub schedule: String,
    pub location: String,
    pub price: String,
    pub close_href: String,
    pub close: ButtonView,
    pub book: ButtonView,
}

impl ModalView {
    pub fn new(service: &Service, image: String, close_href: &str, mailto: String) -> Self {
        Self {
            title: service.title.clone(),
            image,
            subjects: service.details.subjects.clone(),
            approach: service.details.approach.clone(),
            schedule: service.details.schedule.clone(),
            location: service.details.location.clone(),
            price: service.price.to_string(),
            close_href: close_href.to_string(),
            close: ButtonView::new("Close", close_href, ButtonVariant::Dark, ""),
            book: ButtonView::new("Book Consultation", mailto, ButtonVariant::Primary, ""),
        }
    }
}
