use super::button::{ButtonVariant, ButtonView};
use super::card::CardView;
use super::modal::ModalView;
use askama::Template;
use crate::core::composer::mailto_address;
use crate::domain::model::{ContactInfo, SiteInfo};

#[derive(Debug, Clone, Template)]
#[template(path = "partials/hero.html")]
pub struct HeroView {
    pub title: String,
    pub tagline: String,
    pub contact_button: ButtonView,
}

impl From<&SiteInfo> for HeroView {
    fn from(site: &SiteInfo) -> Self {
        Self {
            title: site.title.clone(),
            tagline: site.tagline.clone(),
            contact_button: ButtonView::new("Contact Us", "#contact", ButtonVariant::Light, ""),
        }
    }
}

#[derive(Debug, Clone, Template)]
#[template(path = "partials/contact.html")]
pub struct ContactView {
    pub email: String,
    pub mailto: String,
    pub phone: String,
    pub location: String,
}

impl From<&ContactInfo> for ContactView {
    fn from(contact: &ContactInfo) -> Self {
        Self {
            email: contact.email.clone(),
            mailto: mailto_address(&contact.email),
            phone: contact.phone.clone(),
            location: contact.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Template)]
#[template(path = "partials/footer.html")]
pub struct FooterView {
    pub hours: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub year: i32,
    pub site_title: String,
}

impl FooterView {
    pub fn new(site: &SiteInfo, contact: &ContactInfo, year: i32) -> Self {
        Self {
            hours: site.hours.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            location: contact.location.clone(),
            year,
            site_title: site.title.clone(),
        }
    }
}

/// Whole page; `modal` is present only for an open selection.
#[derive(Debug, Clone, Template)]
#[template(path = "page.html")]
pub struct PageView {
    pub page_title: String,
    pub index: String,
    pub hero: HeroView,
    pub cards: Vec<CardView>,
    pub contact: ContactView,
    pub modal: Option<ModalView>,
    pub footer: FooterView,
}
