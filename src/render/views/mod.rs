//! Askama view models for the HTML pages.
//!
//! Each view owns display-ready strings; templates under `templates/` escape
//! them on output.

pub mod button;
pub mod card;
pub mod modal;
pub mod page;

pub use button::{ButtonVariant, ButtonView};
pub use card::CardView;
pub use modal::ModalView;
pub use page::{ContactView, FooterView, HeroView, PageView};
