pub mod assets;
pub mod html;
pub mod stylesheet;
pub mod text;
pub mod views;

pub use assets::{AssetResolver, PLACEHOLDER_PATH, PLACEHOLDER_SVG};
pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::core::selection::{ModalState, SelectionState};

pub const INDEX_PAGE: &str = "index.html";

/// File name of the page showing `state`: the index when the modal is closed,
/// otherwise the page of the open service.
pub fn page_path(state: &SelectionState) -> String {
    match state.modal() {
        ModalState::Closed => INDEX_PAGE.to_string(),
        ModalState::Open(id) => format!("service-{}.html", id),
    }
}
