use crate::core::catalog::Catalog;
use crate::domain::model::{Service, ServiceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(ServiceId),
}

/// Which service is selected and whether its detail modal is showing.
///
/// Closing keeps `selected` so the last pick is still known; the next
/// `learn_more` replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ServiceId>,
    modal_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the modal already open on `id`, as rendered for a service page.
    pub fn opened(id: ServiceId) -> Self {
        Self {
            selected: Some(id),
            modal_open: true,
        }
    }

    pub fn selected(&self) -> Option<ServiceId> {
        self.selected
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal(&self) -> ModalState {
        match (self.modal_open, self.selected) {
            (true, Some(id)) => ModalState::Open(id),
            _ => ModalState::Closed,
        }
    }

    /// "Learn More": select `id` and open the modal. Last write wins.
    pub fn learn_more(&mut self, id: ServiceId) {
        self.selected = Some(id);
        self.modal_open = true;
    }

    /// Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.modal_open;
        self.modal_open = false;
        was_open
    }

    /// The modal's "Book Consultation": close first, then hand back the
    /// service the request should be composed for.
    pub fn book_from_modal(&mut self) -> Option<ServiceId> {
        match self.modal() {
            ModalState::Open(id) => {
                self.close();
                Some(id)
            }
            ModalState::Closed => None,
        }
    }

    /// The service the modal should display, if any.
    pub fn visible_service<'a>(&self, catalog: &'a Catalog) -> Option<&'a Service> {
        match self.modal() {
            ModalState::Open(id) => catalog.get(id),
            ModalState::Closed => None,
        }
    }
}
