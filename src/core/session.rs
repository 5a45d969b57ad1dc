use crate::core::catalog::Catalog;
use crate::core::composer::compose;
use crate::core::selection::SelectionState;
use crate::domain::model::{ConsultationRequest, ServiceId};
use crate::domain::ports::MailHandoff;
use crate::utils::error::Result;

/// User actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    LearnMore(ServiceId),
    /// "Book Consultation" on a card, bypassing the modal.
    BookFromCard(ServiceId),
    /// "Book Consultation" inside the open modal.
    BookFromModal,
    Close,
    BackdropClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Updated,
    Requested(ConsultationRequest),
}

/// Owns the selection state for one visitor and applies events to it one at a time.
pub struct Session<'a, M: MailHandoff> {
    catalog: &'a Catalog,
    recipient: String,
    state: SelectionState,
    mail: M,
}

impl<'a, M: MailHandoff> Session<'a, M> {
    pub fn new(catalog: &'a Catalog, recipient: impl Into<String>, mail: M) -> Self {
        Self {
            catalog,
            recipient: recipient.into(),
            state: SelectionState::new(),
            mail,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn mail(&self) -> &M {
        &self.mail
    }

    /// Unknown service ids are rejected before the state is touched.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Outcome> {
        tracing::debug!("Dispatching {:?} in state {:?}", event, self.state.modal());

        match event {
            UiEvent::LearnMore(id) => {
                self.catalog.require(id)?;
                self.state.learn_more(id);
                Ok(Outcome::Updated)
            }
            UiEvent::Close | UiEvent::BackdropClick => {
                if self.state.close() {
                    Ok(Outcome::Updated)
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            UiEvent::BookFromCard(id) => self.request_consultation(id),
            UiEvent::BookFromModal => match self.state.book_from_modal() {
                Some(id) => self.request_consultation(id),
                None => Ok(Outcome::Unchanged),
            },
        }
    }

    fn request_consultation(&mut self, id: ServiceId) -> Result<Outcome> {
        let service = self.catalog.require(id)?;
        let request = compose(service, &self.recipient);

        // The hand-off has no failure path the visitor can act on.
        if let Err(e) = self.mail.hand_off(&request.mailto_uri()) {
            tracing::warn!("Mail handoff for '{}' failed: {}", service.title, e);
        } else {
            tracing::info!("Handed off consultation request for '{}'", service.title);
        }

        Ok(Outcome::Requested(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::service;
    use crate::utils::error::SiteError;

    #[derive(Default)]
    struct RecordingHandoff {
        uris: Vec<String>,
        fail: bool,
    }

    impl MailHandoff for RecordingHandoff {
        fn hand_off(&mut self, mailto_uri: &str) -> Result<()> {
            self.uris.push(mailto_uri.to_string());
            if self.fail {
                return Err(SiteError::MailHandoffError {
                    message: "no mail handler".to_string(),
                });
            }
            Ok(())
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![service(1, "Alberta Curriculum", 500), service(2, "SAT Preparation", 600)])
            .unwrap()
    }

    #[test]
    fn test_card_and_modal_booking_compose_identical_requests() {
        let catalog = catalog();

        let mut from_card = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());
        let card = from_card.dispatch(UiEvent::BookFromCard(ServiceId(2))).unwrap();

        let mut from_modal = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());
        from_modal.dispatch(UiEvent::LearnMore(ServiceId(2))).unwrap();
        let modal = from_modal.dispatch(UiEvent::BookFromModal).unwrap();

        assert_eq!(card, modal);
        assert_eq!(from_card.mail().uris, from_modal.mail().uris);
        assert!(!from_modal.state().is_modal_open());
    }

    #[test]
    fn test_card_booking_leaves_modal_state_alone() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());
        session.dispatch(UiEvent::LearnMore(ServiceId(1))).unwrap();
        session.dispatch(UiEvent::BookFromCard(ServiceId(2))).unwrap();

        assert!(session.state().is_modal_open());
        assert_eq!(session.state().selected(), Some(ServiceId(1)));
    }

    #[test]
    fn test_handoff_failure_is_not_surfaced() {
        let catalog = catalog();
        let handoff = RecordingHandoff {
            fail: true,
            ..Default::default()
        };
        let mut session = Session::new(&catalog, "office@example.ca", handoff);

        let outcome = session.dispatch(UiEvent::BookFromCard(ServiceId(1))).unwrap();
        assert!(matches!(outcome, Outcome::Requested(_)));
        assert_eq!(session.mail().uris.len(), 1);
    }

    #[test]
    fn test_unknown_service_leaves_state_unchanged() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());
        session.dispatch(UiEvent::LearnMore(ServiceId(1))).unwrap();

        let err = session.dispatch(UiEvent::LearnMore(ServiceId(42))).unwrap_err();
        assert!(matches!(err, SiteError::ServiceNotFound { id: 42 }));
        assert_eq!(session.state().selected(), Some(ServiceId(1)));
        assert!(session.state().is_modal_open());
    }

    #[test]
    fn test_close_and_backdrop_are_idempotent() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());

        assert_eq!(session.dispatch(UiEvent::Close).unwrap(), Outcome::Unchanged);
        session.dispatch(UiEvent::LearnMore(ServiceId(2))).unwrap();
        assert_eq!(session.dispatch(UiEvent::BackdropClick).unwrap(), Outcome::Updated);
        assert_eq!(session.dispatch(UiEvent::BackdropClick).unwrap(), Outcome::Unchanged);
        assert!(session.mail().uris.is_empty());
    }

    #[test]
    fn test_book_from_closed_modal_does_nothing() {
        let catalog = catalog();
        let mut session = Session::new(&catalog, "office@example.ca", RecordingHandoff::default());
        assert_eq!(session.dispatch(UiEvent::BookFromModal).unwrap(), Outcome::Unchanged);
        assert!(session.mail().uris.is_empty());
    }
}
