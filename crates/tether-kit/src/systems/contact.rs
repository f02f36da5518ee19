// systems/contact.rs
//
// Contact router — classifies contact events by tag against an allow list and
// dispatches matches to phase-specific handlers. The router never polls
// physics state; the host's collision layer calls dispatch once per event.
//
// Usage:
//   let mut router: ContactRouter<ContactEvent> = ContactRouter::with_tags(["Player"]);
//   router.on_enter(|contact| { /* ... */ });
//   let result = router.dispatch(EventPhase::Enter, "Player", &contact);

use crate::api::types::{ContactKind, DispatchResult, EventPhase};

/// Ready-made payload for hosts without their own contact record.
///
/// The router is generic over the payload and forwards it unchanged, so hosts
/// with richer contact data (contact points, impulses, 2D vs. 3D records)
/// substitute their own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEvent {
    /// Stream the event came from.
    pub kind: ContactKind,
    /// Host-assigned identifier of the other party.
    pub other: u64,
    /// Tag of the other party.
    pub tag: String,
}

type Handler<P> = Box<dyn FnMut(&P)>;

/// Tag-filtered contact dispatcher, generic over the payload it forwards.
///
/// The allow list is fixed at construction. An empty list is a configuration
/// error: every dispatch reports `Misconfigured` and no handler ever runs.
pub struct ContactRouter<P> {
    tags: Vec<String>,
    enter_handler: Option<Handler<P>>,
    stay_handler: Option<Handler<P>>,
    exit_handler: Option<Handler<P>>,
}

impl<P> ContactRouter<P> {
    /// Create a router with the given tag allow list.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            enter_handler: None,
            stay_handler: None,
            exit_handler: None,
        }
    }

    /// Bind the handler invoked on matched `Enter` dispatches.
    pub fn on_enter(&mut self, handler: impl FnMut(&P) + 'static) {
        self.enter_handler = Some(Box::new(handler));
    }

    /// Bind the handler invoked on matched `Stay` dispatches.
    pub fn on_stay(&mut self, handler: impl FnMut(&P) + 'static) {
        self.stay_handler = Some(Box::new(handler));
    }

    /// Bind the handler invoked on matched `Exit` dispatches.
    pub fn on_exit(&mut self, handler: impl FnMut(&P) + 'static) {
        self.exit_handler = Some(Box::new(handler));
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    // Exact, case-sensitive membership test; first match wins.
    fn allows(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Classify one contact event and run the matching phase handler.
    ///
    /// All three outcomes are ordinary return values. A matched phase with no
    /// bound handler is a silent no-op, not an error.
    pub fn dispatch(&mut self, phase: EventPhase, tag: &str, payload: &P) -> DispatchResult {
        if self.tags.is_empty() {
            log::error!("contact router has no contactable tags configured");
            return DispatchResult::Misconfigured;
        }

        if !self.allows(tag) {
            log::debug!("contact tag {:?} is not in the allow list", tag);
            return DispatchResult::Rejected;
        }

        let slot = match phase {
            EventPhase::Enter => &mut self.enter_handler,
            EventPhase::Stay => &mut self.stay_handler,
            EventPhase::Exit => &mut self.exit_handler,
        };
        if let Some(handler) = slot {
            handler(payload);
        }

        DispatchResult::Matched
    }
}
