use serde::{Deserialize, Serialize};

/// Phase of a contact event's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventPhase {
    Enter,
    Stay,
    Exit,
}

/// Which physical event stream a contact came from.
///
/// A host-side label only: the router does not branch on it. The host decides
/// which stream (sensor overlaps vs. solid collisions) feeds which router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// Overlap event from a non-solid sensor volume.
    Sensor,
    /// Contact event from a solid collision.
    Collision,
}

/// Outcome of a `ContactRouter::dispatch` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Tag was in the allow list; the handler for the phase ran (if bound).
    Matched,
    /// Tag was not in the allow list; nothing ran.
    Rejected,
    /// The allow list is empty; nothing can ever match.
    Misconfigured,
}
