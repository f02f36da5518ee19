pub mod types;

pub use types::{ContactKind, DispatchResult, EventPhase};
