pub mod api;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::types::{ContactKind, DispatchResult, EventPhase};
pub use crate::core::time::{TimeControl, FIXED_STEP};
pub use crate::core::transform::{Space, TransformSnapshot, TransformState};
pub use crate::systems::contact::{ContactEvent, ContactRouter};
pub use crate::systems::countdown::Countdown;
pub use crate::systems::follow::{BlendMode, FollowAxes, FollowConfig, FollowUpdate, Follower};
pub use crate::systems::rotate::{Rotator, RotatorConfig};
