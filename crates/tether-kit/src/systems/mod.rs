// systems/mod.rs
//
// Host-driven per-frame systems. Each one is advanced by the owning host —
// one advance/tick/dispatch call per frame with an explicit dt — and none of
// them owns a transform, spawns threads, or blocks.

pub mod contact;
pub mod countdown;
pub mod follow;
pub mod rotate;

pub use contact::{ContactEvent, ContactRouter};
pub use countdown::Countdown;
pub use follow::{BlendMode, FollowAxes, FollowConfig, FollowUpdate, Follower};
pub use rotate::{Rotator, RotatorConfig};
