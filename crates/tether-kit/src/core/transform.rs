use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Coordinate space selector for pose reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Space {
    /// Absolute scene coordinates.
    #[default]
    World,
    /// Coordinates relative to the transform's parent.
    Local,
}

/// One frame's worth of pose: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub position: Vec3,
    pub orientation: Quat,
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    /// Pose at the given position with identity orientation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Both frames of one transform, sampled at a single instant.
///
/// Systems that take a snapshot read position and orientation from this one
/// sample, so both reads within a tick are consistent. Space selection via
/// [`get`](Self::get) picks the raw field for that space — it never converts
/// between frames. A host that reads a world-space target and writes a
/// local-space follower gets the raw world values verbatim; keeping the two
/// frames coherent is the host's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformSnapshot {
    pub world: TransformState,
    pub local: TransformState,
}

impl TransformSnapshot {
    pub fn new(world: TransformState, local: TransformState) -> Self {
        Self { world, local }
    }

    /// Snapshot of a transform with no parent: local and world coincide.
    pub fn uniform(state: TransformState) -> Self {
        Self {
            world: state,
            local: state,
        }
    }

    /// The pose stored for the given space.
    pub fn get(&self, space: Space) -> &TransformState {
        match space {
            Space::World => &self.world,
            Space::Local => &self.local,
        }
    }

    /// Mutable pose for the given space.
    pub fn get_mut(&mut self, space: Space) -> &mut TransformState {
        match space {
            Space::World => &mut self.world,
            Space::Local => &mut self.local,
        }
    }
}
