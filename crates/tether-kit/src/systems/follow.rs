// systems/follow.rs
//
// Follower system — advances a follower pose toward a target pose each frame.
// Owns no transform: the host samples both poses, calls advance, and writes
// the returned update back.
//
// Usage:
//   let mut follower = Follower::new(FollowConfig::default().with_snap_on_start(true));
//   let update = follower.advance(&current, &target, dt);
//   update.apply_to(&mut current);

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::transform::{Space, TransformSnapshot};

/// Which parts of the pose the follower tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FollowAxes {
    Position,
    Rotation,
    #[default]
    Both,
}

impl FollowAxes {
    pub fn has_position(self) -> bool {
        matches!(self, FollowAxes::Position | FollowAxes::Both)
    }

    pub fn has_rotation(self) -> bool {
        matches!(self, FollowAxes::Rotation | FollowAxes::Both)
    }
}

/// How a tracked value closes the gap to its target each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Frame-rate-scaled approach: blend toward the target by `dt * rate`.
    /// The blend parameter is unclamped, so `rate * dt > 1` overshoots.
    #[default]
    Approach,
    /// Jump straight to the target every frame.
    Snap,
}

/// Follower configuration. Plain values supplied at construction; loadable
/// from JSON with any subset of fields present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    pub axes: FollowAxes,
    /// Space the position result is written to on the follower.
    pub position_space: Space,
    /// Space the rotation result is written to on the follower.
    pub rotation_space: Space,
    /// Space the target's position is read from.
    pub target_position_space: Space,
    /// Space the target's rotation is read from.
    pub target_rotation_space: Space,
    pub position_blend: BlendMode,
    pub rotation_blend: BlendMode,
    /// Position blend rate per second.
    pub position_rate: f32,
    /// Rotation blend rate per second.
    pub rotation_rate: f32,
    /// First advance writes the target verbatim, ignoring blend modes.
    pub snap_on_start: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            axes: FollowAxes::Both,
            position_space: Space::World,
            rotation_space: Space::World,
            target_position_space: Space::World,
            target_rotation_space: Space::World,
            position_blend: BlendMode::Approach,
            rotation_blend: BlendMode::Approach,
            position_rate: 0.25,
            rotation_rate: 0.25,
            snap_on_start: false,
        }
    }
}

impl FollowConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_axes(mut self, axes: FollowAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Set the spaces the follower's results are written to.
    pub fn with_write_spaces(mut self, position: Space, rotation: Space) -> Self {
        self.position_space = position;
        self.rotation_space = rotation;
        self
    }

    /// Set the spaces the target's pose is read from.
    pub fn with_target_spaces(mut self, position: Space, rotation: Space) -> Self {
        self.target_position_space = position;
        self.target_rotation_space = rotation;
        self
    }

    pub fn with_position_blend(mut self, blend: BlendMode) -> Self {
        self.position_blend = blend;
        self
    }

    pub fn with_rotation_blend(mut self, blend: BlendMode) -> Self {
        self.rotation_blend = blend;
        self
    }

    pub fn with_position_rate(mut self, rate: f32) -> Self {
        self.position_rate = rate;
        self
    }

    pub fn with_rotation_rate(mut self, rate: f32) -> Self {
        self.rotation_rate = rate;
        self
    }

    pub fn with_snap_on_start(mut self, snap: bool) -> Self {
        self.snap_on_start = snap;
        self
    }
}

// -- Blend strategies --
//
// One pure function per (value kind × blend mode) combination. The follower
// selects its pair once, when the config is applied.

type PositionBlendFn = fn(Vec3, Vec3, f32) -> Vec3;
type RotationBlendFn = fn(Quat, Quat, f32) -> Quat;

fn snap_position(_current: Vec3, target: Vec3, _t: f32) -> Vec3 {
    target
}

fn approach_position(current: Vec3, target: Vec3, t: f32) -> Vec3 {
    current.lerp(target, t)
}

fn snap_rotation(_current: Quat, target: Quat, _t: f32) -> Quat {
    target
}

fn approach_rotation(current: Quat, target: Quat, t: f32) -> Quat {
    current.slerp(target, t)
}

fn position_blend_fn(mode: BlendMode) -> PositionBlendFn {
    match mode {
        BlendMode::Approach => approach_position,
        BlendMode::Snap => snap_position,
    }
}

fn rotation_blend_fn(mode: BlendMode) -> RotationBlendFn {
    match mode {
        BlendMode::Approach => approach_rotation,
        BlendMode::Snap => snap_rotation,
    }
}

/// Frame-qualified result of one advance, to be written back by the host.
///
/// Values land in the space they are tagged with, raw — see
/// [`TransformSnapshot`] for the no-conversion caveat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowUpdate {
    pub position: Option<(Space, Vec3)>,
    pub rotation: Option<(Space, Quat)>,
}

impl FollowUpdate {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none()
    }

    /// Write the update into a snapshot's tagged frames.
    pub fn apply_to(&self, snapshot: &mut TransformSnapshot) {
        if let Some((space, position)) = self.position {
            snapshot.get_mut(space).position = position;
        }
        if let Some((space, orientation)) = self.rotation {
            snapshot.get_mut(space).orientation = orientation;
        }
    }
}

/// Advances a follower pose toward a target pose with configurable per-axis
/// spaces and blend modes.
#[derive(Clone)]
pub struct Follower {
    config: FollowConfig,
    blend_position: PositionBlendFn,
    blend_rotation: RotationBlendFn,
    enabled: bool,
    snap_pending: bool,
}

impl Follower {
    pub fn new(config: FollowConfig) -> Self {
        Self {
            blend_position: position_blend_fn(config.position_blend),
            blend_rotation: rotation_blend_fn(config.rotation_blend),
            enabled: true,
            snap_pending: config.snap_on_start,
            config,
        }
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Gate the follower on or off. A disabled follower produces empty updates.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance toward the target by one frame.
    ///
    /// Both position and rotation are read from the single `target` snapshot
    /// passed in, never re-sampled per axis. The returned update carries the
    /// new values tagged with the spaces they should be written to; the
    /// follower itself mutates nothing but its own snap latch.
    pub fn advance(
        &mut self,
        current: &TransformSnapshot,
        target: &TransformSnapshot,
        dt: f32,
    ) -> FollowUpdate {
        if !self.enabled {
            return FollowUpdate::default();
        }

        let target_position = target.get(self.config.target_position_space).position;
        let target_rotation = target.get(self.config.target_rotation_space).orientation;

        if self.snap_pending {
            self.snap_pending = false;
            return FollowUpdate {
                position: self
                    .config
                    .axes
                    .has_position()
                    .then(|| (self.config.position_space, target_position)),
                rotation: self
                    .config
                    .axes
                    .has_rotation()
                    .then(|| (self.config.rotation_space, target_rotation)),
            };
        }

        let mut update = FollowUpdate::default();

        if self.config.axes.has_position() {
            let space = self.config.position_space;
            let from = current.get(space).position;
            let blended = (self.blend_position)(from, target_position, dt * self.config.position_rate);
            update.position = Some((space, blended));
        }

        if self.config.axes.has_rotation() {
            let space = self.config.rotation_space;
            let from = current.get(space).orientation;
            let blended = (self.blend_rotation)(from, target_rotation, dt * self.config.rotation_rate);
            update.rotation = Some((space, blended));
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::TransformState;

    fn snapshot_at(position: Vec3) -> TransformSnapshot {
        TransformSnapshot::uniform(TransformState::from_position(position))
    }

    #[test]
    fn snap_blend_equals_target_for_any_dt() {
        let config = FollowConfig::default()
            .with_position_blend(BlendMode::Snap)
            .with_rotation_blend(BlendMode::Snap);
        let mut follower = Follower::new(config);

        let current = snapshot_at(Vec3::ZERO);
        let target = TransformSnapshot::uniform(TransformState::new(
            Vec3::new(5.0, -2.0, 8.0),
            Quat::from_rotation_y(1.2),
        ));

        for dt in [0.0, 0.001, 0.016, 10.0] {
            let update = follower.advance(&current, &target, dt);
            let (_, position) = update.position.unwrap();
            let (_, rotation) = update.rotation.unwrap();
            assert_eq!(position, target.world.position);
            assert!(rotation.abs_diff_eq(target.world.orientation, 1e-6));
        }
    }

    #[test]
    fn zero_rate_never_moves() {
        let config = FollowConfig::default()
            .with_position_rate(0.0)
            .with_rotation_rate(0.0);
        let mut follower = Follower::new(config);

        let current = TransformSnapshot::uniform(TransformState::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_x(0.5),
        ));
        let target = snapshot_at(Vec3::new(100.0, 0.0, 0.0));

        let update = follower.advance(&current, &target, 1.0);
        let (_, position) = update.position.unwrap();
        let (_, rotation) = update.rotation.unwrap();
        assert_eq!(position, current.world.position);
        assert!(rotation.abs_diff_eq(current.world.orientation, 1e-6));
    }

    #[test]
    fn approach_stays_on_segment() {
        let config = FollowConfig::default()
            .with_axes(FollowAxes::Position)
            .with_position_rate(2.0);
        let mut follower = Follower::new(config);

        let current = snapshot_at(Vec3::ZERO);
        let target = snapshot_at(Vec3::new(10.0, 0.0, 0.0));

        // rate * dt = 0.5 — halfway along the segment
        let update = follower.advance(&current, &target, 0.25);
        let (_, position) = update.position.unwrap();
        assert!(position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(position.x >= 0.0 && position.x <= 10.0);
        assert!(update.rotation.is_none());
    }

    #[test]
    fn advance_is_idempotent_at_target() {
        let mut follower = Follower::new(FollowConfig::default().with_position_rate(3.0));

        let pose = TransformSnapshot::uniform(TransformState::new(
            Vec3::new(4.0, 4.0, 4.0),
            Quat::from_rotation_z(0.3),
        ));

        for _ in 0..5 {
            let update = follower.advance(&pose, &pose, 0.016);
            let (_, position) = update.position.unwrap();
            let (_, rotation) = update.rotation.unwrap();
            assert!(position.abs_diff_eq(pose.world.position, 1e-6));
            assert!(rotation.abs_diff_eq(pose.world.orientation, 1e-6));
        }
    }

    #[test]
    fn snap_on_start_applies_once_then_blends() {
        let config = FollowConfig::default()
            .with_axes(FollowAxes::Position)
            .with_position_rate(0.0)
            .with_snap_on_start(true);
        let mut follower = Follower::new(config);

        let current = snapshot_at(Vec3::ZERO);
        let target = snapshot_at(Vec3::new(7.0, 0.0, 0.0));

        // First advance snaps despite the zero rate.
        let update = follower.advance(&current, &target, 0.016);
        assert_eq!(update.position.unwrap().1, Vec3::new(7.0, 0.0, 0.0));

        // Second advance blends — zero rate holds position.
        let update = follower.advance(&current, &target, 0.016);
        assert_eq!(update.position.unwrap().1, Vec3::ZERO);
    }

    #[test]
    fn disabled_follower_produces_empty_update() {
        let mut follower = Follower::new(FollowConfig::default());
        follower.set_enabled(false);

        let current = snapshot_at(Vec3::ZERO);
        let target = snapshot_at(Vec3::ONE);

        assert!(follower.advance(&current, &target, 0.016).is_empty());
    }

    #[test]
    fn spaces_select_raw_fields() {
        let config = FollowConfig::default()
            .with_axes(FollowAxes::Position)
            .with_position_blend(BlendMode::Snap)
            .with_write_spaces(Space::Local, Space::Local)
            .with_target_spaces(Space::Local, Space::Local);
        let mut follower = Follower::new(config);

        let current = TransformSnapshot::default();
        let target = TransformSnapshot::new(
            TransformState::from_position(Vec3::new(50.0, 0.0, 0.0)),
            TransformState::from_position(Vec3::new(2.0, 0.0, 0.0)),
        );

        let update = follower.advance(&current, &target, 0.016);
        let (space, position) = update.position.unwrap();
        assert_eq!(space, Space::Local);
        assert_eq!(position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn apply_to_writes_tagged_frames() {
        let update = FollowUpdate {
            position: Some((Space::Local, Vec3::new(1.0, 2.0, 3.0))),
            rotation: Some((Space::World, Quat::from_rotation_y(0.7))),
        };

        let mut snapshot = TransformSnapshot::default();
        update.apply_to(&mut snapshot);

        assert_eq!(snapshot.local.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(snapshot
            .world
            .orientation
            .abs_diff_eq(Quat::from_rotation_y(0.7), 1e-6));
        // Untagged frames untouched
        assert_eq!(snapshot.world.position, Vec3::ZERO);
        assert_eq!(snapshot.local.orientation, Quat::IDENTITY);
    }

    #[test]
    fn config_from_json_fills_defaults() {
        let config = FollowConfig::from_json(
            r#"{ "axes": "Position", "position_rate": 4.0, "snap_on_start": true }"#,
        )
        .unwrap();

        assert_eq!(config.axes, FollowAxes::Position);
        assert_eq!(config.position_rate, 4.0);
        assert!(config.snap_on_start);
        assert_eq!(config.rotation_rate, 0.25);
        assert_eq!(config.position_blend, BlendMode::Approach);
    }
}
