// systems/rotate.rs
//
// Rotator system — constant angular motion about a configured axis. Produces
// a per-frame delta rotation; the host composes it onto its own transform in
// the tagged space.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::transform::Space;

/// Rotator configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Axis to spin around; normalized before use.
    pub axis: Vec3,
    /// Angular speed in degrees per second.
    pub speed_deg: f32,
    /// Space the delta rotation applies in.
    pub space: Space,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            axis: Vec3::X,
            speed_deg: 180.0,
            space: Space::World,
        }
    }
}

impl RotatorConfig {
    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_speed_deg(mut self, speed_deg: f32) -> Self {
        self.speed_deg = speed_deg;
        self
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }
}

/// Emits the frame's delta rotation while enabled.
#[derive(Debug, Clone)]
pub struct Rotator {
    config: RotatorConfig,
    enabled: bool,
}

impl Rotator {
    pub fn new(config: RotatorConfig) -> Self {
        Self {
            config,
            enabled: true,
        }
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    /// Gate the rotator on or off. A disabled rotator emits nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The delta rotation for a frame of `dt` seconds, tagged with the space
    /// it applies in. `None` while disabled or when the axis is zero.
    pub fn tick(&self, dt: f32) -> Option<(Space, Quat)> {
        if !self.enabled {
            return None;
        }

        let axis = self.config.axis.try_normalize()?;
        let angle = self.config.speed_deg.to_radians() * dt;
        Some((self.config.space, Quat::from_axis_angle(axis, angle)))
    }
}
