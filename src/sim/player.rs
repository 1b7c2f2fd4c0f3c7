//! Player controller: gravity, jumping and integration against the ground

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BoundingBox, KinematicBody};
use super::input::InputState;
use crate::consts::{BASE_X_VEL, GRAVITY, JUMP_IMPULSE};

/// Per-frame physics tuning
///
/// Any values are accepted; zero or negative gravity just bends the arc
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub base_speed: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            base_speed: BASE_X_VEL,
        }
    }
}

/// Vertical regime chosen by one `Player::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Still above the ground line; gravity applied
    Airborne,
    /// Was grounded with jump held; impulse applied
    Jumped,
    /// At or crossing the ground line; vertical velocity pinned to zero
    Grounded,
}

/// The controllable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicBody,
    pub grounded: bool,
    /// Edges derived after each integration step
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Player {
    /// Edges start at zero and are first derived by `update`
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            body: KinematicBody::new(pos, width, height),
            grounded: false,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.body.bounding_box()
    }

    /// One frame of motion against the ground line at `ground_y`.
    ///
    /// Integrates first, then picks the vertical regime from where one more
    /// vertical step would land. Horizontal velocity is left untouched.
    pub fn update(&mut self, physics: &Physics, ground_y: f32, jump_pressed: bool) -> Regime {
        self.body.integrate();
        self.derive_edges();

        if self.bottom + self.body.vel.y <= ground_y {
            self.body.vel.y += physics.gravity;
            Regime::Airborne
        } else if self.grounded && jump_pressed {
            self.jump(physics.jump_impulse);
            Regime::Jumped
        } else {
            self.land();
            Regime::Grounded
        }
    }

    /// Pick horizontal velocity from the held controls.
    ///
    /// Only refuses to *start* a move past the viewport edge; position is
    /// never clamped, so a body already moving may overshoot by one frame.
    pub fn steer(&mut self, input: &InputState, viewport_width: f32, base_speed: f32) {
        self.body.vel.x = if input.left && self.left > 0.0 {
            -base_speed
        } else if input.right && self.right < viewport_width {
            base_speed
        } else {
            0.0
        };
    }

    /// Rest on a surface
    pub fn land(&mut self) {
        self.grounded = true;
        self.body.vel.y = 0.0;
    }

    /// Leave the surface with an upward impulse
    pub fn jump(&mut self, impulse: f32) {
        self.grounded = false;
        self.body.vel.y -= impulse;
    }

    fn derive_edges(&mut self) {
        self.bottom = self.body.pos.y + self.body.height;
        self.left = self.body.pos.x;
        self.right = self.body.pos.x + self.body.width;
    }
}
