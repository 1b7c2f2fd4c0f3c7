//! Viewport dimensions tracked from host resize events

use serde::{Deserialize, Serialize};

use crate::consts::GROUND_DIVISOR;

/// Current drawing-surface size and the ground line derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Width / height, recorded on every resize
    pub aspect: f32,
    /// Top edge of the ground, `height / ground_divisor`
    pub ground_level: f32,
    ground_divisor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_divisor(width, height, GROUND_DIVISOR)
    }

    pub fn with_divisor(width: f32, height: f32, ground_divisor: f32) -> Self {
        let mut viewport = Self {
            width: 0.0,
            height: 0.0,
            aspect: 0.0,
            ground_level: 0.0,
            ground_divisor,
        };
        viewport.resize(width, height);
        viewport
    }

    /// Recompute everything derived from the surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.aspect = width / height;
        self.ground_level = height / self.ground_divisor;
    }
}
