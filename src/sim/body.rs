//! Kinematic bodies and axis-aligned bounding boxes
//!
//! Screen coordinates: origin top-left, y grows downward. A body's position
//! is its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle used for overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Position, velocity and size shared by every physical entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            width,
            height,
        }
    }

    /// Box at the current position
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            top: self.pos.y,
            bottom: self.pos.y + self.height,
            left: self.pos.x,
            right: self.pos.x + self.width,
        }
    }

    /// Advance position by one frame of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_from_body() {
        let body = KinematicBody::new(Vec2::new(600.0, 500.0), 200.0, 20.0);
        let bb = body.bounding_box();
        assert_eq!(bb.top, 500.0);
        assert_eq!(bb.bottom, 520.0);
        assert_eq!(bb.left, 600.0);
        assert_eq!(bb.right, 800.0);
        assert_eq!(bb.width(), 200.0);
        assert_eq!(bb.height(), 20.0);
    }

    #[test]
    fn test_integrate_adds_velocity() {
        let mut body = KinematicBody::new(Vec2::new(10.0, 20.0), 5.0, 5.0);
        body.vel = Vec2::new(2.5, -15.0);
        body.integrate();
        assert_eq!(body.pos, Vec2::new(12.5, 5.0));
    }
}
