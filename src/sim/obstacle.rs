//! Static obstacles: the ground plane and floating platforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BoundingBox, KinematicBody};
use super::viewport::Viewport;

/// Obstacle variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Ground,
    Platform,
}

/// A body that never moves on its own
///
/// Ground is pinned to the viewport: its box is rebuilt from the current
/// viewport on every update. Platforms keep the box they were created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Obstacle {
    Ground(KinematicBody),
    Platform(KinematicBody),
}

impl Obstacle {
    /// Ground strip of the given thickness, placed by the first `update`
    pub fn ground(height: f32) -> Self {
        Obstacle::Ground(KinematicBody::new(Vec2::ZERO, 0.0, height))
    }

    pub fn platform(x: f32, y: f32, width: f32, height: f32) -> Self {
        Obstacle::Platform(KinematicBody::new(Vec2::new(x, y), width, height))
    }

    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Ground(_) => ObstacleKind::Ground,
            Obstacle::Platform(_) => ObstacleKind::Platform,
        }
    }

    pub fn body(&self) -> &KinematicBody {
        match self {
            Obstacle::Ground(body) | Obstacle::Platform(body) => body,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.body().bounding_box()
    }

    /// Per-frame refresh; only the ground has anything to do
    pub fn update(&mut self, viewport: &Viewport) {
        if let Obstacle::Ground(body) = self {
            body.pos = Vec2::new(0.0, viewport.ground_level);
            body.width = viewport.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_tracks_viewport() {
        let mut ground = Obstacle::ground(20.0);
        let mut viewport = Viewport::new(1280.0, 1000.0);

        ground.update(&viewport);
        let bb = ground.bounding_box();
        assert_eq!(bb.left, 0.0);
        assert_eq!(bb.top, 800.0);
        assert_eq!(bb.right, 1280.0);
        assert_eq!(bb.height(), 20.0);

        viewport.resize(640.0, 500.0);
        ground.update(&viewport);
        let bb = ground.bounding_box();
        assert_eq!(bb.top, 400.0);
        assert_eq!(bb.right, 640.0);
        assert_eq!(bb.height(), 20.0);
    }

    #[test]
    fn test_platform_ignores_viewport() {
        let mut platform = Obstacle::platform(600.0, 500.0, 200.0, 20.0);
        let before = platform.bounding_box();
        platform.update(&Viewport::new(100.0, 100.0));
        assert_eq!(platform.bounding_box(), before);
        assert_eq!(platform.kind(), ObstacleKind::Platform);
    }
}
