//! CPU-side draw list, rebuilt every frame

use super::DrawSurface;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::BoundingBox;

/// Collects filled rectangles as triangles in pixel coordinates
#[derive(Debug, Clone)]
pub struct RectBatch {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
}

impl RectBatch {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            vertices: Vec::with_capacity(6 * 8),
            clear_color,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn rect_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Color of the `index`th rectangle in draw order
    pub fn rect_color(&self, index: usize) -> Option<[f32; 4]> {
        self.vertices.get(index * 6).map(|v| v.color)
    }
}

impl DrawSurface for RectBatch {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: &BoundingBox, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::rect(rect, color));
    }
}
