//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::BoundingBox;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(bb: &BoundingBox, color: [f32; 4]) -> [Vertex; 6] {
    let tl = Vertex::new(bb.left, bb.top, color);
    let tr = Vertex::new(bb.right, bb.top, color);
    let bl = Vertex::new(bb.left, bb.bottom, color);
    let br = Vertex::new(bb.right, bb.bottom, color);

    [tl, bl, tr, tr, bl, br]
}
