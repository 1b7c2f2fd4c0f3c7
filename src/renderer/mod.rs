//! Rendering module
//!
//! The simulation draws through `DrawSurface`; `RectBatch` turns those calls
//! into triangles and `RenderState` puts them on the canvas with WebGPU.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::RectBatch;
pub use pipeline::RenderState;
pub use vertex::{Palette, Vertex, colors};

use crate::sim::BoundingBox;

/// A rectangular pixel surface that can be wiped and filled
pub trait DrawSurface {
    /// Wipe the whole surface
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle given in pixels (y down)
    fn fill_rect(&mut self, rect: &BoundingBox, color: [f32; 4]);
}
