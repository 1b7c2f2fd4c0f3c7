//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web, a counter when headless)

pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scheduler::{FrameCounter, FrameScheduler};
#[cfg(target_arch = "wasm32")]
pub use web::{AnimationFrameScheduler, FrameCallback};
