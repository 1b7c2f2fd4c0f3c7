//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One step per display refresh, all quantities per frame
//! - Obstacles resolved in list order
//! - Drawing and scheduling only through the collaborator traits

pub mod body;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;
pub mod viewport;

pub use body::{BoundingBox, KinematicBody};
pub use collision::{crosses_top, resolve_platforms};
pub use input::{Control, InputState, KeyBindings};
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{Physics, Player, Regime};
pub use state::{SimEvent, SimulationContext, Support};
pub use tick::step;
pub use viewport::Viewport;
