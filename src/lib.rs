//! Platform Hop - A minimal side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (gravity, jumping, platform collisions)
//! - `renderer`: Draw surface abstraction and WebGPU rectangle pipeline
//! - `platform`: Frame scheduling and browser key codes
//! - `settings`: Data-driven tuning and level layout

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All physics values are per frame, in pixels. The simulation advances once
/// per display refresh and has no notion of elapsed time.
pub mod consts {
    /// Downward acceleration added to vertical velocity each airborne frame
    pub const GRAVITY: f32 = 0.25;
    /// Upward velocity delta applied on a jump
    pub const JUMP_IMPULSE: f32 = 15.0;
    /// Horizontal speed while a move control is held
    pub const BASE_X_VEL: f32 = 2.5;

    /// Ground sits at `viewport height / GROUND_DIVISOR`
    pub const GROUND_DIVISOR: f32 = 1.25;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 600.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Platform defaults (ground shares the height)
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Browser `keyCode` values for the three controls
    pub const KEY_W: u32 = 87;
    pub const KEY_A: u32 = 65;
    pub const KEY_D: u32 = 68;
}
