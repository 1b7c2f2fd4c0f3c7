//! Simulation context and per-frame events
//!
//! Everything one frame step reads or writes lives in `SimulationContext`,
//! built once at startup and passed explicitly to the frame driver.

use glam::Vec2;

use super::input::{InputState, KeyBindings};
use super::obstacle::Obstacle;
use super::player::{Physics, Player};
use super::viewport::Viewport;
use crate::renderer::Palette;
use crate::settings::Settings;

/// What the player is standing on or left from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Ground,
    /// Index into `SimulationContext::obstacles`
    Platform(usize),
}

/// Notable things that happened during the last frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Landed { on: Support },
    Jumped { from: Support },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub viewport: Viewport,
    /// Written by the host between frames
    pub input: InputState,
    pub bindings: KeyBindings,
    pub physics: Physics,
    pub palette: Palette,
    pub player: Player,
    /// Ground first, then platforms in collision order
    pub obstacles: Vec<Obstacle>,
    /// Completed frame steps
    pub frame: u64,
    /// Events from the most recent frame step
    pub events: Vec<SimEvent>,
}

impl SimulationContext {
    /// Build the world described by `settings` for a surface of the given size
    pub fn new(settings: &Settings, width: f32, height: f32) -> Self {
        let viewport = Viewport::with_divisor(width, height, settings.ground_divisor);

        let mut obstacles = Vec::with_capacity(settings.platforms.len() + 1);
        let mut ground = Obstacle::ground(settings.ground_height);
        ground.update(&viewport);
        obstacles.push(ground);
        obstacles.extend(
            settings
                .platforms
                .iter()
                .map(|p| Obstacle::platform(p.x, p.y, p.width, p.height)),
        );

        let spawn = &settings.player;
        let player = Player::new(Vec2::new(spawn.x, spawn.y), spawn.width, spawn.height);

        Self {
            viewport,
            input: InputState::default(),
            bindings: settings.keys,
            physics: settings.physics,
            palette: settings.palette,
            player,
            obstacles,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Host resize notification; read at the start of the next frame step
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Host key-down/key-up notification. Returns false for unmapped keys.
    pub fn key_event(&mut self, key_code: u32, pressed: bool) -> bool {
        self.input.key_event(&self.bindings, key_code, pressed)
    }

    /// Top of the ground as of the last ground update
    pub fn ground_y(&self) -> f32 {
        self.obstacles
            .iter()
            .find(|o| matches!(o, Obstacle::Ground(_)))
            .map(|g| g.bounding_box().top)
            .unwrap_or(self.viewport.ground_level)
    }

    /// Platforms only, with their indices into `obstacles`
    pub fn platforms(&self) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.obstacles
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, Obstacle::Platform(_)))
    }
}
