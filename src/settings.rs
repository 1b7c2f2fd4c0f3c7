//! Game settings and level layout
//!
//! Defaults reproduce the stock game. A JSON document may override any
//! subset of fields; it is only ever read, never written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Palette;
use crate::sim::{KeyBindings, Physics};

/// Where and how big the player starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSpawn {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

/// A platform placement; size defaults to the standard slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformPlacement {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_platform_width")]
    pub width: f32,
    #[serde(default = "default_platform_height")]
    pub height: f32,
}

fn default_platform_width() -> f32 {
    PLATFORM_WIDTH
}

fn default_platform_height() -> f32 {
    PLATFORM_HEIGHT
}

impl PlatformPlacement {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLATFORM_WIDTH,
            height: PLATFORM_HEIGHT,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    pub physics: Physics,

    // === Layout ===
    /// Ground top sits at viewport height / ground_divisor
    pub ground_divisor: f32,
    /// Drawn thickness of the ground strip
    pub ground_height: f32,
    pub player: PlayerSpawn,
    /// Checked in this order every frame
    pub platforms: Vec<PlatformPlacement>,

    // === Controls ===
    pub keys: KeyBindings,

    // === Visuals ===
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            ground_divisor: GROUND_DIVISOR,
            ground_height: PLATFORM_HEIGHT,
            player: PlayerSpawn::default(),
            platforms: vec![PlatformPlacement::at(200.0, 700.0), PlatformPlacement::at(600.0, 500.0)],
            keys: KeyBindings::default(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse an override document; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Suspicious values worth logging. Nothing is rejected: the simulation
    /// is well defined for any numbers, just not always fun.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.ground_divisor <= 0.0 {
            warnings.push(format!(
                "ground_divisor {} puts the ground off-screen",
                self.ground_divisor
            ));
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            warnings.push(format!(
                "player size {}x{} is not positive",
                self.player.width, self.player.height
            ));
        }
        for (i, p) in self.platforms.iter().enumerate() {
            if p.width <= 0.0 || p.height <= 0.0 {
                warnings.push(format!(
                    "platform {} size {}x{} is not positive",
                    i, p.width, p.height
                ));
            }
        }
        if self.physics.gravity <= 0.0 {
            warnings.push(format!(
                "gravity {} will not pull the player down",
                self.physics.gravity
            ));
        }
        let keys = &self.keys;
        if keys.jump == keys.left || keys.jump == keys.right || keys.left == keys.right {
            warnings.push("two controls share a key code".to_string());
        }

        warnings
    }

    fn or_default(result: serde_json::Result<Self>, source: &str) -> Self {
        match result {
            Ok(settings) => {
                for warning in settings.validate() {
                    log::warn!("Settings from {}: {}", source, warning);
                }
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings from {}: {}", source, err);
                Self::default()
            }
        }
    }

    /// Attribute on the canvas element holding an override document
    #[cfg(target_arch = "wasm32")]
    const CANVAS_ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Self {
        match canvas.get_attribute(Self::CANVAS_ATTRIBUTE) {
            Some(json) => Self::or_default(Self::from_json(&json), Self::CANVAS_ATTRIBUTE),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Self {
        let source = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(json) => Self::or_default(Self::from_json(&json), &source),
            Err(err) => {
                log::warn!("Cannot read settings file {}: {}", source, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let s = Settings::default();
        assert_eq!(s.physics.gravity, 0.25);
        assert_eq!(s.physics.jump_impulse, 15.0);
        assert_eq!(s.physics.base_speed, 2.5);
        assert_eq!(s.ground_divisor, 1.25);
        assert_eq!(s.platforms.len(), 2);
        assert_eq!(s.platforms[1], PlatformPlacement::at(600.0, 500.0));
        assert_eq!(s.keys, KeyBindings { jump: 87, left: 65, right: 68 });
        assert!(s.validate().is_empty());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let s = Settings::from_json(
            r#"{
                "physics": { "gravity": 0.5 },
                "platforms": [ { "x": 50.0, "y": 300.0 } ]
            }"#,
        )
        .expect("valid settings");
        assert_eq!(s.physics.gravity, 0.5);
        assert_eq!(s.physics.jump_impulse, 15.0);
        assert_eq!(s.platforms, vec![PlatformPlacement::at(50.0, 300.0)]);
        assert_eq!(s.player, PlayerSpawn::default());
        assert_eq!(s.palette, Palette::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let s = Settings::from_json("{}").expect("valid settings");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Settings::from_json("{ \"physics\": 3 ").is_err());
        let fallback = Settings::or_default(Settings::from_json("nope"), "test");
        assert_eq!(fallback, Settings::default());
    }

    #[test]
    fn test_validate_flags_odd_values() {
        let mut s = Settings::default();
        s.ground_divisor = 0.0;
        s.physics.gravity = -1.0;
        s.platforms.push(PlatformPlacement {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 20.0,
        });
        s.keys.left = s.keys.right;
        assert_eq!(s.validate().len(), 4);
    }
}
