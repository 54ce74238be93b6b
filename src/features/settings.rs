//! Application settings persistence
//!
//! Handles loading the animation configuration and writing the defaults on
//! first launch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::radial::LayerConfig;
use super::scene::default_layers;
use super::shape::ShapeRect;

/// What happens when a rotation cycle reaches 360 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Start over from 0 degrees
    #[default]
    Forever,
    /// Hold at 360 degrees
    Once,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rings, bottom to top
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerConfig>,
    /// Element geometry
    #[serde(default)]
    pub shape: ShapeSettings,
    /// Rotation timing
    #[serde(default)]
    pub animation: AnimationSettings,
    /// Random color behavior
    #[serde(default)]
    pub colors: ColorSettings,
    /// Display and window settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Size of one cone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSettings {
    /// Base corner offset and semicircle radius
    pub half_width: f32,
    /// Apex-to-base distance
    pub half_height: f32,
}

/// Rotation timing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Multiplier on the base cycle rate (smaller is slower)
    pub speed: f64,
    /// Length of one 0-360 cycle at speed 1.0, in seconds
    #[serde(default = "default_base_cycle_secs")]
    pub base_cycle_secs: f64,
    #[serde(default)]
    pub repeat: Repeat,
}

/// Random color settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Pick new random colors on every redraw
    #[serde(default = "default_true")]
    pub reroll_every_frame: bool,
    /// Fixed seed for the random source
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Display-related settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark background instead of white
    pub dark_mode: bool,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_base_cycle_secs() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_window_width() -> f32 {
    800.0
}

fn default_window_height() -> f32 {
    800.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layers: default_layers(),
            shape: ShapeSettings::default(),
            animation: AnimationSettings::default(),
            colors: ColorSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            half_width: 50.0,
            half_height: 150.0,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            speed: 0.00075,
            base_cycle_secs: default_base_cycle_secs(),
            repeat: Repeat::Forever,
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            reroll_every_frame: true,
            seed: None,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl ShapeSettings {
    /// Rect centered on the origin
    pub fn rect(&self) -> ShapeRect {
        ShapeRect::centered(self.half_width, self.half_height)
    }
}

impl AnimationSettings {
    /// Wall-clock length of one 0-360 cycle
    ///
    /// At the default speed this is roughly 22 minutes. Falls back to the
    /// default cycle when the ratio is not a representable duration.
    pub fn cycle_duration(&self) -> Duration {
        self.try_cycle_duration().unwrap_or_else(|| {
            let defaults = Self::default();
            Duration::from_secs_f64(defaults.base_cycle_secs / defaults.speed)
        })
    }

    fn try_cycle_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.base_cycle_secs / self.speed)
            .ok()
            .filter(|cycle| !cycle.is_zero())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gyre", "Gyre")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings.sanitized()
            }
            Err(SettingsError::Io(_)) if !path.exists() => {
                tracing::info!("No settings file at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Replace values the animation cannot use
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let before = self.layers.len();
        self.layers.retain(|layer| layer.element_count > 0);
        if self.layers.len() != before {
            tracing::warn!(
                "Dropped {} layer(s) with no elements",
                before - self.layers.len()
            );
        }

        for layer in &mut self.layers {
            let clamped = if layer.opacity.is_nan() {
                1.0
            } else {
                layer.opacity.clamp(0.0, 1.0)
            };
            if clamped != layer.opacity {
                tracing::warn!("Clamped layer opacity {} to {}", layer.opacity, clamped);
                layer.opacity = clamped;
            }
            if !layer.rotation_offset_degrees.is_finite() {
                tracing::warn!("Reset non-finite layer rotation offset");
                layer.rotation_offset_degrees = 0.0;
            }
        }

        if !is_positive(self.animation.speed) {
            tracing::warn!(
                "Invalid animation speed {}, using {}",
                self.animation.speed,
                defaults.animation.speed
            );
            self.animation.speed = defaults.animation.speed;
        }
        if !is_positive(self.animation.base_cycle_secs) {
            tracing::warn!(
                "Invalid base cycle {}s, using {}s",
                self.animation.base_cycle_secs,
                defaults.animation.base_cycle_secs
            );
            self.animation.base_cycle_secs = defaults.animation.base_cycle_secs;
        }
        if self.animation.try_cycle_duration().is_none() {
            tracing::warn!(
                "Cycle of {}s at speed {} is out of range, using defaults",
                self.animation.base_cycle_secs,
                self.animation.speed
            );
            self.animation.speed = defaults.animation.speed;
            self.animation.base_cycle_secs = defaults.animation.base_cycle_secs;
        }

        if !self.shape.half_width.is_finite() || !self.shape.half_height.is_finite() {
            tracing::warn!("Invalid shape size, using defaults");
            self.shape = defaults.shape;
        }

        if !is_positive(self.display.window_width as f64)
            || !is_positive(self.display.window_height as f64)
        {
            tracing::warn!("Invalid window size, using defaults");
            self.display.window_width = defaults.display.window_width;
            self.display.window_height = defaults.display.window_height;
        }

        self
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::color::ColorIntent;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gyre-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_defaults_match_default_composition() {
        let settings = Settings::default();

        assert_eq!(settings.layers.len(), 3);
        assert_eq!(settings.layers[0].color, ColorIntent::Red);
        assert_eq!(settings.layers[1].rotation_offset_degrees, 20.0);
        assert_eq!(settings.layers[2].rotation_offset_degrees, 40.0);
        assert_eq!(settings.animation.repeat, Repeat::Forever);
        assert!(settings.colors.reroll_every_frame);
    }

    #[test]
    fn test_cycle_duration() {
        let animation = AnimationSettings::default();
        let secs = animation.cycle_duration().as_secs_f64();
        assert!((secs - 1333.333).abs() < 0.01, "got {}", secs);

        let fast = AnimationSettings {
            speed: 2.0,
            base_cycle_secs: 10.0,
            repeat: Repeat::Once,
        };
        assert_eq!(fast.cycle_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.colors.seed = Some(1234);
        settings.animation.repeat = Repeat::Once;

        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let parsed = Settings::from_json("{}").unwrap();
        assert_eq!(parsed, Settings::default());

        let parsed = Settings::from_json(
            r#"{ "layers": [ { "element_count": 5, "color": "random", "opacity": 1.0 } ] }"#,
        )
        .unwrap();
        assert_eq!(parsed.layers.len(), 1);
        assert_eq!(parsed.layers[0].rotation_offset_degrees, 0.0);
        assert_eq!(parsed.layers[0].cycle_modulus, None);
        assert_eq!(parsed.shape, ShapeSettings::default());
    }

    #[test]
    fn test_parse_error() {
        let result = Settings::from_json("{ not json");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_sanitize() {
        let mut settings = Settings::default();
        settings.layers.push(LayerConfig::new(0, ColorIntent::Red, 0.5, 0.0));
        settings.layers[0].opacity = 1.7;
        settings.layers[1].opacity = f32::NAN;
        settings.animation.speed = 0.0;
        settings.animation.base_cycle_secs = f64::INFINITY;
        settings.display.window_width = -1.0;

        let clean = settings.sanitized();
        assert_eq!(clean.layers.len(), 3);
        assert_eq!(clean.layers[0].opacity, 1.0);
        assert_eq!(clean.layers[1].opacity, 1.0);
        assert_eq!(clean.animation, AnimationSettings::default());
        assert_eq!(clean.display, DisplaySettings::default());
    }

    #[test]
    fn test_unrepresentable_cycle_falls_back() {
        let mut settings = Settings::default();
        settings.animation.speed = 1e-300;

        // Out-of-range ratios never panic
        let raw = settings.animation.cycle_duration();
        assert_eq!(raw, AnimationSettings::default().cycle_duration());

        let clean = settings.clone().sanitized();
        assert_eq!(clean.animation, AnimationSettings::default());

        settings.animation = AnimationSettings {
            base_cycle_secs: 1e300,
            ..AnimationSettings::default()
        };
        assert_eq!(settings.sanitized().animation, AnimationSettings::default());
    }

    #[test]
    fn test_load_written_file() {
        let path = temp_path("load-written");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, settings.to_json().unwrap()).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load_from_file(&temp_path("missing"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
