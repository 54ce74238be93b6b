//! Application state

use std::cell::RefCell;

use iced::window;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::features::{LayerConfig, Settings};
use crate::ui::animation::RotationEngine;

/// Main application state
pub struct App {
    pub settings: Settings,
    /// Rings, bottom to top
    pub layers: Vec<LayerState>,
    /// Main window, once opened
    pub window: Option<window::Id>,
}

/// One ring: its fixed config, its rotation and its color source
pub struct LayerState {
    pub config: LayerConfig,
    pub engine: RotationEngine,
    /// Seed used when colors stay fixed across frames
    color_seed: u64,
    /// Source of per-frame seeds (RefCell so view() can draw from it)
    rng: RefCell<StdRng>,
}

impl LayerState {
    pub fn new(config: LayerConfig, engine: RotationEngine, seeds: &mut StdRng) -> Self {
        Self {
            config,
            engine,
            color_seed: seeds.random(),
            rng: RefCell::new(StdRng::seed_from_u64(seeds.random())),
        }
    }

    /// Random source for one frame's colors
    ///
    /// With `reroll` every frame gets a fresh stream, otherwise the stream is
    /// replayed from the same seed so colors never change.
    pub fn frame_rng(&self, reroll: bool) -> StdRng {
        if reroll {
            StdRng::seed_from_u64(self.rng.borrow_mut().random())
        } else {
            StdRng::seed_from_u64(self.color_seed)
        }
    }
}

impl App {
    /// Build state from settings without opening any window
    pub fn with_settings(settings: Settings) -> Self {
        let mut seeds = match settings.colors.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let cycle = settings.animation.cycle_duration();
        let repeat = settings.animation.repeat;
        let layers = settings
            .layers
            .iter()
            .cloned()
            .map(|config| LayerState::new(config, RotationEngine::new(cycle, repeat), &mut seeds))
            .collect();

        tracing::info!(
            "Prepared {} ring(s), one cycle every {:.0}s",
            settings.layers.len(),
            cycle.as_secs_f64()
        );

        Self {
            settings,
            layers,
            window: None,
        }
    }

    /// Whether any ring still needs frames
    pub fn is_animating(&self) -> bool {
        self.layers.iter().any(|layer| layer.engine.is_animating())
    }
}
