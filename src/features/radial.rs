//! Radial layout of one rotating ring of shapes

use iced::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::ColorIntent;

/// Immutable parameters of one ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Number of shapes spread around the circle
    pub element_count: usize,
    pub color: ColorIntent,
    /// Fill opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Fixed rotation applied to the whole ring
    #[serde(default)]
    pub rotation_offset_degrees: f32,
    /// Cycle red/green/blue by element index instead of using `color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_modulus: Option<usize>,
}

impl LayerConfig {
    pub fn new(
        element_count: usize,
        color: ColorIntent,
        opacity: f32,
        rotation_offset_degrees: f32,
    ) -> Self {
        Self {
            element_count,
            color,
            opacity,
            rotation_offset_degrees,
            cycle_modulus: None,
        }
    }

    /// Angular spacing between neighbouring elements
    pub fn spacing_degrees(&self) -> f64 {
        360.0 / self.element_count as f64
    }

    /// Color intent for a given element
    pub fn intent_for(&self, index: usize) -> ColorIntent {
        match self.cycle_modulus {
            Some(modulus) => ColorIntent::cycled(index, modulus),
            None => self.color,
        }
    }

    /// Lay out every element for the given animation value
    ///
    /// Colors are resolved from `rng` on every call.
    pub fn layout<R: Rng>(&self, current_degrees: f64, rng: &mut R) -> Vec<ShapeElement> {
        let spacing = self.spacing_degrees();

        (0..self.element_count)
            .map(|index| {
                let angular_position_degrees = index as f64 * spacing;
                ShapeElement {
                    index,
                    angular_position_degrees,
                    rotation_degrees: element_rotation(angular_position_degrees, current_degrees),
                    color: self.intent_for(index).resolve(self.opacity, rng),
                }
            })
            .collect()
    }
}

/// Rotation of one element: its angular position scaled by the animation value
///
/// The product (not the sum) is what makes the ring fan out and twist as the
/// animation progresses. Reduced into [0, 360).
pub fn element_rotation(angular_position_degrees: f64, current_degrees: f64) -> f32 {
    (angular_position_degrees * current_degrees).rem_euclid(360.0) as f32
}

/// One laid-out shape, rebuilt every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeElement {
    pub index: usize,
    /// Resting position before the animation is applied
    pub angular_position_degrees: f64,
    /// Rotation for the current animation value, in [0, 360)
    pub rotation_degrees: f32,
    pub color: Color,
}
