//! Scene composition
//!
//! Turns layer configs plus their current animation values into plain draw
//! descriptors. Rebuilt from scratch every frame.

use iced::Color;
use rand::Rng;

use super::color::ColorIntent;
use super::radial::LayerConfig;
use super::shape::{ShapeOutline, ShapeRect};

/// Elements per ring in the default composition
pub const DEFAULT_ELEMENT_COUNT: usize = 30;
/// Opacity shared by the default rings
pub const DEFAULT_OPACITY: f32 = 0.3;

/// The red, green and blue rings, offset by 20 degrees each
pub fn default_layers() -> Vec<LayerConfig> {
    vec![
        LayerConfig::new(DEFAULT_ELEMENT_COUNT, ColorIntent::Red, DEFAULT_OPACITY, 0.0),
        LayerConfig::new(
            DEFAULT_ELEMENT_COUNT,
            ColorIntent::Green,
            DEFAULT_OPACITY,
            20.0,
        ),
        LayerConfig::new(
            DEFAULT_ELEMENT_COUNT,
            ColorIntent::Blue,
            DEFAULT_OPACITY,
            40.0,
        ),
    ]
}

/// One filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraw {
    /// Resting angle of the element within its ring
    pub angular_position_degrees: f64,
    pub color: Color,
    /// Element rotation around the shared center, in degrees
    pub rotation_degrees: f32,
}

/// All draws of one ring
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayer {
    /// Rotation applied to the ring as a whole
    pub outer_rotation_degrees: f32,
    pub draws: Vec<ShapeDraw>,
}

impl SceneLayer {
    /// Total rotation of each draw: ring offset plus element rotation
    pub fn total_rotations(&self) -> impl Iterator<Item = f32> + '_ {
        self.draws
            .iter()
            .map(|draw| (self.outer_rotation_degrees + draw.rotation_degrees).rem_euclid(360.0))
    }
}

/// Composited frame: a shared outline and the rings stacked bottom to top
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub outline: ShapeOutline,
    pub layers: Vec<SceneLayer>,
}

impl Scene {
    #[cfg(test)]
    pub fn draw_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.draws.len()).sum()
    }
}

/// Compose one frame
///
/// Each item pairs a layer with its current animation value and the random
/// source its colors are drawn from.
pub fn compose<'a, R, I>(shape: ShapeRect, layers: I) -> Scene
where
    R: Rng + 'a,
    I: IntoIterator<Item = (&'a LayerConfig, f64, &'a mut R)>,
{
    let layers = layers
        .into_iter()
        .map(|(config, current_degrees, rng)| SceneLayer {
            outer_rotation_degrees: config.rotation_offset_degrees,
            draws: config
                .layout(current_degrees, rng)
                .into_iter()
                .map(|element| ShapeDraw {
                    angular_position_degrees: element.angular_position_degrees,
                    color: element.color,
                    rotation_degrees: element.rotation_degrees,
                })
                .collect(),
        })
        .collect();

    Scene {
        outline: ShapeOutline::cone(shape),
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut angles: Vec<f32>) -> Vec<f32> {
        angles.sort_by(|a, b| a.total_cmp(b));
        angles
    }

    #[test]
    fn test_default_composition_at_rest() {
        let layers = default_layers();
        let mut rngs: Vec<StdRng> = (0..3).map(StdRng::seed_from_u64).collect();

        let scene = compose(
            ShapeRect::centered(50.0, 150.0),
            layers.iter().zip(rngs.iter_mut()).map(|(l, r)| (l, 0.0_f64, r)),
        );

        assert_eq!(scene.layers.len(), 3);
        assert_eq!(scene.draw_count(), 90);
        for layer in &scene.layers {
            assert_eq!(layer.draws.len(), 30);
        }

        let colors = [
            Color::from_rgba(1.0, 0.0, 0.0, 0.3),
            Color::from_rgba(0.0, 1.0, 0.0, 0.3),
            Color::from_rgba(0.0, 0.0, 1.0, 0.3),
        ];
        let offsets = [0.0_f32, 20.0, 40.0];

        for ((layer, color), offset) in scene.layers.iter().zip(colors).zip(offsets) {
            assert_eq!(layer.outer_rotation_degrees, offset);
            assert!(layer.draws.iter().all(|d| d.color == color));
            // Nothing has turned yet, only the ring offset applies
            assert!(layer.total_rotations().all(|r| (r - offset).abs() < 1e-6));

            for (k, draw) in layer.draws.iter().enumerate() {
                assert!((draw.angular_position_degrees - k as f64 * 12.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_default_angles_follow_static_positions() {
        let layers = default_layers();
        let mut rngs: Vec<StdRng> = (0..3).map(StdRng::seed_from_u64).collect();

        // Animation value 1 leaves every element at its resting position
        let scene = compose(
            ShapeRect::centered(50.0, 150.0),
            layers.iter().zip(rngs.iter_mut()).map(|(l, r)| (l, 1.0_f64, r)),
        );

        for (layer, offset) in scene.layers.iter().zip([0.0_f32, 20.0, 40.0]) {
            let expected: Vec<f32> = sorted(
                (0..30)
                    .map(|k| (k as f32 * 12.0 + offset).rem_euclid(360.0))
                    .collect(),
            );
            let actual = sorted(layer.total_rotations().collect());

            for (a, e) in actual.iter().zip(&expected) {
                assert!((a - e).abs() < 1e-3, "expected {} got {}", e, a);
            }
        }
    }

    #[test]
    fn test_layers_share_outline() {
        let layers = default_layers();
        let mut rng = StdRng::seed_from_u64(9);
        let mut other = StdRng::seed_from_u64(10);

        let scene = compose(
            ShapeRect::centered(10.0, 20.0),
            [(&layers[0], 0.0_f64, &mut rng), (&layers[1], 0.0_f64, &mut other)],
        );
        assert_eq!(scene.outline, ShapeOutline::cone(ShapeRect::centered(10.0, 20.0)));
    }

    #[test]
    fn test_empty_composition() {
        let scene = compose::<StdRng, _>(ShapeRect::centered(1.0, 1.0), []);
        assert_eq!(scene.draw_count(), 0);
    }
}
