//! Color selection for shape elements

use iced::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which color a layer paints its elements with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorIntent {
    Red,
    Green,
    Blue,
    /// Fresh random RGB for every element
    Random,
}

impl ColorIntent {
    /// Pick a primary by cycling `index mod modulus` through red, green, blue
    ///
    /// Remainders past 1 all map to blue. A zero modulus yields red.
    pub fn cycled(index: usize, modulus: usize) -> Self {
        match index.checked_rem(modulus) {
            Some(0) | None => Self::Red,
            Some(1) => Self::Green,
            Some(_) => Self::Blue,
        }
    }

    /// Resolve to a concrete color
    ///
    /// `Random` draws each channel uniformly from [0, 1) on every call.
    pub fn resolve<R: Rng>(self, opacity: f32, rng: &mut R) -> Color {
        match self {
            Self::Red => Color::from_rgba(1.0, 0.0, 0.0, opacity),
            Self::Green => Color::from_rgba(0.0, 1.0, 0.0, opacity),
            Self::Blue => Color::from_rgba(0.0, 0.0, 1.0, opacity),
            Self::Random => {
                let r: f32 = rng.random();
                let g: f32 = rng.random();
                let b: f32 = rng.random();
                Color::from_rgba(r, g, b, opacity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_primary_colors() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            ColorIntent::Red.resolve(0.3, &mut rng),
            Color::from_rgba(1.0, 0.0, 0.0, 0.3)
        );
        assert_eq!(
            ColorIntent::Green.resolve(0.3, &mut rng),
            Color::from_rgba(0.0, 1.0, 0.0, 0.3)
        );
        assert_eq!(
            ColorIntent::Blue.resolve(0.3, &mut rng),
            Color::from_rgba(0.0, 0.0, 1.0, 0.3)
        );
    }

    #[test]
    fn test_random_channels_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let color = ColorIntent::Random.resolve(0.5, &mut rng);
            for channel in [color.r, color.g, color.b] {
                assert!(
                    (0.0..1.0).contains(&channel),
                    "Channel {} out of range",
                    channel
                );
            }
            assert_eq!(color.a, 0.5);
        }
    }

    #[test]
    fn test_cycled() {
        let cycle: Vec<ColorIntent> = (0..6).map(|i| ColorIntent::cycled(i, 3)).collect();
        assert_eq!(
            cycle,
            vec![
                ColorIntent::Red,
                ColorIntent::Green,
                ColorIntent::Blue,
                ColorIntent::Red,
                ColorIntent::Green,
                ColorIntent::Blue,
            ]
        );

        // Remainders past 1 collapse to blue
        assert_eq!(ColorIntent::cycled(3, 5), ColorIntent::Blue);
        assert_eq!(ColorIntent::cycled(4, 5), ColorIntent::Blue);
        // Modulus 1 is always red
        assert_eq!(ColorIntent::cycled(9, 1), ColorIntent::Red);
        assert_eq!(ColorIntent::cycled(9, 0), ColorIntent::Red);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ColorIntent::Random).unwrap();
        assert_eq!(json, "\"random\"");
        let parsed: ColorIntent = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(parsed, ColorIntent::Blue);
    }
}
