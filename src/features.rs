//! Feature modules - animation logic separated from UI
//!
//! Geometry, colors, layout and composition are plain data-in/data-out
//! functions. Features should not depend on UI components directly.

pub mod color;
pub mod radial;
pub mod scene;
pub mod settings;
pub mod shape;

pub use color::ColorIntent;
pub use radial::LayerConfig;
pub use settings::{Repeat, Settings};
