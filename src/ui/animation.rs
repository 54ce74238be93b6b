//! Animation drivers
//!
//! Rings rotate through a [`Tween`] sampled on every frame. The production
//! tween is [`LinearTween`], built on `iced::animation::Animation`.

pub mod rotation;

pub use rotation::{AnimationState, LinearTween, RotationEngine, Tween};
