//! UI module for the rotating rings
//!
//! # Architecture
//!
//! - **Animation** (`animation`): Rotation engines and their tweens
//! - **Primitives** (`primitives`): Canvas programs that draw a composed scene
//! - **Theme** (`theme`): Backdrop colors

pub mod animation;
pub mod primitives;
pub mod theme;
