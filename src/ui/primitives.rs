//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`RingLayer`] - One rotating ring of cones drawn on a Canvas

pub mod ring_layer;

pub use ring_layer::{RingLayer, view_ring_layer};
