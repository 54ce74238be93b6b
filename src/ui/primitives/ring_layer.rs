//! Rotating ring layer primitive
//!
//! Draws one [`SceneLayer`] with iced's Canvas: every element is the same cone
//! outline, rotated about the center of the canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Element, Fill, Radians, Renderer, Theme, Vector, mouse};

use crate::features::scene::SceneLayer;
use crate::features::shape::ShapeOutline;

/// One ring ready to draw
#[derive(Debug, Clone)]
pub struct RingLayer {
    outline: ShapeOutline,
    layer: SceneLayer,
}

impl RingLayer {
    pub fn new(outline: ShapeOutline, layer: SceneLayer) -> Self {
        Self { outline, layer }
    }
}

impl<Message> Program<Message> for RingLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Vector::new(bounds.width / 2.0, bounds.height / 2.0);
        let path = self.outline.to_path();

        for (draw, degrees) in self.layer.draws.iter().zip(self.layer.total_rotations()) {
            frame.with_save(|frame| {
                frame.translate(center);
                frame.rotate(Radians(degrees.to_radians()));
                frame.fill(&path, draw.color);
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Create a full-size canvas for one ring
pub fn view_ring_layer<'a, Message: 'a>(
    outline: ShapeOutline,
    layer: SceneLayer,
) -> Element<'a, Message> {
    Canvas::new(RingLayer::new(outline, layer))
        .width(Fill)
        .height(Fill)
        .into()
}
