//! Cone shape geometry
//!
//! One decorative element is an isosceles triangle whose apex sits on the
//! rectangle center, capped by a semicircle hanging below its base.
//!
//! # Design
//!
//! The outline is plain data (`Segment`s) so it can be inspected in tests and
//! built once per frame; [`ShapeOutline::to_path`] turns it into a canvas path.

use iced::widget::canvas::{Path, path};
use iced::{Point, Radians};

/// Bounding rectangle for one element, described from its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRect {
    pub center: Point,
    /// Horizontal offset of the base corners (also the arc radius)
    pub half_width: f32,
    /// Vertical offset from the apex down to the base
    pub half_height: f32,
}

impl ShapeRect {
    pub fn new(center: Point, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    /// Rect centered on the origin, the form the canvas draws with
    pub fn centered(half_width: f32, half_height: f32) -> Self {
        Self::new(Point::ORIGIN, half_width, half_height)
    }
}

/// A single outline instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc, angles in degrees, sweeping towards increasing angles
    Arc {
        center: Point,
        radius: f32,
        start_degrees: f32,
        end_degrees: f32,
    },
}

impl Segment {
    /// Point where the arc begins
    fn arc_start(center: Point, radius: f32, start_degrees: f32) -> Point {
        let angle = start_degrees.to_radians();
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

/// Closed outline of the cone: triangle sides followed by the semicircle
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutline {
    segments: Vec<Segment>,
}

impl ShapeOutline {
    /// Build the cone outline for a rect
    pub fn cone(rect: ShapeRect) -> Self {
        let ShapeRect {
            center,
            half_width: w,
            half_height: h,
        } = rect;
        let base = Point::new(center.x, center.y + h);

        let segments = vec![
            // Apex
            Segment::MoveTo(center),
            // Right base corner
            Segment::LineTo(Point::new(center.x + w, center.y + h)),
            // Left base corner
            Segment::LineTo(Point::new(center.x - w, center.y + h)),
            Segment::LineTo(center),
            // Semicircle below the base
            Segment::Arc {
                center: base,
                radius: w,
                start_degrees: 0.0,
                end_degrees: 180.0,
            },
        ];

        Self { segments }
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Straight-line vertices in drawing order, stopping at the first arc
    #[cfg(test)]
    pub fn polygon_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments
            .iter()
            .map_while(|segment| match segment {
                Segment::MoveTo(p) | Segment::LineTo(p) => Some(*p),
                Segment::Arc { .. } => None,
            })
    }

    /// Build the canvas path
    ///
    /// Each arc starts its own sub-path, so the semicircle is filled
    /// alongside the triangle rather than stitched to the apex.
    pub fn to_path(&self) -> Path {
        Path::new(|builder| {
            for segment in &self.segments {
                match *segment {
                    Segment::MoveTo(p) => builder.move_to(p),
                    Segment::LineTo(p) => builder.line_to(p),
                    Segment::Arc {
                        center,
                        radius,
                        start_degrees,
                        end_degrees,
                    } => {
                        builder.move_to(Segment::arc_start(center, radius, start_degrees));
                        builder.arc(path::Arc {
                            center,
                            radius,
                            start_angle: Radians(start_degrees.to_radians()),
                            end_angle: Radians(end_degrees.to_radians()),
                        });
                    }
                }
            }
        })
    }
}
