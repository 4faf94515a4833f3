//! The drawing capability the renderer needs from a backend.
//!
//! [`Canvas`] is deliberately small: fill the whole surface, stroke a straight
//! segment, and optionally accept a scale + translate transform. Any backend
//! that can do those three things can show an ECG strip.
//!
//! [`DrawTargetCanvas`] adapts an `embedded_graphics::DrawTarget`. Segment
//! endpoints arrive with sub-pixel precision and are rounded to the nearest
//! pixel after the transform is applied.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::layout::Transform;

// =============================================================================
// Sub-pixel Point
// =============================================================================

/// A point in surface pixels with sub-pixel precision.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub const fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }

    /// Round to the nearest whole pixel.
    #[inline]
    pub fn round(self) -> Point { Point::new(self.x.round() as i32, self.y.round() as i32) }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self { Self::new(p.x as f32, p.y as f32) }
}

// =============================================================================
// Canvas Capability
// =============================================================================

/// Abstract 2D drawing surface.
pub trait Canvas {
    /// Error reported by the backend.
    type Error;

    /// Fill the entire surface, ignoring any transform.
    fn fill(
        &mut self,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Stroke a straight segment between two points.
    fn draw_line(
        &mut self,
        from: PointF,
        to: PointF,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Apply a transform to every subsequent `draw_line` call.
    ///
    /// Backends without transform support may ignore it; the strip is then
    /// drawn unscaled at the top-left of the padded area.
    fn apply_transform(
        &mut self,
        transform: Transform,
    ) -> Result<(), Self::Error> {
        let _ = transform;
        Ok(())
    }
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`Canvas`] over any `DrawTarget` whose color converts from `Rgb888`.
///
/// Create one per frame; the transform lives as long as the adapter.
pub struct DrawTargetCanvas<'a, D> {
    target: &'a mut D,
    transform: Transform,
}

impl<'a, D> DrawTargetCanvas<'a, D>
where
    D: DrawTarget,
{
    /// Wrap a draw target with an identity transform. Lines are 1px wide.
    pub fn new(target: &'a mut D) -> Self { Self { target, transform: Transform::IDENTITY } }

    /// Transform currently applied to lines.
    #[inline]
    pub const fn transform(&self) -> Transform { self.transform }
}

impl<D> Canvas for DrawTargetCanvas<'_, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn fill(
        &mut self,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        self.target.clear(color.into())
    }

    fn draw_line(
        &mut self,
        from: PointF,
        to: PointF,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        let start = self.transform.apply(from);
        let end = self.transform.apply(to);
        // Non-finite endpoints would saturate to the i32 range when rounded
        if !(start.is_finite() && end.is_finite()) {
            return Ok(());
        }
        Line::new(start.round(), end.round())
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut *self.target)
    }

    fn apply_transform(
        &mut self,
        transform: Transform,
    ) -> Result<(), Self::Error> {
        self.transform = transform;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
