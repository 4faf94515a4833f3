//! Retained-mode recording backend.
//!
//! [`DrawList`] implements [`Canvas`] by appending every call to a list of
//! [`DrawOp`]s. Hosts with a scene graph replay the list into their own node
//! types; tests use it to assert the exact call sequence of a frame.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;

use crate::layout::Transform;
use crate::surface::{Canvas, PointF};

/// One recorded draw call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawOp {
    Fill(Rgb888),
    Line { from: PointF, to: PointF, color: Rgb888 },
    Transform(Transform),
}

/// Ordered list of recorded draw calls.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    /// Create an empty list.
    pub const fn new() -> Self { Self { ops: Vec::new() } }

    /// Recorded calls in issue order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Iterate over recorded line segments of a given color.
    pub fn lines_with_color(
        &self,
        color: Rgb888,
    ) -> impl Iterator<Item = (PointF, PointF)> + '_ {
        self.ops.iter().filter_map(move |op| match *op {
            DrawOp::Line { from, to, color: c } if c == color => Some((from, to)),
            _ => None,
        })
    }

    /// Get number of recorded calls.
    #[inline]
    pub fn len(&self) -> usize { self.ops.len() }

    /// Check if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool { self.ops.is_empty() }

    /// Drop all recorded calls, keeping the allocation for the next frame.
    pub fn clear(&mut self) { self.ops.clear(); }
}

impl Canvas for DrawList {
    type Error = Infallible;

    fn fill(
        &mut self,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Fill(color));
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: PointF,
        to: PointF,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Line { from, to, color });
        Ok(())
    }

    fn apply_transform(
        &mut self,
        transform: Transform,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Transform(transform));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        assert!(list.is_empty());

        list.apply_transform(Transform::IDENTITY).unwrap();
        list.fill(Rgb888::WHITE).unwrap();
        list.draw_line(PointF::new(0.0, 0.0), PointF::new(1.0, 1.0), Rgb888::RED).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.ops()[0], DrawOp::Transform(Transform::IDENTITY));
        assert_eq!(list.ops()[1], DrawOp::Fill(Rgb888::WHITE));
        assert!(matches!(list.ops()[2], DrawOp::Line { color, .. } if color == Rgb888::RED));
    }

    #[test]
    fn test_lines_with_color() {
        let mut list = DrawList::new();
        list.draw_line(PointF::new(0.0, 0.0), PointF::new(1.0, 0.0), Rgb888::RED).unwrap();
        list.draw_line(PointF::new(0.0, 1.0), PointF::new(1.0, 1.0), Rgb888::BLACK).unwrap();
        list.draw_line(PointF::new(0.0, 2.0), PointF::new(1.0, 2.0), Rgb888::RED).unwrap();

        let red: Vec<_> = list.lines_with_color(Rgb888::RED).collect();
        assert_eq!(red.len(), 2);
        assert_eq!(red[1].0, PointF::new(0.0, 2.0));
        assert_eq!(list.lines_with_color(Rgb888::BLACK).count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = DrawList::new();
        list.fill(Rgb888::WHITE).unwrap();
        list.clear();
        assert!(list.is_empty());
    }
}
