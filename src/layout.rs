//! Aspect-locked drawing region and grid pitch.
//!
//! Every frame the host supplies the surface size and padding ([`Frame`]).
//! [`Layout::compute`] turns that into the rectangle the strip is drawn in,
//! the pixel pitch of one major and one minor grid cell, and the transform to
//! apply before drawing.
//!
//! # Aspect Lock
//!
//! The drawn region always has the grid's `columns : rows` ratio exactly. The
//! constrained side is trimmed to a multiple of its grid count, and the other
//! side is derived from the whole-pixel cell pitch, so every gridline falls on
//! an integer pixel:
//!
//! ```text
//! width-constrained:  draw_width  = usable_width  - usable_width  % columns
//!                     draw_height = usable_width  / columns * rows
//! height-constrained: draw_height = usable_height - usable_height % rows
//!                     draw_width  = usable_height / rows * columns
//! ```
//!
//! The ratio test cross-multiplies instead of dividing, so tall surfaces
//! (`usable_width < usable_height`) pick the correct side.
//!
//! # Scale Center
//!
//! With [`ScaleMode::ScaleCenter`] the region is scaled uniformly until it
//! touches the usable area on one side, then shifted right to center it
//! horizontally. The top edge stays flush with the top padding.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{EcgConfig, ScaleMode};
use crate::surface::PointF;

// =============================================================================
// Surface Boundary
// =============================================================================

/// Four-sided padding in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self::uniform(0);

    pub const fn new(
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same padding on all four sides.
    pub const fn uniform(px: u32) -> Self { Self::new(px, px, px, px) }
}

/// Surface size and padding for one frame, as negotiated by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
}

impl Frame {
    pub const fn new(
        width: u32,
        height: u32,
        padding: Padding,
    ) -> Self {
        Self { width, height, padding }
    }

    /// Width left after horizontal padding. Negative when padding exceeds the surface.
    pub const fn usable_width(&self) -> i64 {
        self.width as i64 - self.padding.left as i64 - self.padding.right as i64
    }

    /// Height left after vertical padding. Negative when padding exceeds the surface.
    pub const fn usable_height(&self) -> i64 {
        self.height as i64 - self.padding.top as i64 - self.padding.bottom as i64
    }
}

// =============================================================================
// Transform
// =============================================================================

/// Uniform scale followed by a translation: `p' = p * scale + (dx, dy)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub scale: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { scale: 1.0, dx: 0.0, dy: 0.0 };

    #[inline]
    pub fn is_identity(&self) -> bool { *self == Self::IDENTITY }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(
        &self,
        p: PointF,
    ) -> PointF {
        PointF::new(p.x * self.scale + self.dx, p.y * self.scale + self.dy)
    }
}

impl Default for Transform {
    fn default() -> Self { Self::IDENTITY }
}

// =============================================================================
// Layout
// =============================================================================

/// Geometry derived for a single frame. Never retained across frames.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Layout {
    /// Surface width minus horizontal padding.
    pub usable_width: i32,
    /// Surface height minus vertical padding.
    pub usable_height: i32,
    /// Width of the aspect-locked region (`<= usable_width`).
    pub draw_width: i32,
    /// Height of the aspect-locked region (`<= usable_height`).
    pub draw_height: i32,
    /// Left edge of the region (left padding).
    pub origin_x: i32,
    /// Top edge of the region (top padding).
    pub origin_y: i32,
    /// Pixels per major grid cell.
    pub major_cell_px: i32,
    /// Pixels per minor grid cell. Zero when the subdivision is finer than a pixel.
    pub minor_cell_px: i32,
    /// Applied to every draw call of the frame.
    pub transform: Transform,
}

impl Layout {
    /// Compute the frame geometry.
    ///
    /// Returns `None` when nothing but the background can be drawn: a zero grid
    /// count, padding that leaves no usable area, a usable area smaller than
    /// one pixel per grid cell, or geometry outside the `i32` pixel range.
    pub fn compute(
        frame: &Frame,
        config: &EcgConfig,
    ) -> Option<Self> {
        if !config.has_grid() {
            return None;
        }

        let usable_width = frame.usable_width();
        let usable_height = frame.usable_height();
        if usable_width <= 0 || usable_height <= 0 {
            return None;
        }

        let columns = i64::from(config.columns_per_row);
        let rows = i64::from(config.rows_per_column);

        // usable_width / usable_height <= columns / rows, without truncation
        let width_constrained = usable_width * rows <= columns * usable_height;

        let (draw_width, draw_height) = if width_constrained {
            (usable_width - usable_width % columns, usable_width / columns * rows)
        } else {
            (usable_height / rows * columns, usable_height - usable_height % rows)
        };

        if draw_width == 0 || draw_height == 0 {
            return None;
        }

        let major_cell_px = draw_width / columns;
        let minor_cell_px = major_cell_px.checked_div(i64::from(config.minor_cells_per_major)).unwrap_or(0);

        let transform = match config.scale_mode {
            ScaleMode::Normal => Transform::IDENTITY,
            ScaleMode::ScaleCenter => {
                let scale = (usable_width as f32 / draw_width as f32).min(usable_height as f32 / draw_height as f32);
                let dx = ((usable_width as f32 - draw_width as f32 * scale) * 0.5).round();
                Transform { scale, dx, dy: 0.0 }
            }
        };

        // Surfaces past the i32 pixel range have no layout
        Some(Self {
            usable_width: i32::try_from(usable_width).ok()?,
            usable_height: i32::try_from(usable_height).ok()?,
            draw_width: i32::try_from(draw_width).ok()?,
            draw_height: i32::try_from(draw_height).ok()?,
            origin_x: i32::try_from(frame.padding.left).ok()?,
            origin_y: i32::try_from(frame.padding.top).ok()?,
            major_cell_px: i32::try_from(major_cell_px).ok()?,
            minor_cell_px: i32::try_from(minor_cell_px).ok()?,
            transform,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
