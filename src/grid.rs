//! ECG paper grid.
//!
//! Minor lines are drawn first so the major lines are never covered:
//!
//! | Lines | Range | Step |
//! |-------|-------|------|
//! | Minor horizontal | `0..draw_height` | `minor_cell_px` |
//! | Minor vertical | `0..draw_width` | `minor_cell_px` |
//! | Major vertical | `0..=draw_width` | `major_cell_px` |
//! | Major horizontal | `0..=draw_height` | `major_cell_px` |
//!
//! A zero pitch (subdivision finer than one pixel) draws nothing for that set.

use embedded_graphics::pixelcolor::Rgb888;

use crate::config::EcgConfig;
use crate::layout::Layout;
use crate::surface::{Canvas, PointF};

/// Fill the whole surface with the paper color.
pub fn draw_background<C>(
    canvas: &mut C,
    config: &EcgConfig,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    canvas.fill(config.background_color)
}

/// Draw minor (optional) then major gridlines. Returns the number of lines drawn.
pub fn draw_grid<C>(
    canvas: &mut C,
    layout: &Layout,
    config: &EcgConfig,
) -> Result<usize, C::Error>
where
    C: Canvas,
{
    let mut lines = 0;

    if config.show_minor_grid {
        if let Some(step) = stride(layout.minor_cell_px) {
            lines += draw_horizontals(canvas, layout, (0..layout.draw_height).step_by(step), config.minor_grid_color)?;
            lines += draw_verticals(canvas, layout, (0..layout.draw_width).step_by(step), config.minor_grid_color)?;
        } else {
            log::debug!("minor grid skipped: {} px major cell too small", layout.major_cell_px);
        }
    }

    if let Some(step) = stride(layout.major_cell_px) {
        lines += draw_verticals(canvas, layout, (0..=layout.draw_width).step_by(step), config.major_grid_color)?;
        lines += draw_horizontals(canvas, layout, (0..=layout.draw_height).step_by(step), config.major_grid_color)?;
    }

    Ok(lines)
}

/// Loop stride for a cell pitch; `None` for a pitch that would never advance.
#[inline]
fn stride(pitch_px: i32) -> Option<usize> { (pitch_px > 0).then_some(pitch_px as usize) }

fn draw_horizontals<C, I>(
    canvas: &mut C,
    layout: &Layout,
    offsets: I,
    color: Rgb888,
) -> Result<usize, C::Error>
where
    C: Canvas,
    I: Iterator<Item = i32>,
{
    let left = layout.origin_x as f32;
    let right = (layout.origin_x + layout.draw_width) as f32;
    let mut count = 0;
    for offset in offsets {
        let y = (layout.origin_y + offset) as f32;
        canvas.draw_line(PointF::new(left, y), PointF::new(right, y), color)?;
        count += 1;
    }
    Ok(count)
}

fn draw_verticals<C, I>(
    canvas: &mut C,
    layout: &Layout,
    offsets: I,
    color: Rgb888,
) -> Result<usize, C::Error>
where
    C: Canvas,
    I: Iterator<Item = i32>,
{
    let top = layout.origin_y as f32;
    let bottom = (layout.origin_y + layout.draw_height) as f32;
    let mut count = 0;
    for offset in offsets {
        let x = (layout.origin_x + offset) as f32;
        canvas.draw_line(PointF::new(x, top), PointF::new(x, bottom), color)?;
        count += 1;
    }
    Ok(count)
}

// =============================================================================
// Tests
// =============================================================================
