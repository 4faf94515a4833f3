//! The single drawing pass.
//!
//! [`render`] is stateless: every call recomputes the layout from the frame
//! and configuration, then issues all draw calls in a fixed order:
//!
//! 1. Transform (only when a layout exists)
//! 2. Background fill
//! 3. Minor gridlines, then major gridlines
//! 4. Waveform columns 1-4
//!
//! Rendering the same inputs twice issues the same calls in the same order.
//! When no layout can be computed (zero grid counts, no usable area) only the
//! background fill is issued.

use crate::config::EcgConfig;
use crate::grid::{draw_background, draw_grid};
use crate::layout::{Frame, Layout};
use crate::surface::Canvas;
use crate::waveform::draw_waveform;

/// What a render pass drew.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct RenderSummary {
    /// Geometry used for the frame; `None` for a background-only frame.
    pub layout: Option<Layout>,
    /// Gridlines drawn (minor + major).
    pub grid_lines: usize,
    /// Waveform segments drawn across all columns.
    pub segments: usize,
}

/// Render one frame of the strip.
///
/// The sample buffer is only borrowed for the duration of the call; the caller
/// must not mutate it concurrently.
pub fn render<C>(
    canvas: &mut C,
    frame: &Frame,
    config: &EcgConfig,
    samples: &[i32],
) -> Result<RenderSummary, C::Error>
where
    C: Canvas,
{
    let Some(layout) = Layout::compute(frame, config) else {
        log::debug!(
            "background-only frame: {}x{} grid on {}x{} surface",
            config.columns_per_row,
            config.rows_per_column,
            frame.width,
            frame.height
        );
        draw_background(canvas, config)?;
        return Ok(RenderSummary::default());
    };

    canvas.apply_transform(layout.transform)?;
    draw_background(canvas, config)?;
    let grid_lines = draw_grid(canvas, &layout, config)?;
    let segments = draw_waveform(canvas, &layout, config, samples)?;

    log::trace!(
        "rendered {}x{} region, {} gridlines, {} segments from {} samples",
        layout.draw_width,
        layout.draw_height,
        grid_lines,
        segments,
        samples.len()
    );

    Ok(RenderSummary { layout: Some(layout), grid_lines, segments })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::config::ScaleMode;
    use crate::draw_list::{DrawList, DrawOp};
    use crate::layout::{Padding, Transform};
    use crate::surface::DrawTargetCanvas;

    const FRAME: Frame = Frame::new(520, 380, Padding::ZERO);

    fn record(
        frame: &Frame,
        config: &EcgConfig,
        samples: &[i32],
    ) -> (DrawList, RenderSummary) {
        let mut list = DrawList::new();
        let summary = render(&mut list, frame, config, samples).unwrap();
        (list, summary)
    }

    #[test]
    fn test_zero_columns_fill_only() {
        let config = EcgConfig { columns_per_row: 0, ..EcgConfig::default() };
        let (list, summary) = record(&FRAME, &config, &[1, 2, 3, 4, 5]);

        assert_eq!(list.ops(), &[DrawOp::Fill(config.background_color)]);
        assert_eq!(summary, RenderSummary::default());
    }

    #[test]
    fn test_zero_rows_fill_only() {
        let config = EcgConfig { rows_per_column: 0, ..EcgConfig::default() };
        let (list, _) = record(&FRAME, &config, &[0; 4800]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_padding_swallows_surface() {
        let (list, summary) = record(&Frame::new(40, 40, Padding::uniform(20)), &EcgConfig::default(), &[0; 10]);
        assert_eq!(list.len(), 1);
        assert!(summary.layout.is_none());
    }

    #[test]
    fn test_call_order() {
        let config = EcgConfig::default();
        let (list, summary) = record(&FRAME, &config, &[0; 4800]);

        assert_eq!(list.ops()[0], DrawOp::Transform(Transform::IDENTITY));
        assert_eq!(list.ops()[1], DrawOp::Fill(config.background_color));
        assert_eq!(list.len(), 2 + summary.grid_lines + summary.segments);

        // Waveform comes after every gridline
        let first_trace = list
            .ops()
            .iter()
            .position(|op| matches!(op, DrawOp::Line { color, .. } if *color == config.waveform_color))
            .unwrap();
        assert_eq!(first_trace, 2 + summary.grid_lines);
    }

    #[test]
    fn test_full_strip_summary() {
        let (_, summary) = record(&FRAME, &EcgConfig::default(), &[0; 4800]);
        assert_eq!(summary.grid_lines, 320 + 66);
        assert_eq!(summary.segments, 4799);
        assert_eq!(summary.layout.map(|l| l.major_cell_px), Some(10));
    }

    #[test]
    fn test_unvalidated_total_size_draws_grid_only() {
        let config = EcgConfig { total_size: 0, ..EcgConfig::default() };
        let (list, summary) = record(&FRAME, &config, &[0, 1, 2]);

        assert_eq!(summary.segments, 0);
        assert_eq!(summary.grid_lines, 320 + 66);
        assert_eq!(list.lines_with_color(config.waveform_color).count(), 0);
        for op in list.ops() {
            if let DrawOp::Line { from, to, .. } = op {
                assert!(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite());
            }
        }
    }

    #[test]
    fn test_empty_buffer_no_waveform() {
        for scale_mode in [ScaleMode::Normal, ScaleMode::ScaleCenter] {
            for show_minor_grid in [true, false] {
                let config = EcgConfig { scale_mode, show_minor_grid, ..EcgConfig::default() };
                let (list, summary) = record(&FRAME, &config, &[]);
                assert_eq!(summary.segments, 0);
                assert_eq!(list.lines_with_color(config.waveform_color).count(), 0);
            }
        }
    }

    #[test]
    fn test_scale_center_emits_transform_first() {
        let config = EcgConfig { scale_mode: ScaleMode::ScaleCenter, ..EcgConfig::default() };
        let (list, _) = record(&FRAME, &config, &[]);
        assert_eq!(list.ops()[0], DrawOp::Transform(Transform { scale: 1.0, dx: 130.0, dy: 0.0 }));
    }

    #[test]
    fn test_deterministic() {
        let config = EcgConfig { start_column: 3, column_spacing: 6, ..EcgConfig::default() };
        let samples: Vec<i32> = (0..5000).map(|i| ((i * 37) % 61) - 30).collect();

        let (first, _) = record(&FRAME, &config, &samples);
        let (second, _) = record(&FRAME, &config, &samples);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_onto_draw_target() {
        let config = EcgConfig {
            columns_per_row: 4,
            rows_per_column: 4,
            total_size: 8,
            start_column: 1,
            column_spacing: 1,
            ..EcgConfig::default()
        };
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);

        // 60x60 region, major pitch 15, minor pitch 3
        let summary = render(&mut DrawTargetCanvas::new(&mut display), &Frame::new(60, 60, Padding::ZERO), &config, &[0; 8])
            .unwrap();
        assert_eq!(summary.segments, 2 + 2 + 2 + 1);

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(config.major_grid_color));
        assert_eq!(display.get_pixel(Point::new(16, 44)), Some(Rgb888::WHITE));
        assert_eq!(display.get_pixel(Point::new(18, 44)), Some(config.minor_grid_color));
        // Zero-amplitude trace covers the column 1 baseline
        assert_eq!(display.get_pixel(Point::new(15, 44)), Some(config.waveform_color));
        assert_eq!(display.get_pixel(Point::new(60, 45)), Some(config.waveform_color));
    }
}
