//! Waveform columns.
//!
//! The sample buffer is read as four consecutive time slices of roughly
//! `total_size / 4` samples. Each slice is drawn top-to-bottom in its own
//! column, time running from the bottom edge of the region (`offset 0`) to
//! the top edge (`offset total_size / 4`).
//!
//! # Column Ranges
//!
//! With `s(c) = c * total_size / 4` (integer division per boundary):
//!
//! | Column | Points | Baseline cell |
//! |--------|--------|---------------|
//! | 1 | `0 ..= min(s(1), len - 1)` | `start_column` |
//! | 2 | `s(1) ..= min(s(2), len - 1)` | `start_column + spacing` |
//! | 3 | `s(2) ..= min(s(3), len - 1)` | `start_column + 2 * spacing` |
//! | 4 | `s(3) ..= len - 1` | `start_column + 3 * spacing` |
//!
//! Boundary samples are drawn by both adjoining columns. Column 4 has no
//! upper bound, so samples beyond `total_size` all land there.
//!
//! # Sample Mapping
//!
//! ```text
//! x = baseline_cell * major_px - sample * minor_px / 4.25 + origin_x
//! y = draw_height - unit_px * (i - base) + origin_y,   unit_px = draw_height / (total_size / 4.0)
//! ```
//!
//! Positive amplitude moves left of the baseline. Vertical placement keeps
//! sub-pixel precision even though gridlines use whole pixels.

use core::ops::RangeInclusive;

use log::debug;

use crate::config::{COLUMN_COUNT, EcgConfig};
use crate::layout::Layout;
use crate::surface::{Canvas, PointF};

/// Raw sample units per minor cell at standard paper calibration.
pub const CALIBRATION_DIVISOR: f32 = 4.25;

// =============================================================================
// Column Partitioning
// =============================================================================

/// The slice of the sample buffer drawn in one column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColumnSpan {
    /// Column index (0-3).
    pub index: usize,
    /// First sample index; drawn at the bottom edge.
    pub base: usize,
    /// Last sample index, inclusive.
    pub last: usize,
    /// Major-cell index of the zero-amplitude baseline.
    pub baseline_cell: i64,
}

impl ColumnSpan {
    /// Sample indices drawn by this column.
    #[inline]
    pub const fn points(&self) -> RangeInclusive<usize> { self.base..=self.last }

    /// Number of segments drawn (one fewer than points).
    #[inline]
    pub const fn segments(&self) -> usize { self.last - self.base }
}

/// Split a buffer of `len` samples into the four columns.
///
/// A column that would draw no segment (buffer too short to reach it) is `None`.
pub fn column_spans(
    len: usize,
    config: &EcgConfig,
) -> [Option<ColumnSpan>; COLUMN_COUNT] {
    core::array::from_fn(|index| {
        let last_valid = len.checked_sub(1)?;
        let base = config.column_start(index);
        let last = if index == COLUMN_COUNT - 1 {
            last_valid
        } else {
            config.column_start(index + 1).min(last_valid)
        };
        (last > base).then(|| ColumnSpan {
            index,
            base,
            last,
            baseline_cell: i64::from(config.start_column) + index as i64 * i64::from(config.column_spacing),
        })
    })
}

// =============================================================================
// Sample Mapping
// =============================================================================

/// Maps samples of one column to surface pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColumnMapper {
    baseline_px: f32,
    minor_px: f32,
    unit_px: f32,
    bottom_px: f32,
    origin_x: f32,
    origin_y: f32,
}

impl ColumnMapper {
    pub fn new(
        layout: &Layout,
        samples_per_column: f32,
        baseline_cell: i64,
    ) -> Self {
        Self {
            baseline_px: (baseline_cell * i64::from(layout.major_cell_px)) as f32,
            minor_px: layout.minor_cell_px as f32,
            unit_px: layout.draw_height as f32 / samples_per_column,
            bottom_px: layout.draw_height as f32,
            origin_x: layout.origin_x as f32,
            origin_y: layout.origin_y as f32,
        }
    }

    /// Pixel position of `sample` at `offset` samples into the column.
    #[inline]
    pub fn point(
        &self,
        offset: usize,
        sample: i32,
    ) -> PointF {
        let x = self.baseline_px - sample as f32 * self.minor_px / CALIBRATION_DIVISOR + self.origin_x;
        let y = self.bottom_px - self.unit_px * offset as f32 + self.origin_y;
        PointF::new(x, y)
    }

    /// X position of zero amplitude.
    #[inline]
    pub fn baseline_x(&self) -> f32 { self.baseline_px + self.origin_x }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw all four columns as polylines. Returns the number of segments drawn.
///
/// Draws nothing for a `total_size` below four, which
/// [`EcgConfig::validate`] rejects.
pub fn draw_waveform<C>(
    canvas: &mut C,
    layout: &Layout,
    config: &EcgConfig,
    samples: &[i32],
) -> Result<usize, C::Error>
where
    C: Canvas,
{
    if samples.is_empty() {
        return Ok(0);
    }
    if config.quarter() == 0 {
        debug!("Waveform skipped: total_size {} below one sample per column", config.total_size);
        return Ok(0);
    }

    let samples_per_column = config.samples_per_column();
    let mut segments = 0;

    for span in column_spans(samples.len(), config).iter().flatten() {
        let mapper = ColumnMapper::new(layout, samples_per_column, span.baseline_cell);
        let mut prev = mapper.point(0, samples[span.base]);
        for i in span.base + 1..=span.last {
            let next = mapper.point(i - span.base, samples[i]);
            canvas.draw_line(prev, next, config.waveform_color)?;
            prev = next;
        }
        segments += span.segments();
    }

    Ok(segments)
}

// =============================================================================
// Tests
// =============================================================================
