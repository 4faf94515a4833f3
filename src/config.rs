//! Chart configuration.
//!
//! [`EcgConfig`] is a plain value supplied by the host once per render cycle.
//! Loading it from persistent storage is the host's job; this module only
//! defines the options, their defaults and the checks that must pass before
//! a configuration is used for rendering.
//!
//! # Validation
//!
//! Zero grid counts are valid and simply render an empty (background-only)
//! frame. Two conditions are rejected up front because they would break the
//! arithmetic of every subsequent frame:
//!
//! | Condition | Error |
//! |-----------|-------|
//! | `minor_cells_per_major == 0` | [`ConfigError::MinorCellsZero`] |
//! | `total_size < 4` | [`ConfigError::TotalSizeTooSmall`] |

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{GRID_PINK, GRID_RED, PAPER_WHITE, TRACE_BLACK};

// =============================================================================
// Defaults
// =============================================================================

/// Major grid cells across the strip.
pub const DEFAULT_COLUMNS_PER_ROW: u32 = 26;

/// Major grid cells down the strip.
pub const DEFAULT_ROWS_PER_COLUMN: u32 = 38;

/// Minor cells per major cell side (5 x 1 mm in a 5 mm square).
pub const DEFAULT_MINOR_CELLS_PER_MAJOR: u32 = 5;

/// Samples spanning the full four-column strip.
pub const DEFAULT_TOTAL_SIZE: u32 = 4800;

/// Baseline major-cell index of the first waveform column.
pub const DEFAULT_START_COLUMN: i32 = 0;

/// Major cells between successive column baselines.
pub const DEFAULT_COLUMN_SPACING: i32 = 4800;

/// Number of time columns the sample buffer is split into.
pub const COLUMN_COUNT: usize = 4;

const _: () = assert!(DEFAULT_MINOR_CELLS_PER_MAJOR > 0);
const _: () = assert!(DEFAULT_TOTAL_SIZE >= COLUMN_COUNT as u32);

// =============================================================================
// Scale Mode
// =============================================================================

/// How the drawing region is placed inside the surface.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ScaleMode {
    /// Draw at native pixel pitch, anchored at the top-left padding corner.
    #[default]
    Normal,
    /// Scale the region up to fill the usable area, centered horizontally.
    ScaleCenter,
}

impl ScaleMode {
    /// Toggle between the two modes.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Normal => Self::ScaleCenter,
            Self::ScaleCenter => Self::Normal,
        }
    }

    /// Get display label for the mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::ScaleCenter => "SCALE CENTER",
        }
    }
}

/// Decode the legacy integer attribute code (`0` normal, `1` scale-center).
impl TryFrom<u8> for ScaleMode {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::ScaleCenter),
            other => Err(ConfigError::UnknownScaleMode(other)),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// A configuration that cannot be rendered.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minor cells per major cell must be at least 1")]
    MinorCellsZero,
    #[error("total size {total_size} is smaller than the 4 columns it is split into")]
    TotalSizeTooSmall { total_size: u32 },
    #[error("unknown scale mode code {0}")]
    UnknownScaleMode(u8),
}

// =============================================================================
// Configuration
// =============================================================================

/// Everything needed to render one strip, apart from surface size and samples.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EcgConfig {
    pub scale_mode: ScaleMode,
    /// Major grid cells horizontally. Zero disables drawing.
    pub columns_per_row: u32,
    /// Major grid cells vertically. Zero disables drawing.
    pub rows_per_column: u32,
    pub minor_cells_per_major: u32,
    pub show_minor_grid: bool,
    pub background_color: Rgb888,
    pub major_grid_color: Rgb888,
    pub minor_grid_color: Rgb888,
    pub waveform_color: Rgb888,
    /// Samples expected across all four columns.
    pub total_size: u32,
    /// Major-cell index of column 1's zero-amplitude baseline.
    pub start_column: i32,
    /// Major cells between successive column baselines.
    pub column_spacing: i32,
}

impl EcgConfig {
    /// Create the default configuration.
    pub const fn new() -> Self {
        Self {
            scale_mode: ScaleMode::Normal,
            columns_per_row: DEFAULT_COLUMNS_PER_ROW,
            rows_per_column: DEFAULT_ROWS_PER_COLUMN,
            minor_cells_per_major: DEFAULT_MINOR_CELLS_PER_MAJOR,
            show_minor_grid: true,
            background_color: PAPER_WHITE,
            major_grid_color: GRID_RED,
            minor_grid_color: GRID_PINK,
            waveform_color: TRACE_BLACK,
            total_size: DEFAULT_TOTAL_SIZE,
            start_column: DEFAULT_START_COLUMN,
            column_spacing: DEFAULT_COLUMN_SPACING,
        }
    }

    /// Check the configuration can be rendered.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.minor_cells_per_major == 0 {
            return Err(ConfigError::MinorCellsZero);
        }
        if self.total_size < COLUMN_COUNT as u32 {
            return Err(ConfigError::TotalSizeTooSmall { total_size: self.total_size });
        }
        Ok(())
    }

    /// Whether a frame with this configuration draws anything beyond the background.
    #[inline]
    pub const fn has_grid(&self) -> bool { self.columns_per_row > 0 && self.rows_per_column > 0 }

    /// Samples per time column, rounded down.
    #[inline]
    pub const fn quarter(&self) -> usize { self.total_size as usize / COLUMN_COUNT }

    /// First sample index of time column `index`: `index * total_size / 4`.
    ///
    /// Rounds once per boundary, so with a `total_size` that is not a multiple
    /// of four the later columns start one sample past `index * quarter`.
    #[inline]
    pub const fn column_start(
        &self,
        index: usize,
    ) -> usize {
        (index as u64 * self.total_size as u64 / COLUMN_COUNT as u64) as usize
    }

    /// Samples per time column without rounding. Sets the vertical pitch of one sample.
    #[inline]
    pub fn samples_per_column(&self) -> f32 { self.total_size as f32 / COLUMN_COUNT as f32 }
}

impl Default for EcgConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EcgConfig::default();
        assert_eq!(config.scale_mode, ScaleMode::Normal);
        assert_eq!(config.columns_per_row, 26);
        assert_eq!(config.rows_per_column, 38);
        assert_eq!(config.minor_cells_per_major, 5);
        assert!(config.show_minor_grid);
        assert_eq!(config.background_color, Rgb888::new(255, 255, 255));
        assert_eq!(config.major_grid_color, Rgb888::new(255, 0, 0));
        assert_eq!(config.minor_grid_color, Rgb888::new(255, 180, 180));
        assert_eq!(config.waveform_color, Rgb888::new(0, 0, 0));
        assert_eq!(config.total_size, 4800);
        assert_eq!(config.start_column, 0);
        assert_eq!(config.column_spacing, 4800);
        assert_eq!(config.quarter(), 1200);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EcgConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_grid_counts_are_valid() {
        let config = EcgConfig { columns_per_row: 0, rows_per_column: 0, ..EcgConfig::default() };
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.has_grid());
    }

    #[test]
    fn test_minor_cells_zero_rejected() {
        let config = EcgConfig { minor_cells_per_major: 0, ..EcgConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::MinorCellsZero));
    }

    #[test]
    fn test_total_size_too_small_rejected() {
        let config = EcgConfig { total_size: 3, ..EcgConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::TotalSizeTooSmall { total_size: 3 }));

        let config = EcgConfig { total_size: 4, ..EcgConfig::default() };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.quarter(), 1);
    }

    #[test]
    fn test_column_starts_round_per_boundary() {
        let config = EcgConfig::default();
        assert_eq!([0, 1, 2, 3].map(|i| config.column_start(i)), [0, 1200, 2400, 3600]);
        assert_eq!(config.samples_per_column(), 1200.0);

        let config = EcgConfig { total_size: 4802, ..EcgConfig::default() };
        assert_eq!([0, 1, 2, 3].map(|i| config.column_start(i)), [0, 1200, 2401, 3601]);
        assert_eq!(config.quarter(), 1200);
        assert_eq!(config.samples_per_column(), 1200.5);

        let config = EcgConfig { total_size: u32::MAX, ..EcgConfig::default() };
        assert_eq!(config.column_start(3), 3_221_225_471);
    }

    #[test]
    fn test_scale_mode_codes() {
        assert_eq!(ScaleMode::try_from(0), Ok(ScaleMode::Normal));
        assert_eq!(ScaleMode::try_from(1), Ok(ScaleMode::ScaleCenter));
        assert_eq!(ScaleMode::try_from(7), Err(ConfigError::UnknownScaleMode(7)));
    }

    #[test]
    fn test_scale_mode_toggle() {
        assert_eq!(ScaleMode::Normal.toggle(), ScaleMode::ScaleCenter);
        assert_eq!(ScaleMode::ScaleCenter.toggle(), ScaleMode::Normal);
    }
}
