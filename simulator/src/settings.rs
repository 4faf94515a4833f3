//! Viewer settings loaded from a TOML file.
//!
//! Every key is optional. Missing `[chart]` keys fall back to
//! [`EcgConfig::default`], the rest to the viewer defaults below.
//!
//! ```toml
//! [chart]
//! scale_mode = "scale-center"
//! columns_per_row = 26
//! rows_per_column = 38
//! minor_grid_color = [255, 180, 180]
//! start_column = 3
//! column_spacing = 6
//!
//! [padding]
//! bottom = 30
//!
//! [window]
//! width = 540
//! height = 420
//! scale = 2
//! ```
//!
//! `simulator/strip.toml` is a ready-made file that fits all four columns on
//! the default 26-cell strip.

use std::fs;
use std::path::{Path, PathBuf};

use ecg_strip::{ConfigError, EcgConfig, Frame, Padding, ScaleMode};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),
    #[error("invalid chart configuration")]
    Invalid(#[from] ConfigError),
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleModeSetting {
    #[default]
    Normal,
    ScaleCenter,
}

impl From<ScaleModeSetting> for ScaleMode {
    fn from(mode: ScaleModeSetting) -> Self {
        match mode {
            ScaleModeSetting::Normal => Self::Normal,
            ScaleModeSetting::ScaleCenter => Self::ScaleCenter,
        }
    }
}

impl From<ScaleMode> for ScaleModeSetting {
    fn from(mode: ScaleMode) -> Self {
        match mode {
            ScaleMode::Normal => Self::Normal,
            ScaleMode::ScaleCenter => Self::ScaleCenter,
        }
    }
}

/// `[chart]` table. Colors are `[r, g, b]`.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub scale_mode: ScaleModeSetting,
    pub columns_per_row: u32,
    pub rows_per_column: u32,
    pub minor_cells_per_major: u32,
    pub show_minor_grid: bool,
    pub background_color: [u8; 3],
    pub major_grid_color: [u8; 3],
    pub minor_grid_color: [u8; 3],
    pub waveform_color: [u8; 3],
    pub total_size: u32,
    pub start_column: i32,
    pub column_spacing: i32,
}

impl Default for ChartSettings {
    fn default() -> Self { Self::from(&EcgConfig::default()) }
}

impl From<&EcgConfig> for ChartSettings {
    fn from(config: &EcgConfig) -> Self {
        Self {
            scale_mode: config.scale_mode.into(),
            columns_per_row: config.columns_per_row,
            rows_per_column: config.rows_per_column,
            minor_cells_per_major: config.minor_cells_per_major,
            show_minor_grid: config.show_minor_grid,
            background_color: rgb_array(config.background_color),
            major_grid_color: rgb_array(config.major_grid_color),
            minor_grid_color: rgb_array(config.minor_grid_color),
            waveform_color: rgb_array(config.waveform_color),
            total_size: config.total_size,
            start_column: config.start_column,
            column_spacing: config.column_spacing,
        }
    }
}

/// `[padding]` table, in surface pixels.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingSettings {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for PaddingSettings {
    // Bottom strip leaves room for the caption line.
    fn default() -> Self { Self { left: 10, top: 10, right: 10, bottom: 30 } }
}

/// `[window]` table.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    /// Integer pixel scale of the simulator window.
    pub scale: u32,
}

impl Default for WindowSettings {
    fn default() -> Self { Self { width: 540, height: 420, scale: 2 } }
}

#[derive(Deserialize, Clone, PartialEq, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub chart: ChartSettings,
    pub padding: PaddingSettings,
    pub window: WindowSettings,
}

impl Settings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&text)
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self, SettingsError> { Ok(toml::from_str(text)?) }

    /// Chart configuration, validated.
    pub fn chart_config(&self) -> Result<EcgConfig, SettingsError> {
        let chart = &self.chart;
        let config = EcgConfig {
            scale_mode: chart.scale_mode.into(),
            columns_per_row: chart.columns_per_row,
            rows_per_column: chart.rows_per_column,
            minor_cells_per_major: chart.minor_cells_per_major,
            show_minor_grid: chart.show_minor_grid,
            background_color: rgb(chart.background_color),
            major_grid_color: rgb(chart.major_grid_color),
            minor_grid_color: rgb(chart.minor_grid_color),
            waveform_color: rgb(chart.waveform_color),
            total_size: chart.total_size,
            start_column: chart.start_column,
            column_spacing: chart.column_spacing,
        };
        config.validate()?;
        Ok(config)
    }

    /// Surface boundary for the simulator window.
    pub const fn frame(&self) -> Frame {
        let p = self.padding;
        Frame::new(self.window.width, self.window.height, Padding::new(p.left, p.top, p.right, p.bottom))
    }
}

const fn rgb([r, g, b]: [u8; 3]) -> Rgb888 { Rgb888::new(r, g, b) }

fn rgb_array(color: Rgb888) -> [u8; 3] { [color.r(), color.g(), color.b()] }

// =============================================================================
// Tests
// =============================================================================
