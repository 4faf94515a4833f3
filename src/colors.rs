//! Color constants for ECG paper.
//!
//! Colors are stored as `Rgb888` so the configuration stays independent of the
//! display's native format. Draw targets with a narrower format (for example
//! `Rgb565` on SPI panels) convert at draw time via `From<Rgb888>`.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Paper background.
pub const PAPER_WHITE: Rgb888 = Rgb888::WHITE;

/// Major gridlines (one every 5 mm on standard paper).
pub const GRID_RED: Rgb888 = Rgb888::RED;

/// Waveform trace.
pub const TRACE_BLACK: Rgb888 = Rgb888::BLACK;

// =============================================================================
// Custom Colors
// =============================================================================

/// Minor gridlines. Light enough that the major grid and the trace stay
/// readable on top of it.
pub const GRID_PINK: Rgb888 = Rgb888::new(255, 180, 180);
