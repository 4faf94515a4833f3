//! Owned chart state with redraw tracking.
//!
//! [`EcgView`] holds the two inputs that survive between frames (a validated
//! configuration and the sample buffer) and a pending-redraw flag. Geometry is
//! never stored; every [`EcgView::draw`] recomputes it.
//!
//! # Update Strategy
//!
//! | Event | Effect |
//! |-------|--------|
//! | `set_samples` | Buffer replaced wholesale, redraw scheduled |
//! | `set_config` | Validated, then applied and redraw scheduled |
//! | `invalidate` | Redraw scheduled (e.g. surface resized) |
//! | `draw` | Frame rendered, pending flag cleared |
//!
//! The previous buffer is dropped on `set_samples`; nothing keeps a reference
//! to it.

use alloc::vec::Vec;

use crate::config::{ConfigError, EcgConfig};
use crate::layout::Frame;
use crate::render::{RenderSummary, render};
use crate::surface::Canvas;

/// Configuration + sample buffer for one chart.
#[derive(Clone, Debug)]
pub struct EcgView {
    config: EcgConfig,
    samples: Vec<i32>,
    redraw_pending: bool,
}

impl EcgView {
    /// Create a view with an empty buffer. The first frame is always drawn.
    pub fn new(config: EcgConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, samples: Vec::new(), redraw_pending: true })
    }

    #[inline]
    pub const fn config(&self) -> &EcgConfig { &self.config }

    /// Samples in time order.
    #[inline]
    pub fn samples(&self) -> &[i32] { &self.samples }

    /// Replace the configuration. An invalid configuration leaves the view unchanged.
    pub fn set_config(
        &mut self,
        config: EcgConfig,
    ) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            log::debug!("configuration rejected: {err}");
            return Err(err);
        }
        self.config = config;
        self.redraw_pending = true;
        Ok(())
    }

    /// Replace the whole sample buffer and schedule a redraw.
    pub fn set_samples(
        &mut self,
        samples: Vec<i32>,
    ) {
        self.samples = samples;
        self.redraw_pending = true;
    }

    /// Force a redraw on the next frame.
    #[inline]
    pub fn invalidate(&mut self) { self.redraw_pending = true; }

    /// Check if the chart changed since the last draw.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.redraw_pending }

    /// Render a frame. The pending flag is cleared only if rendering succeeds.
    pub fn draw<C>(
        &mut self,
        frame: &Frame,
        canvas: &mut C,
    ) -> Result<RenderSummary, C::Error>
    where
        C: Canvas,
    {
        let summary = render(canvas, frame, &self.config, &self.samples)?;
        self.redraw_pending = false;
        Ok(summary)
    }
}

impl Default for EcgView {
    fn default() -> Self { Self { config: EcgConfig::default(), samples: Vec::new(), redraw_pending: true } }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleMode;
    use crate::draw_list::DrawList;
    use crate::layout::Padding;

    const FRAME: Frame = Frame::new(520, 380, Padding::ZERO);

    #[test]
    fn test_new_view() {
        let view = EcgView::new(EcgConfig::default()).unwrap();
        assert!(view.needs_redraw());
        assert!(view.samples().is_empty());
        assert_eq!(view.config(), &EcgConfig::default());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EcgConfig { total_size: 2, ..EcgConfig::default() };
        assert_eq!(EcgView::new(config).unwrap_err(), ConfigError::TotalSizeTooSmall { total_size: 2 });
    }

    #[test]
    fn test_draw_clears_pending() {
        let mut view = EcgView::default();
        view.draw(&FRAME, &mut DrawList::new()).unwrap();
        assert!(!view.needs_redraw());

        view.invalidate();
        assert!(view.needs_redraw());
    }

    #[test]
    fn test_set_samples_replaces_and_schedules() {
        let mut view = EcgView::default();
        view.set_samples(vec![1, 2, 3]);
        view.draw(&FRAME, &mut DrawList::new()).unwrap();

        view.set_samples(vec![0; 4800]);
        assert!(view.needs_redraw());
        assert_eq!(view.samples().len(), 4800);

        let summary = view.draw(&FRAME, &mut DrawList::new()).unwrap();
        assert_eq!(summary.segments, 4799);
    }

    #[test]
    fn test_set_config() {
        let mut view = EcgView::default();
        view.draw(&FRAME, &mut DrawList::new()).unwrap();

        let config = EcgConfig { scale_mode: ScaleMode::ScaleCenter, ..EcgConfig::default() };
        view.set_config(config).unwrap();
        assert!(view.needs_redraw());
        assert_eq!(view.config().scale_mode, ScaleMode::ScaleCenter);
    }

    #[test]
    fn test_set_config_invalid_keeps_previous() {
        let mut view = EcgView::default();
        view.draw(&FRAME, &mut DrawList::new()).unwrap();

        let config = EcgConfig { minor_cells_per_major: 0, ..EcgConfig::default() };
        assert_eq!(view.set_config(config), Err(ConfigError::MinorCellsZero));
        assert_eq!(view.config(), &EcgConfig::default());
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_repeated_draws_identical() {
        let mut view = EcgView::default();
        view.set_samples((0..4800).map(|i| (i % 50) - 25).collect());

        let mut first = DrawList::new();
        let mut second = DrawList::new();
        view.draw(&FRAME, &mut first).unwrap();
        view.draw(&FRAME, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
