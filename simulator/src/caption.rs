//! Caption line drawn in the bottom padding under the strip.

use core::fmt::Write;
use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use profont::PROFONT_10_POINT;

use crate::timing::STATUS_DURATION;

const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_10_POINT, Rgb565::BLACK);
const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_10_POINT, Rgb565::RED);

/// Standard paper calibration shown on the left of the caption.
const CALIBRATION_LABEL: &str = "25 mm/s  10 mm/mV";

const KEY_HELP: &str = "R:data S:scale M:minor";

/// Short-lived status message shown after a key press.
pub struct Status {
    text: String<32>,
    shown_at: Instant,
}

impl Status {
    pub fn new(label: &str) -> Self {
        let mut text: String<32> = String::new();
        // Overlong labels are truncated by the fixed capacity
        for c in label.chars() {
            if text.push(c).is_err() {
                break;
            }
        }
        Self { text, shown_at: Instant::now() }
    }

    pub fn is_expired(&self) -> bool { self.shown_at.elapsed() >= STATUS_DURATION }

    pub fn as_str(&self) -> &str { &self.text }
}

/// Draw the caption at `y`, starting from `x`.
pub fn draw_caption<D>(
    display: &mut D,
    x: i32,
    y: i32,
    sample_count: usize,
    status: Option<&Status>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut line: String<64> = String::new();
    let _ = write!(line, "{CALIBRATION_LABEL}  n={sample_count}");
    let end = Text::with_baseline(&line, Point::new(x, y), CAPTION_STYLE, Baseline::Top)
        .draw(display)
        .unwrap_or(Point::new(x, y));

    let (text, style) = match status {
        Some(status) => (status.as_str(), STATUS_STYLE),
        None => (KEY_HELP, CAPTION_STYLE),
    };
    Text::with_baseline(text, Point::new(end.x + 12, y), style, Baseline::Top)
        .draw(display)
        .ok();
}
