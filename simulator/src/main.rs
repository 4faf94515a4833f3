//! ECG strip viewer for desktop.
//!
//! Renders the strip into an `embedded-graphics-simulator` window. The chart is
//! only redrawn when its inputs change (new samples, new configuration, status
//! message expiry).
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | R | Regenerate the sample buffer |
//! | S | Toggle normal / scale-center |
//! | M | Toggle the minor grid |
//!
//! The chart defaults place the baselines of columns 2 to 4 far off-screen.
//! Run with `--config strip.toml` from `simulator/` to see all four columns.
//!
//! Set `RUST_LOG=debug` for per-frame render summaries.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod caption;
mod settings;
mod signal;
mod timing;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use ecg_strip::{DrawTargetCanvas, EcgView};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::caption::{Status, draw_caption};
use crate::settings::Settings;
use crate::signal::{Pattern, generate};
use crate::timing::FRAME_TIME;

/// Gap between the bottom of the strip area and the caption line.
const CAPTION_GAP: i32 = 8;

#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "ECG strip viewer", long_about = None)]
struct Cli {
    /// TOML settings file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sample data to generate
    #[arg(long, value_enum, default_value_t = Pattern::Synthetic)]
    pattern: Pattern,

    /// Number of samples (defaults to the chart's total size)
    #[arg(long)]
    samples: Option<usize>,

    /// Seed for reproducible sample data
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => {
            let settings = Settings::load(path).with_context(|| format!("loading {}", path.display()))?;
            info!("Loaded settings from {}", path.display());
            settings
        }
        None => Settings::default(),
    };
    let config = settings.chart_config()?;
    let frame = settings.frame();
    let sample_count = cli.samples.unwrap_or(config.total_size as usize);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut view = EcgView::new(config)?;
    view.set_samples(generate(cli.pattern, sample_count, &mut rng));
    info!(
        "{}x{} surface, {} {} samples, {}",
        frame.width,
        frame.height,
        sample_count,
        cli.pattern.label(),
        config.scale_mode.label()
    );

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(frame.width, frame.height));
    let output_settings = OutputSettingsBuilder::new().scale(settings.window.scale.max(1)).build();
    let mut window = Window::new("ECG Strip", &output_settings);

    let caption_x = frame.padding.left as i32;
    let caption_y = frame.height.saturating_sub(frame.padding.bottom) as i32 + CAPTION_GAP;
    let mut status: Option<Status> = None;

    loop {
        let frame_start = Instant::now();

        if status.as_ref().is_some_and(Status::is_expired) {
            status = None;
            view.invalidate();
        }

        if view.needs_redraw() {
            let summary = view.draw(&frame, &mut DrawTargetCanvas::new(&mut display))?;
            debug!("{} gridlines, {} segments", summary.grid_lines, summary.segments);
            draw_caption(&mut display, caption_x, caption_y, view.samples().len(), status.as_ref());
        }

        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::R => {
                            view.set_samples(generate(cli.pattern, sample_count, &mut rng));
                            status = Some(Status::new("NEW DATA"));
                            info!("Regenerated {sample_count} samples");
                        }
                        Keycode::S => {
                            let mut config = *view.config();
                            config.scale_mode = config.scale_mode.toggle();
                            view.set_config(config)?;
                            status = Some(Status::new(config.scale_mode.label()));
                            info!("Scale mode: {}", config.scale_mode.label());
                        }
                        Keycode::M => {
                            let mut config = *view.config();
                            config.show_minor_grid = !config.show_minor_grid;
                            view.set_config(config)?;
                            status = Some(Status::new(if config.show_minor_grid { "MINOR GRID ON" } else { "MINOR GRID OFF" }));
                            info!("Minor grid: {}", if config.show_minor_grid { "ON" } else { "OFF" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
