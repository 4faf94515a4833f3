//! Calibrated ECG strip renderer.
//!
//! Draws an electrocardiogram strip (ECG paper grid plus four side-by-side
//! waveform columns) onto any drawing surface. The crate is platform-agnostic
//! and works with every `embedded_graphics::DrawTarget` whose color converts
//! from [`Rgb888`](embedded_graphics::pixelcolor::Rgb888):
//!
//! - [`colors`]: ECG paper color constants
//! - [`config`]: Chart configuration, defaults and validation
//! - [`layout`]: Aspect-locked drawing region and grid pitch
//! - [`surface`]: The [`Canvas`] capability and the `DrawTarget` adapter
//! - [`draw_list`]: Retained-mode recording backend
//! - [`grid`]: Major/minor gridlines
//! - [`waveform`]: Column partitioning and sample-to-pixel mapping
//! - [`render`]: The single drawing pass
//! - [`view`]: Owned configuration + sample buffer with redraw tracking
//!
//! # Usage
//!
//! ```ignore
//! let mut view = EcgView::new(EcgConfig::default())?;
//! view.set_samples(samples);
//!
//! if view.needs_redraw() {
//!     let frame = Frame::new(520, 380, Padding::uniform(10));
//!     view.draw(&frame, &mut DrawTargetCanvas::new(&mut display))?;
//! }
//! ```
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` (with `alloc` for the owned sample buffer) and can be
//! used on embedded targets.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod colors;
pub mod config;
pub mod draw_list;
pub mod grid;
pub mod layout;
pub mod render;
pub mod surface;
pub mod view;
pub mod waveform;

// Re-export commonly used items
pub use config::{ConfigError, EcgConfig, ScaleMode};
pub use draw_list::{DrawList, DrawOp};
pub use layout::{Frame, Layout, Padding, Transform};
pub use render::{RenderSummary, render};
pub use surface::{Canvas, DrawTargetCanvas, PointF};
pub use view::EcgView;
