//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` renderer crate cannot
//! depend on, so they live here.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a status message replaces the key help in the caption.
pub const STATUS_DURATION: Duration = Duration::from_secs(2);
