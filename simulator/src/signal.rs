//! Demo sample generators.
//!
//! Samples are raw device units: 42.5 units per millivolt, i.e. 4.25 units per
//! 1 mm minor cell at 10 mm/mV.

use clap::ValueEnum;
use rand::Rng;

/// Raw units per millivolt at standard calibration.
pub const UNITS_PER_MV: f32 = 42.5;

/// Samples per second. One 38-cell column (7.6 s at 25 mm/s) holds 1200 samples.
pub const SAMPLE_RATE_HZ: f32 = 1200.0 / 7.6;

/// Heart rate of the synthetic beat train.
pub const HEART_RATE_BPM: f32 = 72.0;

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Pattern {
    /// Uniform noise in `[0, 30)` units.
    Random,
    /// PQRST beats with a little noise.
    #[default]
    Synthetic,
}

impl Pattern {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "RANDOM",
            Self::Synthetic => "SYNTHETIC",
        }
    }
}

/// Generate `len` samples of the given pattern.
pub fn generate<R: Rng>(
    pattern: Pattern,
    len: usize,
    rng: &mut R,
) -> Vec<i32> {
    match pattern {
        Pattern::Random => random_samples(len, rng),
        Pattern::Synthetic => synthetic_beats(len, rng),
    }
}

fn random_samples<R: Rng>(
    len: usize,
    rng: &mut R,
) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..30)).collect()
}

/// One wave of the complex: amplitude (mV), center and width (fraction of a beat).
struct Wave {
    amplitude_mv: f32,
    center: f32,
    width: f32,
}

const PQRST: [Wave; 5] = [
    Wave { amplitude_mv: 0.15, center: 0.20, width: 0.025 },
    Wave { amplitude_mv: -0.10, center: 0.36, width: 0.008 },
    Wave { amplitude_mv: 1.20, center: 0.40, width: 0.010 },
    Wave { amplitude_mv: -0.30, center: 0.44, width: 0.010 },
    Wave { amplitude_mv: 0.30, center: 0.65, width: 0.040 },
];

fn synthetic_beats<R: Rng>(
    len: usize,
    rng: &mut R,
) -> Vec<i32> {
    let beat_samples = SAMPLE_RATE_HZ * 60.0 / HEART_RATE_BPM;
    (0..len)
        .map(|i| {
            let phase = (i as f32 % beat_samples) / beat_samples;
            let mv: f32 = PQRST
                .iter()
                .map(|w| {
                    let d = (phase - w.center) / w.width;
                    w.amplitude_mv * (-0.5 * d * d).exp()
                })
                .sum();
            (mv * UNITS_PER_MV).round() as i32 + rng.gen_range(-1..=1)
        })
        .collect()
}
