//! Waveforms — periodic shapes over a unit phase, their names, and bound parameters.
//!
//! A waveform is any `Fn(f64) -> f64` whose output stays in `[0, 1]`. The
//! closed set of built-in shapes is named by [`WaveformKind`]; a [`Waveform`]
//! pairs a kind with resolved parameters and can be turned into a shareable
//! [`WaveformFn`] for the oscillator.

pub mod factory;
pub mod shapes;

pub use factory::{create_waveform, create_waveform_named, WaveformParams};
pub use shapes::{
    bounce, bounce_with, circular, elastic, elastic_with, exponential, exponential_with, noise,
    noise_with, pulse, pulse_with, sawtooth, sine, square, square_with, stepped, stepped_with,
    triangle, wrap_phase,
};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A shareable single-argument waveform.
pub type WaveformFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Tags for the built-in waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    #[default]
    Sine,
    Triangle,
    Sawtooth,
    Square,
    Bounce,
    Pulse,
    Elastic,
    Noise,
    Stepped,
    Circular,
    Exponential,
}

impl WaveformKind {
    /// Every kind, in declaration order.
    pub const ALL: [WaveformKind; 11] = [
        WaveformKind::Sine,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
        WaveformKind::Square,
        WaveformKind::Bounce,
        WaveformKind::Pulse,
        WaveformKind::Elastic,
        WaveformKind::Noise,
        WaveformKind::Stepped,
        WaveformKind::Circular,
        WaveformKind::Exponential,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Square => "square",
            WaveformKind::Bounce => "bounce",
            WaveformKind::Pulse => "pulse",
            WaveformKind::Elastic => "elastic",
            WaveformKind::Noise => "noise",
            WaveformKind::Stepped => "stepped",
            WaveformKind::Circular => "circular",
            WaveformKind::Exponential => "exponential",
        }
    }

    /// Whether this kind takes any parameters.
    pub fn is_parameterized(self) -> bool {
        !matches!(
            self,
            WaveformKind::Sine
                | WaveformKind::Triangle
                | WaveformKind::Sawtooth
                | WaveformKind::Circular
        )
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        WaveformKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidVariant { name: s.to_string() })
    }
}

/// A waveform kind together with its resolved parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Square { duty_cycle: f64 },
    Bounce { bounce_count: u32 },
    Pulse { width: f64 },
    Elastic { amplitude: f64, frequency: f64 },
    Noise { seed: f64 },
    Stepped { step_count: u32 },
    Circular,
    Exponential { base: f64 },
}

impl Waveform {
    /// Evaluate the waveform at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        match *self {
            Waveform::Sine => sine(x),
            Waveform::Triangle => triangle(x),
            Waveform::Sawtooth => sawtooth(x),
            Waveform::Square { duty_cycle } => square(x, duty_cycle),
            Waveform::Bounce { bounce_count } => bounce(x, bounce_count),
            Waveform::Pulse { width } => pulse(x, width),
            Waveform::Elastic {
                amplitude,
                frequency,
            } => elastic(x, amplitude, frequency),
            Waveform::Noise { seed } => noise(x, seed),
            Waveform::Stepped { step_count } => stepped(x, step_count),
            Waveform::Circular => circular(x),
            Waveform::Exponential { base } => exponential(x, base),
        }
    }

    pub fn kind(&self) -> WaveformKind {
        match self {
            Waveform::Sine => WaveformKind::Sine,
            Waveform::Triangle => WaveformKind::Triangle,
            Waveform::Sawtooth => WaveformKind::Sawtooth,
            Waveform::Square { .. } => WaveformKind::Square,
            Waveform::Bounce { .. } => WaveformKind::Bounce,
            Waveform::Pulse { .. } => WaveformKind::Pulse,
            Waveform::Elastic { .. } => WaveformKind::Elastic,
            Waveform::Noise { .. } => WaveformKind::Noise,
            Waveform::Stepped { .. } => WaveformKind::Stepped,
            Waveform::Circular => WaveformKind::Circular,
            Waveform::Exponential { .. } => WaveformKind::Exponential,
        }
    }

    /// Box this waveform as a shareable function.
    ///
    /// Unparameterized kinds hand back the bare shape function.
    pub fn into_fn(self) -> WaveformFn {
        match self {
            Waveform::Sine => Arc::new(sine),
            Waveform::Triangle => Arc::new(triangle),
            Waveform::Sawtooth => Arc::new(sawtooth),
            Waveform::Circular => Arc::new(circular),
            bound => Arc::new(move |x| bound.sample(x)),
        }
    }
}
