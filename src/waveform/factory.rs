//! Waveform factory — resolve optional parameters against defaults and bind them.

use serde::{Deserialize, Serialize};

use super::shapes::{
    DEFAULT_AMPLITUDE, DEFAULT_BASE, DEFAULT_BOUNCE_COUNT, DEFAULT_DUTY_CYCLE, DEFAULT_FREQUENCY,
    DEFAULT_PULSE_WIDTH, DEFAULT_SEED, DEFAULT_STEP_COUNT,
};
use super::{Waveform, WaveformFn, WaveformKind};
use crate::error::Result;

/// Optional knobs for the parameterized waveform kinds.
///
/// Each kind reads only its own fields and ignores the rest. Missing fields
/// fall back to their defaults one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformParams {
    /// Square: fraction of the cycle spent high.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<f64>,
    /// Bounce: number of humps per cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_count: Option<u32>,
    /// Pulse: phase at which the pulse is centered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Elastic: oscillation amplitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    /// Elastic: oscillations per cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Noise: pattern seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,
    /// Stepped: number of discrete levels (at least 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_count: Option<u32>,
    /// Exponential: base of the power curve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
}

impl Waveform {
    /// Bind `params` (with per-field defaults) to a waveform of the given kind.
    pub fn from_params(kind: WaveformKind, params: &WaveformParams) -> Self {
        match kind {
            WaveformKind::Sine => Waveform::Sine,
            WaveformKind::Triangle => Waveform::Triangle,
            WaveformKind::Sawtooth => Waveform::Sawtooth,
            WaveformKind::Circular => Waveform::Circular,
            WaveformKind::Square => Waveform::Square {
                duty_cycle: params.duty_cycle.unwrap_or(DEFAULT_DUTY_CYCLE),
            },
            WaveformKind::Bounce => Waveform::Bounce {
                bounce_count: params.bounce_count.unwrap_or(DEFAULT_BOUNCE_COUNT),
            },
            WaveformKind::Pulse => Waveform::Pulse {
                width: params.width.unwrap_or(DEFAULT_PULSE_WIDTH),
            },
            WaveformKind::Elastic => Waveform::Elastic {
                amplitude: params.amplitude.unwrap_or(DEFAULT_AMPLITUDE),
                frequency: params.frequency.unwrap_or(DEFAULT_FREQUENCY),
            },
            WaveformKind::Noise => Waveform::Noise {
                seed: params.seed.unwrap_or(DEFAULT_SEED),
            },
            WaveformKind::Stepped => Waveform::Stepped {
                step_count: params.step_count.unwrap_or(DEFAULT_STEP_COUNT),
            },
            WaveformKind::Exponential => Waveform::Exponential {
                base: params.base.unwrap_or(DEFAULT_BASE),
            },
        }
    }
}

/// Build a single-argument waveform function for `kind`.
pub fn create_waveform(kind: WaveformKind, params: &WaveformParams) -> WaveformFn {
    Waveform::from_params(kind, params).into_fn()
}

/// Like [`create_waveform`], but looks the kind up by name.
///
/// Unknown names fail with [`crate::Error::InvalidVariant`].
pub fn create_waveform_named(name: &str, params: &WaveformParams) -> Result<WaveformFn> {
    let kind: WaveformKind = name.parse()?;
    Ok(create_waveform(kind, params))
}
