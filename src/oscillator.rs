//! Tempo-synced oscillator — maps wall-clock time to a waveform sample.
//!
//! The oscillator owns no clock. The caller advances `current_time_ms` (for
//! example once per animation frame) and re-evaluates; identical inputs
//! always give identical output.
//!
//! Position within the beat is computed with floor-mod, the same
//! convention [`wrap_phase`] uses, so negative times wrap forward.

use std::f64::consts::TAU;
use std::fmt;

use crate::error::{Error, Result};
use crate::waveform::{wrap_phase, WaveformFn};

/// Milliseconds in one minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Inputs to one oscillator evaluation.
///
/// A plain record: fields may be changed freely between evaluations, and
/// the BPM is only validated when evaluated.
#[derive(Clone)]
pub struct OscillatorConfig {
    pub current_time_ms: f64,
    pub bpm: f64,
    pub waveform: WaveformFn,
    /// Added to `current_time_ms` before the beat position is taken.
    pub offset_ms: f64,
    /// Phase shift in radians; a full turn is one beat.
    pub phase_shift: f64,
}

impl OscillatorConfig {
    /// A config at time zero with no offset or phase shift.
    pub fn new(bpm: f64, waveform: WaveformFn) -> Self {
        Self {
            current_time_ms: 0.0,
            bpm,
            waveform,
            offset_ms: 0.0,
            phase_shift: 0.0,
        }
    }

    pub fn with_offset_ms(mut self, offset_ms: f64) -> Self {
        self.offset_ms = offset_ms;
        self
    }

    pub fn with_phase_shift(mut self, radians: f64) -> Self {
        self.phase_shift = radians;
        self
    }

    /// Copy of this config positioned at `current_time_ms`.
    pub fn at(&self, current_time_ms: f64) -> Self {
        Self {
            current_time_ms,
            ..self.clone()
        }
    }

    /// Evaluate the oscillator at the configured time.
    pub fn evaluate(&self) -> Result<f64> {
        evaluate(self)
    }

    /// Evaluate at `count` times starting at `start_ms`, `step_ms` apart.
    ///
    /// Returns `(time_ms, value)` pairs.
    pub fn sample_series(
        &self,
        start_ms: f64,
        step_ms: f64,
        count: usize,
    ) -> Result<Vec<(f64, f64)>> {
        let ms_per_beat = ms_per_beat(self.bpm)?;
        Ok((0..count)
            .map(|i| {
                let t = start_ms + i as f64 * step_ms;
                let position = cycle_position(t + self.offset_ms, ms_per_beat, self.phase_shift);
                (t, (self.waveform)(position))
            })
            .collect())
    }
}

impl fmt::Debug for OscillatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OscillatorConfig")
            .field("current_time_ms", &self.current_time_ms)
            .field("bpm", &self.bpm)
            .field("offset_ms", &self.offset_ms)
            .field("phase_shift", &self.phase_shift)
            .finish_non_exhaustive()
    }
}

/// Length of one beat in milliseconds.
///
/// Fails with [`Error::InvalidBpm`] unless `bpm` is positive and finite and
/// the beat length is representable (subnormal tempos overflow).
pub fn ms_per_beat(bpm: f64) -> Result<f64> {
    if !(bpm.is_finite() && bpm > 0.0) {
        return Err(Error::InvalidBpm { bpm });
    }
    let ms = MS_PER_MINUTE / bpm;
    if !ms.is_finite() {
        return Err(Error::InvalidBpm { bpm });
    }
    Ok(ms)
}

/// Fractional position within the beat, shifted by `phase_shift` radians.
fn cycle_position(time_ms: f64, ms_per_beat: f64, phase_shift: f64) -> f64 {
    let raw = time_ms.rem_euclid(ms_per_beat) / ms_per_beat;
    wrap_phase(raw + phase_shift / TAU)
}

/// Evaluate the oscillator described by `config`.
///
/// 1. `ms_per_beat = 60000 / bpm`
/// 2. `raw = ((time + offset) mod ms_per_beat) / ms_per_beat`
/// 3. `position = (raw + phase_shift / 2π) mod 1`
/// 4. `waveform(position)`
pub fn evaluate(config: &OscillatorConfig) -> Result<f64> {
    let ms_per_beat = ms_per_beat(config.bpm)?;
    let position = cycle_position(
        config.current_time_ms + config.offset_ms,
        ms_per_beat,
        config.phase_shift,
    );
    Ok((config.waveform)(position))
}
