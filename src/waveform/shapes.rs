//! Periodic shape functions mapping any real input to `[0, 1]`.
//!
//! Every shape first reduces its input to a phase in `[0, 1)` with
//! [`wrap_phase`], so `f(x) == f(x + 1)` up to floating-point error.
//! Parameterized shapes take their knobs as extra arguments; the `*_with`
//! constructors bind those knobs and return a single-argument closure.

use std::f64::consts::PI;

/// Square: half the cycle high.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.5;
/// Bounce: humps per cycle.
pub const DEFAULT_BOUNCE_COUNT: u32 = 3;
/// Pulse: centered mid-cycle.
pub const DEFAULT_PULSE_WIDTH: f64 = 0.5;
/// Elastic: full-height swing.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Elastic: oscillations per cycle.
pub const DEFAULT_FREQUENCY: f64 = 3.0;
/// Noise: pattern seed.
pub const DEFAULT_SEED: f64 = 1.0;
/// Stepped: levels per cycle.
pub const DEFAULT_STEP_COUNT: u32 = 4;
/// Exponential: curve base.
pub const DEFAULT_BASE: f64 = 2.0;

/// Logistic steepness of the pulse edges.
const PULSE_STEEPNESS: f64 = 80.0;
/// Exponential decay rate of the elastic envelope.
const ELASTIC_DECAY: f64 = 3.0;
const NOISE_FREQUENCY: f64 = 4.9898;
const NOISE_GAIN: f64 = 9758.5453123;

/// Reduce `x` to its fractional cycle position in `[0, 1)`.
///
/// Uses floor-mod, so negative inputs wrap forward: `-0.25 -> 0.75`.
pub fn wrap_phase(x: f64) -> f64 {
    let phase = x.rem_euclid(1.0);
    // Tiny negative inputs round up to exactly 1.0.
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Sine wave shifted into `[0, 1]`, starting at the midpoint.
pub fn sine(x: f64) -> f64 {
    ((wrap_phase(x) * 2.0 * PI).sin() + 1.0) / 2.0
}

/// Rises from 0 to 1 over the first half cycle, falls back over the second.
pub fn triangle(x: f64) -> f64 {
    let phase = wrap_phase(x);
    if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 * (1.0 - phase)
    }
}

/// Linear ramp from 0 to 1 across each cycle.
pub fn sawtooth(x: f64) -> f64 {
    wrap_phase(x)
}

/// 1 for the first `duty_cycle` fraction of the cycle, 0 for the rest.
pub fn square(x: f64, duty_cycle: f64) -> f64 {
    if wrap_phase(x) < duty_cycle {
        1.0
    } else {
        0.0
    }
}

/// `bounce_count` rectified sine humps whose height decays linearly to 0.
pub fn bounce(x: f64, bounce_count: u32) -> f64 {
    let phase = wrap_phase(x);
    (phase * PI * bounce_count as f64).sin().abs() * (1.0 - phase)
}

/// Soft-edged pulse centered at `phase == width`.
pub fn pulse(x: f64, width: f64) -> f64 {
    let distance = (wrap_phase(x) - width).abs();
    1.0 / (1.0 + (-PULSE_STEEPNESS * (0.5 - distance)).exp())
}

/// Damped oscillation around 0.5.
///
/// A zero `amplitude` divides by zero and yields NaN.
pub fn elastic(x: f64, amplitude: f64, frequency: f64) -> f64 {
    let phase = wrap_phase(x);
    let oscillation = (2.0 * PI * phase * frequency).sin();
    let decay = (-phase * ELASTIC_DECAY).exp();
    (oscillation * amplitude * decay + amplitude) / (2.0 * amplitude)
}

/// Deterministic pseudo-random value in `[0, 1)` keyed by phase and `seed`.
pub fn noise(x: f64, seed: f64) -> f64 {
    let value = (wrap_phase(x) * NOISE_FREQUENCY * seed).sin() * NOISE_GAIN;
    fractional(value)
}

/// `v - floor(v)`, with the 1.0 that tiny negatives round to folded to 0.
fn fractional(v: f64) -> f64 {
    let f = v - v.floor();
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Quantizes the cycle into `step_count` evenly spaced levels from 0 to 1.
///
/// `step_count` must be at least 2; a single step divides by zero.
pub fn stepped(x: f64, step_count: u32) -> f64 {
    let steps = step_count as f64;
    (wrap_phase(x) * steps).floor() / (steps - 1.0)
}

/// Quarter-circle ease-in profile.
///
/// A nonzero input that wraps to phase 0 is treated as the end of the
/// previous cycle and returns 1.
pub fn circular(x: f64) -> f64 {
    let phase = wrap_phase(x);
    if phase == 0.0 && x != 0.0 {
        return 1.0;
    }
    1.0 - (1.0 - phase * phase).sqrt()
}

/// Exponential ramp normalized to `[0, 1]`.
///
/// Same cycle-end handling as [`circular`]. A `base` of 1 yields NaN.
pub fn exponential(x: f64, base: f64) -> f64 {
    let phase = wrap_phase(x);
    if phase == 0.0 && x != 0.0 {
        return 1.0;
    }
    (base.powf(phase) - 1.0) / (base - 1.0)
}

/// Square wave with `duty_cycle` bound.
pub fn square_with(duty_cycle: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| square(x, duty_cycle)
}

/// Bounce with `bounce_count` bound.
pub fn bounce_with(bounce_count: u32) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| bounce(x, bounce_count)
}

/// Pulse with `width` bound.
pub fn pulse_with(width: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| pulse(x, width)
}

/// Elastic with `amplitude` and `frequency` bound.
pub fn elastic_with(amplitude: f64, frequency: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| elastic(x, amplitude, frequency)
}

/// Noise with `seed` bound.
pub fn noise_with(seed: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| noise(x, seed)
}

/// Stepped with `step_count` bound.
pub fn stepped_with(step_count: u32) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| stepped(x, step_count)
}

/// Exponential with `base` bound.
pub fn exponential_with(base: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |x| exponential(x, base)
}
