//! Numeric primitives — interpolation, clamping, range remapping, curves, and angles.
//!
//! Waveforms, geometry helpers, and the oscillator compose from these.

pub mod angle;
pub mod curve;
pub mod random;
pub mod range;

pub use angle::{angle_from_arc_length, arc_length, to_degrees, to_radians};
pub use curve::{normalized_gaussian, smooth_step};
pub use random::random_float;
pub use range::{
    clamp, clamp_to_unit, lerp, normalize, normalize_with_dead_zones, remap, remap_unit,
};
