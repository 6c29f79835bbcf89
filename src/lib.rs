//! Beatwave — tempo-synced oscillators, periodic waveforms, and small animation math helpers.
//!
//! An [`OscillatorConfig`] turns wall-clock time and a tempo into a position
//! within the current beat, then samples a waveform at that position. The
//! waveform set is closed ([`WaveformKind`]) and built through
//! [`create_waveform`]; any `Fn(f64) -> f64` works as well.

pub mod config;
pub mod easing;
pub mod error;
pub mod geom;
pub mod math;
pub mod oscillator;
pub mod plot;
pub mod structures;
pub mod waveform;

pub use config::OscillatorSettings;
pub use error::{Error, Result};
pub use oscillator::{evaluate, ms_per_beat, OscillatorConfig};
pub use waveform::{
    create_waveform, create_waveform_named, Waveform, WaveformFn, WaveformKind, WaveformParams,
};
