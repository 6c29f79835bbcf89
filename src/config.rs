//! Oscillator settings — YAML load/save, with ~/.beatwave/oscillator.yaml as the default home.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::oscillator::OscillatorConfig;
use crate::waveform::{create_waveform, WaveformKind, WaveformParams};

/// Persistent oscillator settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorSettings {
    pub bpm: f64,
    pub waveform: WaveformKind,
    pub params: WaveformParams,
    pub offset_ms: f64,
    /// Radians.
    pub phase_shift: f64,
}

const DEFAULT_BPM: f64 = 120.0;

impl Default for OscillatorSettings {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            waveform: WaveformKind::default(),
            params: WaveformParams::default(),
            offset_ms: 0.0,
            phase_shift: 0.0,
        }
    }
}

/// Default settings path.
pub fn default_settings_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".beatwave");
    path.push("oscillator.yaml");
    path
}

impl OscillatorSettings {
    /// Load from the default path.
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        Self::load_from(&default_settings_path()).ok()
    }

    /// Load settings from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save settings as YAML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        std::fs::write(path, yaml)
    }

    /// Oscillator config at time zero built from these settings.
    pub fn to_config(&self) -> OscillatorConfig {
        OscillatorConfig::new(self.bpm, create_waveform(self.waveform, &self.params))
            .with_offset_ms(self.offset_ms)
            .with_phase_shift(self.phase_shift)
    }
}
