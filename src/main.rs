//! Beatwave — print or live-render a tempo-synced oscillator in the terminal.
//!
//! Settings come from `--config` (or ~/.beatwave/oscillator.yaml), and any
//! command-line flag overrides the file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use beatwave::plot::{render_bar, render_trace};
use beatwave::{
    create_waveform, ms_per_beat, OscillatorConfig, OscillatorSettings, WaveformKind,
    WaveformParams,
};

const FRAME: Duration = Duration::from_millis(16);
const BAR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "beatwave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to ~/.beatwave/oscillator.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tempo in beats per minute
    #[arg(short, long)]
    bpm: Option<f64>,

    /// Waveform name (sine, triangle, sawtooth, square, bounce, pulse,
    /// elastic, noise, stepped, circular, exponential)
    #[arg(short, long)]
    waveform: Option<String>,

    #[arg(long)]
    duty_cycle: Option<f64>,

    #[arg(long)]
    bounce_count: Option<u32>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    amplitude: Option<f64>,

    #[arg(long)]
    frequency: Option<f64>,

    #[arg(long)]
    seed: Option<f64>,

    #[arg(long)]
    step_count: Option<u32>,

    #[arg(long)]
    base: Option<f64>,

    /// Time offset in milliseconds
    #[arg(long, allow_hyphen_values = true)]
    offset_ms: Option<f64>,

    /// Phase shift in radians
    #[arg(long, allow_hyphen_values = true)]
    phase_shift: Option<f64>,

    /// Number of samples to print
    #[arg(short, long, default_value_t = 16)]
    samples: usize,

    /// Milliseconds between samples (defaults to one beat split evenly)
    #[arg(long)]
    step_ms: Option<f64>,

    /// Redraw continuously against the wall clock until Ctrl-C
    #[arg(long)]
    live: bool,
}

impl Cli {
    /// Overlay command-line values onto file settings.
    fn apply_overrides(&self, settings: &mut OscillatorSettings) -> beatwave::Result<()> {
        if let Some(bpm) = self.bpm {
            settings.bpm = bpm;
        }
        if let Some(name) = &self.waveform {
            settings.waveform = name.parse::<WaveformKind>()?;
        }
        if let Some(offset) = self.offset_ms {
            settings.offset_ms = offset;
        }
        if let Some(shift) = self.phase_shift {
            settings.phase_shift = shift;
        }
        merge_params(&mut settings.params, &self.params());
        Ok(())
    }

    fn params(&self) -> WaveformParams {
        WaveformParams {
            duty_cycle: self.duty_cycle,
            bounce_count: self.bounce_count,
            width: self.width,
            amplitude: self.amplitude,
            frequency: self.frequency,
            seed: self.seed,
            step_count: self.step_count,
            base: self.base,
        }
    }
}

fn merge_params(into: &mut WaveformParams, over: &WaveformParams) {
    into.duty_cycle = over.duty_cycle.or(into.duty_cycle);
    into.bounce_count = over.bounce_count.or(into.bounce_count);
    into.width = over.width.or(into.width);
    into.amplitude = over.amplitude.or(into.amplitude);
    into.frequency = over.frequency.or(into.frequency);
    into.seed = over.seed.or(into.seed);
    into.step_count = over.step_count.or(into.step_count);
    into.base = over.base.or(into.base);
}

fn load_settings(cli: &Cli) -> Result<OscillatorSettings> {
    let mut settings = match &cli.config {
        Some(path) => OscillatorSettings::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => OscillatorSettings::load().unwrap_or_default(),
    };
    cli.apply_overrides(&mut settings)?;
    Ok(settings)
}

fn print_trace(cli: &Cli, settings: &OscillatorSettings) -> Result<()> {
    let beat = ms_per_beat(settings.bpm)?;
    let step = cli
        .step_ms
        .unwrap_or(beat / cli.samples.max(1) as f64);
    let series = settings.to_config().sample_series(0.0, step, cli.samples)?;
    for line in render_trace(&series, BAR_WIDTH) {
        println!("{line}");
    }
    Ok(())
}

/// Sawtooth at the same tempo with no offset or shift: raw beat progress.
fn beat_reference(config: &OscillatorConfig) -> OscillatorConfig {
    OscillatorConfig::new(
        config.bpm,
        create_waveform(WaveformKind::Sawtooth, &WaveformParams::default()),
    )
}

fn run_live(settings: &OscillatorSettings) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let config = settings.to_config();
    let reference = beat_reference(&config);

    println!("press Ctrl-C to stop");
    let mut stdout = io::stdout();
    let start = Instant::now();
    while running.load(Ordering::SeqCst) {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        let value = config.at(now_ms).evaluate()?;
        let beat_pos = reference.at(now_ms).evaluate()?;
        let line = format!(
            "{value:>6.3} {}  beat {}",
            render_bar(value, BAR_WIDTH),
            render_bar(beat_pos, BAR_WIDTH / 4)
        );
        execute!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        thread::sleep(FRAME);
    }
    writeln!(stdout)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    println!(
        "beatwave v{}: {} at {} BPM",
        env!("CARGO_PKG_VERSION"),
        settings.waveform,
        settings.bpm
    );
    if cli.live {
        run_live(&settings)
    } else {
        print_trace(cli, &settings)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_file_settings() {
        let cli = Cli::parse_from([
            "beatwave",
            "--bpm",
            "90",
            "--waveform",
            "square",
            "--duty-cycle",
            "0.7",
        ]);
        let mut settings = OscillatorSettings {
            params: WaveformParams {
                base: Some(3.0),
                duty_cycle: Some(0.2),
                ..Default::default()
            },
            ..Default::default()
        };
        cli.apply_overrides(&mut settings).unwrap();
        assert_eq!(settings.bpm, 90.0);
        assert_eq!(settings.waveform, WaveformKind::Square);
        assert_eq!(settings.params.duty_cycle, Some(0.7));
        assert_eq!(settings.params.base, Some(3.0));
    }

    #[test]
    fn unknown_waveform_flag_is_an_error() {
        let cli = Cli::parse_from(["beatwave", "--waveform", "zigzag"]);
        let mut settings = OscillatorSettings::default();
        assert!(matches!(
            cli.apply_overrides(&mut settings),
            Err(beatwave::Error::InvalidVariant { .. })
        ));
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let cli = Cli::parse_from(["beatwave", "--config", "/nonexistent/beatwave.yaml"]);
        let err = load_settings(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/beatwave.yaml"));
    }

    #[test]
    fn beat_reference_ignores_offset_and_shift() {
        let settings = OscillatorSettings {
            bpm: 60.0,
            offset_ms: 250.0,
            phase_shift: 1.0,
            ..Default::default()
        };
        let reference = beat_reference(&settings.to_config());
        assert_eq!(reference.offset_ms, 0.0);
        assert_eq!(reference.phase_shift, 0.0);
        let progress = reference.at(250.0).evaluate().unwrap();
        assert!((progress - 0.25).abs() < 1e-12, "{progress}");
    }

    #[test]
    fn negative_offset_is_accepted() {
        let cli = Cli::parse_from(["beatwave", "--offset-ms", "-250"]);
        assert_eq!(cli.offset_ms, Some(-250.0));
    }
}
