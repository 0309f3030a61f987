//! Warble - application state and audio wiring

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use warble_dsp::dsp::level::{linear_to_db, DB_FLOOR};
use warble_dsp::effects::{Vibrato, VibratoConfig};
use warble_dsp::meters::{MeterReadings, MeterTap, Ppm, MAX_METER_CHANNELS};
use warble_dsp::MAX_BLOCK_SIZE;

use crate::ui;

/// Vibrato settings for the demo chain. Classic vocal-range wobble.
const MOD_FREQ_HZ: f32 = 5.0;
const MAX_WIDTH_SEC: f32 = 0.005;
const MOD_AMP_SEC: f32 = 0.003;

/// Fallback tone generator, used when no capture device exists.
const GEN_SAMPLE_RATE: f32 = 48_000.0;
const GEN_CHANNELS: usize = 2;
const GEN_TONE_HZ: f64 = 220.0;
const GEN_BLOCK_LEN: usize = 512;

/// Main application: owns the UI side of the meter queue and keeps the
/// audio source alive.
pub struct App {
    readings: MeterReadings,
    peaks_db: Vec<f32>,
    info: SourceInfo,
    _source: Source,
    should_quit: bool,
}

/// Static facts about the audio source, for the header line.
pub struct SourceInfo {
    pub name: String,
    pub sample_rate: f32,
    pub num_channels: usize,
    pub attack_sec: f32,
    pub release_sec: f32,
}

/// Keeps the cpal stream or the generator thread running while the app
/// lives. Dropping a [`cpal::Stream`] stops capture.
enum Source {
    Input(#[allow(dead_code)] cpal::Stream),
    Generated {
        running: Arc<AtomicBool>,
        handle: Option<JoinHandle<()>>,
    },
}

impl App {
    /// Opens the default capture device; when no device is usable, falls
    /// back to an internally generated tone so the meters still move.
    pub fn start() -> EyreResult<Self> {
        let host = cpal::default_host();
        if let Some(device) = host.default_input_device() {
            match Self::from_input(&device) {
                Ok(app) => return Ok(app),
                Err(err) => warn!("capture device unusable ({err:#}), generating a tone"),
            }
        } else {
            info!("no default capture device, generating a tone");
        }
        Self::from_generator()
    }

    fn from_input(device: &cpal::Device) -> EyreResult<Self> {
        let config = device
            .default_input_config()
            .wrap_err("failed to fetch default input config")?;
        let sample_rate = config.sample_rate().0 as f32;
        let device_channels = config.channels() as usize;
        let num_channels = device_channels.min(MAX_METER_CHANNELS);

        let (mut chain, readings) = Chain::new(sample_rate, num_channels)?;

        let stream = device
            .build_input_stream(
                &config.into(),
                move |data: &[f32], _| {
                    let total_frames = data.len() / device_channels;
                    let mut frames_read = 0;
                    while frames_read < total_frames {
                        let frames = (total_frames - frames_read).min(MAX_BLOCK_SIZE);
                        for ch in 0..num_channels {
                            let dry = &mut chain.dry[ch][..frames];
                            for (i, slot) in dry.iter_mut().enumerate() {
                                *slot = data[(frames_read + i) * device_channels + ch];
                            }
                        }
                        chain.run_block(frames);
                        frames_read += frames;
                    }
                },
                move |err| eprintln!("Stream error: {err}"),
                None,
            )
            .wrap_err("failed to build input stream")?;
        stream.play().wrap_err("failed to start input stream")?;

        let name = device.name().unwrap_or_else(|_| "capture".into());
        Ok(Self::assemble(
            readings,
            SourceInfo::new(name, sample_rate, num_channels),
            Source::Input(stream),
        ))
    }

    fn from_generator() -> EyreResult<Self> {
        let (mut chain, readings) = Chain::new(GEN_SAMPLE_RATE, GEN_CHANNELS)?;

        let running = Arc::new(AtomicBool::new(true));
        let handle = thread::spawn({
            let running = running.clone();
            move || {
                let mut phase = 0.0f64;
                let step = GEN_TONE_HZ / f64::from(GEN_SAMPLE_RATE);
                let pace =
                    Duration::from_secs_f64(GEN_BLOCK_LEN as f64 / f64::from(GEN_SAMPLE_RATE));
                while running.load(Ordering::Relaxed) {
                    for i in 0..GEN_BLOCK_LEN {
                        let sample = (std::f64::consts::TAU * phase).sin() as f32 * 0.6;
                        phase = (phase + step).fract();
                        for channel in chain.dry.iter_mut() {
                            channel[i] = sample;
                        }
                    }
                    chain.run_block(GEN_BLOCK_LEN);
                    thread::sleep(pace);
                }
            }
        });

        let name = format!("generated {GEN_TONE_HZ:.0} Hz tone");
        Ok(Self::assemble(
            readings,
            SourceInfo::new(name, GEN_SAMPLE_RATE, GEN_CHANNELS),
            Source::Generated {
                running,
                handle: Some(handle),
            },
        ))
    }

    fn assemble(readings: MeterReadings, info: SourceInfo, source: Source) -> Self {
        Self {
            readings,
            peaks_db: vec![DB_FLOOR; info.num_channels],
            info,
            _source: source,
            should_quit: false,
        }
    }

    /// Run the UI event loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_meter();

            terminal.draw(|frame| ui::render(frame, &self.info, &self.peaks_db))?;

            // Non-blocking keyboard poll, ~60fps redraw
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    /// Drain the meter queue, keeping only the newest frame.
    fn poll_meter(&mut self) {
        if let Some(frame) = self.readings.latest() {
            for (db, &peak) in self.peaks_db.iter_mut().zip(frame.peaks()) {
                *db = linear_to_db(peak);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Source::Generated { running, handle } = &mut self._source {
            running.store(false, Ordering::Relaxed);
            if let Some(handle) = handle.take() {
                let _ = handle.join();
            }
        }
    }
}

impl SourceInfo {
    fn new(name: String, sample_rate: f32, num_channels: usize) -> Self {
        Self {
            name,
            sample_rate,
            num_channels,
            attack_sec: Ppm::DEFAULT_ATTACK_SEC,
            release_sec: Ppm::DEFAULT_RELEASE_SEC,
        }
    }
}

/// Audio-side processing chain: vibrato into the meter tap, with scratch
/// buffers sized once up front.
struct Chain {
    vibrato: Vibrato,
    tap: MeterTap,
    dry: Vec<Vec<f32>>,
    wet: Vec<Vec<f32>>,
}

impl Chain {
    fn new(sample_rate: f32, num_channels: usize) -> EyreResult<(Self, MeterReadings)> {
        let mut vibrato = Vibrato::new();
        vibrato.init(VibratoConfig {
            sample_rate,
            num_channels,
            mod_freq_hz: MOD_FREQ_HZ,
            max_width_sec: MAX_WIDTH_SEC,
            mod_amp_sec: MOD_AMP_SEC,
        })?;
        let (tap, readings) = MeterTap::new(sample_rate, num_channels)?;

        let chain = Self {
            vibrato,
            tap,
            dry: vec![vec![0.0; MAX_BLOCK_SIZE]; num_channels],
            wet: vec![vec![0.0; MAX_BLOCK_SIZE]; num_channels],
        };
        Ok((chain, readings))
    }

    /// Process the first `num_frames` samples of `dry` through the chain
    /// and publish the block's meter frame.
    fn run_block(&mut self, num_frames: usize) {
        {
            let inputs: Vec<&[f32]> = self.dry.iter().map(|ch| &ch[..num_frames]).collect();
            let mut outputs: Vec<&mut [f32]> =
                self.wet.iter_mut().map(|ch| &mut ch[..num_frames]).collect();
            if let Err(err) = self.vibrato.process(&inputs, &mut outputs, num_frames) {
                warn!(%err, "vibrato dropped a block");
                return;
            }
        }
        let wet: Vec<&[f32]> = self.wet.iter().map(|ch| &ch[..num_frames]).collect();
        if let Err(err) = self.tap.meter(&wet, num_frames) {
            warn!(%err, "meter dropped a block");
        }
    }
}
