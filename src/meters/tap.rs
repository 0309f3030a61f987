use rtrb::{Consumer, Producer, RingBuffer};

use crate::meters::ppm::{Ppm, PpmParam};
use crate::Error;

/// Most channels a [`MeterFrame`] can carry. Meter wider layouts with
/// [`Ppm`] directly.
pub const MAX_METER_CHANNELS: usize = 8;

const METER_QUEUE_SIZE: usize = 64;

/// One block's worth of meter readings, small and `Copy` so it can cross
/// the queue without allocation.
#[derive(Debug, Clone, Copy)]
pub struct MeterFrame {
    peaks: [f32; MAX_METER_CHANNELS],
    num_channels: usize,
}

impl MeterFrame {
    /// Linear per-channel block peaks.
    pub fn peaks(&self) -> &[f32] {
        &self.peaks[..self.num_channels]
    }
}

/// Audio-thread side of the meter: owns the [`Ppm`] and publishes one
/// [`MeterFrame`] per processed block onto a lock-free queue.
///
/// Publishing never blocks; when the queue is full (a stalled or slow
/// reader) the frame is dropped rather than holding up the audio thread.
#[derive(Debug)]
pub struct MeterTap {
    ppm: Ppm,
    scratch: [f32; MAX_METER_CHANNELS],
    tx: Producer<MeterFrame>,
}

/// Reader side, typically owned by a UI thread.
#[derive(Debug)]
pub struct MeterReadings {
    rx: Consumer<MeterFrame>,
}

impl MeterTap {
    /// Builds an initialized meter plus the reader handle for its frames.
    pub fn new(sample_rate: f32, num_channels: usize) -> Result<(Self, MeterReadings), Error> {
        if num_channels > MAX_METER_CHANNELS {
            return Err(Error::InvalidArgs);
        }
        let mut ppm = Ppm::new();
        ppm.init(sample_rate, num_channels)?;

        let (tx, rx) = RingBuffer::<MeterFrame>::new(METER_QUEUE_SIZE);
        let tap = Self {
            ppm,
            scratch: [0.0; MAX_METER_CHANNELS],
            tx,
        };
        Ok((tap, MeterReadings { rx }))
    }

    /// Meters one block and publishes the per-channel peaks.
    pub fn meter(&mut self, inputs: &[&[f32]], num_frames: usize) -> Result<(), Error> {
        self.ppm.process(inputs, num_frames, &mut self.scratch)?;
        let frame = MeterFrame {
            peaks: self.scratch,
            num_channels: inputs.len(),
        };
        let _ = self.tx.push(frame);
        Ok(())
    }

    pub fn set_param(&mut self, param: PpmParam, time_sec: f32) -> Result<(), Error> {
        self.ppm.set_param(param, time_sec)
    }

    pub fn param(&self, param: PpmParam) -> Result<f32, Error> {
        self.ppm.param(param)
    }
}

impl MeterReadings {
    /// Drains the queue and returns the newest frame, or `None` when the
    /// audio side has not published since the last call.
    pub fn latest(&mut self) -> Option<MeterFrame> {
        let mut latest = None;
        while let Ok(frame) = self.rx.pop() {
            latest = Some(frame);
        }
        latest
    }
}
