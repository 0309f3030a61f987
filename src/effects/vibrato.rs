use crate::dsp::{DelayLine, SineLfo};
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::debug;

/*
Vibrato Effect
==============

Vibrato modulates pitch by continuously varying the playback delay of the
signal. The input runs through a delay line whose read position sweeps back
and forth under a low-frequency sine; as the delay shrinks the pitch bends
up, as it grows the pitch bends down.

How It Works
------------

1. Every input sample is written into a per-channel delay line.
2. A shared sine LFO produces one modulation value per frame.
3. The read position is `center_delay + amplitude * sin(phase)`, a
   fractional offset behind the newest sample.
4. The output is the linearly interpolated read at that offset. There is
   no dry path: the output is fully wet, which is what distinguishes
   vibrato from chorus.

The center delay is the modulation amplitude's full range away from both
ends of the buffer, so the swept read position never catches up with the
write position and never falls off the oldest sample.

Parameters
----------

Modulation frequency (Hz):
  LFO speed. 5-7 Hz is the classic vocal/instrumental vibrato range.
  Anything below the Nyquist limit is accepted; 0 Hz degenerates to a
  fixed delay.

Maximum width (seconds):
  The largest modulation amplitude this instance will ever allow. Sets
  the delay-line size and the center delay at init time.

Modulation amplitude (seconds):
  The actual sweep depth, up to the maximum width. A few milliseconds is
  already a strong effect.

All three are fixed at `init`; changing them means reinitializing, which
also clears the delay history.
*/

/// Initialization parameters for [`Vibrato`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibratoConfig {
    /// Sample rate in Hz. Must be positive and finite.
    pub sample_rate: f32,
    /// Number of channels (non-interleaved); each gets its own delay line.
    pub num_channels: usize,
    /// LFO frequency in Hz, `0 <= f < sample_rate / 2`.
    pub mod_freq_hz: f32,
    /// Largest permitted modulation amplitude in seconds, `> 0`.
    pub max_width_sec: f32,
    /// Modulation amplitude in seconds, `0 <= amp <= max_width_sec`.
    pub mod_amp_sec: f32,
}

impl VibratoConfig {
    fn validate(&self) -> Result<(), Error> {
        let nyquist_ok =
            self.mod_freq_hz >= 0.0 && self.mod_freq_hz < self.sample_rate / 2.0;
        let width_ok = self.max_width_sec > 0.0 && self.max_width_sec.is_finite();
        let amp_ok = self.mod_amp_sec >= 0.0 && self.mod_amp_sec <= self.max_width_sec;
        let format_ok =
            self.sample_rate.is_finite() && self.sample_rate > 0.0 && self.num_channels > 0;
        if nyquist_ok && width_ok && amp_ok && format_ok {
            Ok(())
        } else {
            Err(Error::InvalidArgs)
        }
    }
}

struct Inner {
    lines: Vec<DelayLine>,
    lfo: SineLfo,
    center_delay: f32,
    amp_samples: f32,
}

/// Delay-modulation vibrato over multichannel blocks.
///
/// Construct with [`Vibrato::new`], configure with [`Vibrato::init`], then
/// call [`Vibrato::process`] once per block. Phase and delay history carry
/// across calls, so consecutive blocks join without discontinuities.
pub struct Vibrato {
    inner: Option<Inner>,
}

impl Vibrato {
    /// Creates an uninitialized instance. Every processing call fails with
    /// [`Error::NotInitialized`] until [`Vibrato::init`] succeeds.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Validates the configuration and allocates one delay line per
    /// channel, sized to the maximum width plus interpolation margin.
    /// The LFO phase starts at zero.
    ///
    /// On [`Error::InvalidArgs`] or [`Error::Allocation`] the instance
    /// stays (or becomes) uninitialized.
    pub fn init(&mut self, config: VibratoConfig) -> Result<(), Error> {
        self.inner = None;
        config.validate()?;

        // Integer center keeps the zero-amplitude case an exact sample
        // shift; capacity covers center +/- full width on either side.
        // The cast saturates on oversized widths, so the checked math
        // catches them as InvalidArgs.
        let center_delay = (config.max_width_sec * config.sample_rate).ceil();
        let capacity = (center_delay as usize)
            .checked_mul(2)
            .and_then(|samples| samples.checked_add(2))
            .ok_or(Error::InvalidArgs)?;

        let mut lines = Vec::new();
        lines
            .try_reserve_exact(config.num_channels)
            .map_err(|_| Error::Allocation)?;
        for _ in 0..config.num_channels {
            lines.push(DelayLine::new(capacity)?);
        }

        debug!(
            sample_rate = config.sample_rate,
            num_channels = config.num_channels,
            mod_freq_hz = config.mod_freq_hz,
            mod_amp_sec = config.mod_amp_sec,
            center_delay,
            "vibrato initialized"
        );

        self.inner = Some(Inner {
            lines,
            lfo: SineLfo::new(config.mod_freq_hz, config.sample_rate),
            center_delay,
            amp_samples: config.mod_amp_sec * config.sample_rate,
        });
        Ok(())
    }

    /// The fixed delay, in samples, that modulation oscillates around.
    /// `None` before a successful [`Vibrato::init`].
    pub fn center_delay(&self) -> Option<f32> {
        self.inner.as_ref().map(|inner| inner.center_delay)
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Runs one block: writes each input sample into its channel's delay
    /// line, then reads back at the LFO-modulated fractional offset.
    ///
    /// `inputs` and `outputs` must both hold exactly the configured channel
    /// count, and every channel slice must cover `num_frames` samples;
    /// anything else fails with [`Error::InvalidArgs`] before any state is
    /// touched. The LFO advances once per frame and all channels share its
    /// value.
    pub fn process(
        &mut self,
        inputs: &[&[f32]],
        outputs: &mut [&mut [f32]],
        num_frames: usize,
    ) -> Result<(), Error> {
        let inner = self.inner.as_mut().ok_or(Error::NotInitialized)?;

        if inputs.len() != inner.lines.len() || outputs.len() != inner.lines.len() {
            return Err(Error::InvalidArgs);
        }
        if inputs.iter().any(|channel| channel.len() < num_frames)
            || outputs.iter().any(|channel| channel.len() < num_frames)
        {
            return Err(Error::InvalidArgs);
        }

        for n in 0..num_frames {
            let offset = inner.center_delay + inner.amp_samples * inner.lfo.advance();
            for (c, line) in inner.lines.iter_mut().enumerate() {
                line.write(inputs[c][n]);
                outputs[c][n] = line.read(offset);
            }
        }
        Ok(())
    }

    /// Releases the delay lines and returns to the uninitialized state.
    pub fn reset(&mut self) {
        if self.inner.take().is_some() {
            debug!("vibrato reset");
        }
    }
}

impl Default for Vibrato {
    fn default() -> Self {
        Self::new()
    }
}
