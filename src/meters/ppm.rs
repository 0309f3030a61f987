use std::ops::RangeInclusive;

use crate::dsp::SmoothingCoeff;
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::debug;

/// Ballistics parameters of the meter, both expressed as time constants in
/// seconds and stored internally as per-sample smoothing coefficients.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmParam {
    /// How fast the meter rises toward a louder signal.
    AttackTime,
    /// How fast the meter falls once the signal drops.
    ReleaseTime,
}

impl PpmParam {
    /// Accepted range for [`Ppm::set_param`], in seconds.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            PpmParam::AttackTime => 0.0..=0.02,
            PpmParam::ReleaseTime => 0.0..=2.0,
        }
    }
}

#[derive(Debug)]
struct Inner {
    sample_rate: f32,
    attack: SmoothingCoeff,
    release: SmoothingCoeff,
    previous: Vec<f32>,
}

/// Peak programme meter: per-sample rectification, attack/release
/// exponential smoothing, per-block maximum tracking.
///
/// Each channel has its own smoothed peak state and is metered
/// independently; the smoothed envelope carries across `process` calls so
/// block boundaries are invisible to the ballistics. Readings are linear
/// magnitudes; convert with [`crate::dsp::level::linear_to_db`] when a
/// decibel scale is wanted.
///
/// Every sample the meter picks one of two branches by comparing the
/// rectified input against the previous smoothed value: rising input takes
/// the attack branch `a * current + (1 - a) * previous`, falling input the
/// release branch `(1 - r) * previous`. A time constant of zero makes the
/// corresponding branch instantaneous.
#[derive(Debug)]
pub struct Ppm {
    inner: Option<Inner>,
}

impl Ppm {
    pub const DEFAULT_ATTACK_SEC: f32 = 0.01;
    pub const DEFAULT_RELEASE_SEC: f32 = 1.5;

    /// Creates an uninitialized meter; all operations fail with
    /// [`Error::NotInitialized`] until [`Ppm::init`] succeeds.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Allocates per-channel smoothed state and installs the default
    /// ballistics (10 ms attack, 1.5 s release).
    pub fn init(&mut self, sample_rate: f32, num_channels: usize) -> Result<(), Error> {
        self.inner = None;
        if !(sample_rate.is_finite() && sample_rate > 0.0) || num_channels == 0 {
            return Err(Error::InvalidArgs);
        }

        let mut previous = Vec::new();
        previous
            .try_reserve_exact(num_channels)
            .map_err(|_| Error::Allocation)?;
        previous.resize(num_channels, 0.0);

        debug!(sample_rate, num_channels, "ppm initialized");

        self.inner = Some(Inner {
            sample_rate,
            attack: SmoothingCoeff::from_time_sec(Self::DEFAULT_ATTACK_SEC, sample_rate),
            release: SmoothingCoeff::from_time_sec(Self::DEFAULT_RELEASE_SEC, sample_rate),
            previous,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Channel count fixed at init. `None` before [`Ppm::init`].
    pub fn num_channels(&self) -> Option<usize> {
        self.inner.as_ref().map(|inner| inner.previous.len())
    }

    /// Sets a ballistics time constant in seconds.
    ///
    /// Out-of-range times fail with [`Error::InvalidArgs`] and leave the
    /// previously configured value in effect.
    pub fn set_param(&mut self, param: PpmParam, time_sec: f32) -> Result<(), Error> {
        let inner = self.inner.as_mut().ok_or(Error::NotInitialized)?;
        if !param.range().contains(&time_sec) {
            return Err(Error::InvalidArgs);
        }

        let coeff = SmoothingCoeff::from_time_sec(time_sec, inner.sample_rate);
        match param {
            PpmParam::AttackTime => inner.attack = coeff,
            PpmParam::ReleaseTime => inner.release = coeff,
        }
        debug!(?param, time_sec, "ppm parameter changed");
        Ok(())
    }

    /// Reads a ballistics time constant back in seconds, reconstructed
    /// from the stored coefficient.
    pub fn param(&self, param: PpmParam) -> Result<f32, Error> {
        let inner = self.inner.as_ref().ok_or(Error::NotInitialized)?;
        let coeff = match param {
            PpmParam::AttackTime => inner.attack,
            PpmParam::ReleaseTime => inner.release,
        };
        Ok(coeff.time_sec(inner.sample_rate))
    }

    /// Meters one block and writes each channel's peak into `peaks`.
    ///
    /// `inputs` must hold exactly the configured channel count, each
    /// channel covering `num_frames` samples, and `peaks` must have room
    /// for every channel. The reported value is the maximum the smoothed
    /// envelope reached during the block; it is written for every channel
    /// on every call, including release-only blocks. A zero-frame call
    /// reports zero.
    pub fn process(
        &mut self,
        inputs: &[&[f32]],
        num_frames: usize,
        peaks: &mut [f32],
    ) -> Result<(), Error> {
        let inner = self.inner.as_mut().ok_or(Error::NotInitialized)?;
        let num_channels = inner.previous.len();

        if inputs.len() != num_channels || peaks.len() < num_channels {
            return Err(Error::InvalidArgs);
        }
        if inputs.iter().any(|channel| channel.len() < num_frames) {
            return Err(Error::InvalidArgs);
        }

        let peaks = &mut peaks[..num_channels];
        peaks.fill(0.0);

        let attack = inner.attack.value();
        let release = inner.release.value();

        for n in 0..num_frames {
            for (c, previous) in inner.previous.iter_mut().enumerate() {
                let current = inputs[c][n].abs();
                let smoothed = if *previous > current {
                    (1.0 - release) * *previous
                } else {
                    attack * current + (1.0 - attack) * *previous
                };
                if smoothed > peaks[c] {
                    peaks[c] = smoothed;
                }
                *previous = smoothed;
            }
        }
        Ok(())
    }

    /// Clears all state and returns to the uninitialized state.
    pub fn reset(&mut self) {
        if self.inner.take().is_some() {
            debug!("ppm reset");
        }
    }
}

impl Default for Ppm {
    fn default() -> Self {
        Self::new()
    }
}
