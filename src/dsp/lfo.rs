use std::f32::consts::TAU;

/// Sinusoidal low-frequency oscillator with an explicit phase accumulator.
///
/// One instance modulates all channels of an effect: call [`advance`] once
/// per frame and reuse the value, so every channel sees the same modulator.
///
/// [`advance`]: SineLfo::advance
pub struct SineLfo {
    phase: f32,
    phase_inc: f32,
}

impl SineLfo {
    pub fn new(frequency_hz: f32, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: TAU * frequency_hz / sample_rate,
        }
    }

    /// Returns `sin(phase)` for the current frame, then steps the phase by
    /// one sample, wrapping at 2π to keep the accumulator bounded.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        let value = self.phase.sin();
        self.phase += self.phase_inc;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        value
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
