use crate::Error;

/// Fixed-capacity circular delay line for one channel.
///
/// Samples are written at an advancing index that wraps at capacity; reads
/// are taken relative to the most recently written sample, so `read(0.0)`
/// returns the newest sample and `read(1.0)` the one before it. Fractional
/// offsets are linearly interpolated between the two neighboring taps.
#[derive(Debug)]
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    /// Allocates a zeroed delay line holding `capacity` samples.
    ///
    /// Capacity must cover the largest delay plus one sample of
    /// interpolation margin; callers size it once at init time so the
    /// audio path never reallocates.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidArgs);
        }
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation)?;
        buffer.resize(capacity, 0.0);
        Ok(Self {
            buffer,
            write_pos: 0,
        })
    }

    /// Stores one sample and advances the write index, wrapping at capacity.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Linearly interpolated read at a fractional delay behind the newest
    /// sample.
    ///
    /// `delay` is clamped to `[0, capacity - 1]`; an out-of-range request
    /// deterministically reads the newest or oldest stored sample instead
    /// of wrapping into unrelated history.
    #[inline]
    pub fn read(&self, delay: f32) -> f32 {
        let len = self.buffer.len();
        let delay = delay.clamp(0.0, (len - 1) as f32);
        let whole = delay as usize;
        let frac = delay - whole as f32;

        // write_pos points one past the newest sample; 2*len keeps the
        // subtraction in unsigned range before the wrap.
        let tap0 = (self.write_pos + 2 * len - 1 - whole) % len;
        let tap1 = (self.write_pos + 2 * len - 2 - whole) % len;

        let s0 = self.buffer[tap0];
        let s1 = self.buffer[tap1];
        s0 + frac * (s1 - s0)
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}
