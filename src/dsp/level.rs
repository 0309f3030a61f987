//! Level conversions shared by the meters: time-constant smoothing
//! coefficients and linear/decibel mappings.

/// Lowest level the dB conversion reports. Zero or denormal input maps
/// here instead of `-inf`, so downstream meter math stays finite.
pub const DB_FLOOR: f32 = -120.0;

/// Per-sample exponential smoothing factor tied to a time constant.
///
/// Stores the dimensionless coefficient `1 - exp(-2.2 / (sample_rate * t))`
/// and reconstructs the time constant through the exact inverse mapping, so
/// a value set from seconds always reads back as the same seconds within
/// float tolerance. Keeping the pair in one type is what makes the
/// round-trip guarantee hold; raw floats would let the two representations
/// drift apart.
///
/// A time of zero maps to a coefficient of exactly 1.0 (the follower tracks
/// its target within a single sample) and back to zero seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingCoeff(f32);

impl SmoothingCoeff {
    pub fn from_time_sec(time_sec: f32, sample_rate: f32) -> Self {
        Self(1.0 - (-2.2 / (sample_rate * time_sec)).exp())
    }

    /// The per-sample coefficient.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Reconstructs the time constant in seconds.
    pub fn time_sec(self, sample_rate: f32) -> f32 {
        -2.2 / (sample_rate * (1.0 - self.0).ln())
    }
}

/// `20 * log10(linear)` clamped at [`DB_FLOOR`].
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    (20.0 * linear.max(0.0).log10()).max(DB_FLOOR)
}

#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    10.0_f32.powf(db * 0.05)
}
