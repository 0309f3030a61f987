//! Level meters operating on multichannel blocks.

/// Peak programme meter with attack/release ballistics.
pub mod ppm;
#[cfg(feature = "rtrb")]
/// Lock-free tap for reading meter values from another thread.
pub mod tap;

pub use ppm::{Ppm, PpmParam};
#[cfg(feature = "rtrb")]
pub use tap::{MeterFrame, MeterReadings, MeterTap, MAX_METER_CHANNELS};
