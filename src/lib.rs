pub mod dsp;
pub mod effects; // Block-processing effects (vibrato)
pub mod error;
pub mod meters; // Level metering (PPM)

pub use error::Error;

/// Upper bound on per-call block length; callers size scratch buffers
/// against this. Processing itself accepts any `num_frames` the supplied
/// channel slices cover.
pub const MAX_BLOCK_SIZE: usize = 2048;
