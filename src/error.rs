use thiserror::Error;

/// Failure modes shared by every processing unit in the crate.
///
/// All variants are recoverable: the caller can retry with corrected
/// arguments. A failed `set_param` leaves the previous value in effect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation was invoked before a successful `init`.
    #[error("instance is not initialized")]
    NotInitialized,

    /// A parameter was out of range, or a buffer did not match the
    /// configured channel count / frame count.
    #[error("invalid argument")]
    InvalidArgs,

    /// The delay-line or state allocation could not be satisfied.
    #[error("buffer allocation failed")]
    Allocation,
}
