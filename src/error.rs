//! Errors for buffer construction and channel access. All validation happens
//! eagerly at the call site; nothing is deferred, coerced, or retried.

use thiserror::Error;

/// Error returned by `SampleBuffer` constructors and accessors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BufferError {
    /// A construction parameter the type system cannot rule out statically was
    /// invalid: non-finite or non-positive sample rate, empty channel input,
    /// or ragged channel lengths.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Channel index outside `[0, channel_count)`. Never clamped.
    #[error("channel index {index} out of range (buffer has {channel_count} channels)")]
    IndexOutOfRange { index: usize, channel_count: usize },
}
