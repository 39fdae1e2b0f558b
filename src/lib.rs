//! Multi-channel sample buffer: the unit of exchange between producers and
//! consumers of audio sample data (graph nodes, decoders, test harnesses).
//! The buffer is a passive value type with a fixed shape; routing, mixing,
//! DSP, and device I/O live in the systems that consume it.

pub mod error;
pub mod sample_buffer;

pub use error::BufferError;
pub use sample_buffer::SampleBuffer;
