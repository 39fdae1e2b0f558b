//! Multi-channel sample buffer: the unit of exchange between producers and
//! consumers of sample data. Shape (channel count, length, sample rate) is
//! fixed at construction; per-channel storage is allocated once and never resized.

use std::ops::{Bound, RangeBounds};

use num_traits::AsPrimitive;

use crate::error::BufferError;

/// Owned buffer of f32 samples, one independent array per channel.
/// All channels have exactly the same length. Sample values may be mutated in
/// place through the channel views; the shape never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    /// One allocation per channel; every slice has exactly `length` elements.
    /// Writing one channel never touches a sibling.
    channels: Vec<Box<[f32]>>,
    /// Samples per channel. Stored so a zero-channel buffer still reports a length.
    length: usize,
    /// Nominal samples per second. Metadata only; never checked against `length`.
    sample_rate: f64,
}

impl SampleBuffer {
    /// Creates a buffer of `channel_count` channels, each `length` samples long,
    /// all samples `0.0`. Fails only if `sample_rate` is not a finite positive number.
    pub fn new(
        channel_count: usize,
        length: usize,
        sample_rate: f64,
    ) -> Result<Self, BufferError> {
        check_sample_rate(sample_rate)?;
        let channels = (0..channel_count)
            .map(|_| vec![0.0f32; length].into_boxed_slice())
            .collect();
        Ok(SampleBuffer {
            channels,
            length,
            sample_rate,
        })
    }

    /// Like [`SampleBuffer::new`], but every sample starts at `value` instead of `0.0`.
    /// Any `f32` is accepted as the fill value.
    pub fn filled_with(
        value: f32,
        channel_count: usize,
        length: usize,
        sample_rate: f64,
    ) -> Result<Self, BufferError> {
        let mut buffer = SampleBuffer::new(channel_count, length, sample_rate)?;
        buffer.fill(value);
        Ok(buffer)
    }

    /// Creates a buffer by copying one slice of samples per channel. Input may be
    /// any numeric sample type (`f32`, `f64`, integers); values are converted to
    /// f32 and the buffer owns fresh storage, never aliasing the caller's arrays.
    ///
    /// Fails if `channels` is empty, if the inner slices do not all share one
    /// length, or if `sample_rate` is invalid.
    pub fn from_channels<S, T>(channels: &[S], sample_rate: f64) -> Result<Self, BufferError>
    where
        S: AsRef<[T]>,
        T: AsPrimitive<f32>,
    {
        check_sample_rate(sample_rate)?;
        let first = channels.first().ok_or_else(|| {
            BufferError::InvalidArgument(
                "channel data is empty; a buffer needs at least one channel".to_string(),
            )
        })?;
        let length = first.as_ref().len();

        let mut copied: Vec<Box<[f32]>> = Vec::with_capacity(channels.len());
        for (index, channel) in channels.iter().enumerate() {
            let channel = channel.as_ref();
            if channel.len() != length {
                return Err(BufferError::InvalidArgument(format!(
                    "channel {} has {} samples but channel 0 has {}",
                    index,
                    channel.len(),
                    length
                )));
            }
            copied.push(channel.iter().map(|&sample| sample.as_()).collect());
        }

        Ok(SampleBuffer {
            channels: copied,
            length,
            sample_rate,
        })
    }

    /// Number of channels. Fixed at construction.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel. Fixed at construction.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the buffer holds no samples (zero length or zero channels).
    pub fn is_empty(&self) -> bool {
        self.length == 0 || self.channels.is_empty()
    }

    /// Nominal samples per second.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Seconds of audio covered by this buffer (`len / sample_rate`).
    pub fn duration(&self) -> f64 {
        self.length as f64 / self.sample_rate
    }

    /// Read view of one channel's samples. Repeated calls with the same index
    /// return a view over the same underlying storage (callers may cache it).
    /// Fails with `IndexOutOfRange` if `index >= channel_count`.
    pub fn channel_data(&self, index: usize) -> Result<&[f32], BufferError> {
        self.channels
            .get(index)
            .map(|channel| &channel[..])
            .ok_or(BufferError::IndexOutOfRange {
                index,
                channel_count: self.channels.len(),
            })
    }

    /// Write view of one channel's samples; the live storage, not a copy.
    /// Fails with `IndexOutOfRange` if `index >= channel_count`.
    pub fn channel_data_mut(&mut self, index: usize) -> Result<&mut [f32], BufferError> {
        let channel_count = self.channels.len();
        self.channels
            .get_mut(index)
            .map(|channel| &mut channel[..])
            .ok_or(BufferError::IndexOutOfRange {
                index,
                channel_count,
            })
    }

    /// Iterates over all channels as read slices, in channel order.
    pub fn channels(&self) -> impl Iterator<Item = &[f32]> {
        self.channels.iter().map(|channel| &channel[..])
    }

    /// Iterates over all channels as write slices, in channel order.
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.channels.iter_mut().map(|channel| &mut channel[..])
    }

    /// Sets every sample in every channel to `value`.
    pub fn fill(&mut self, value: f32) {
        for channel in self.channels.iter_mut() {
            channel.fill(value);
        }
    }

    /// Sets every sample in every channel to `0.0`.
    pub fn clear(&mut self) {
        self.fill(0.0);
    }

    /// Copies the sample window `range` out of every channel into a new buffer.
    /// Channel count and sample rate carry over; the result owns its storage and
    /// outlives the source independently.
    ///
    /// Out-of-range bounds are clamped rather than rejected: a start past the end,
    /// or an end at or before the start, yields a structurally valid zero-length
    /// buffer. This keeps range arithmetic composable for callers.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> SampleBuffer {
        let start = match range.start_bound() {
            Bound::Included(&index) => index,
            Bound::Excluded(&index) => index + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&index) => index + 1,
            Bound::Excluded(&index) => index,
            Bound::Unbounded => self.length,
        };
        let start = start.min(self.length);
        let end = end.clamp(start, self.length);

        let channels = self
            .channels
            .iter()
            .map(|channel| Box::from(&channel[start..end]))
            .collect();
        SampleBuffer {
            channels,
            length: end - start,
            sample_rate: self.sample_rate,
        }
    }
}

/// A sample rate must be a finite positive number; anything else is rejected
/// up front rather than defaulted or coerced.
fn check_sample_rate(sample_rate: f64) -> Result<(), BufferError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(BufferError::InvalidArgument(format!(
            "sample rate must be a finite positive number, got {}",
            sample_rate
        )))
    }
}
