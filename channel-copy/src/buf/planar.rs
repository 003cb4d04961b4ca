use core::fmt;
use core::iter;
use core::ops;
use core::slice;

use channel_copy_core::WriteChannel;

use crate::error::Error;

/// A multi-channel `f32` buffer with a fixed topology.
///
/// The number of channels and the capacity of each channel are fixed when the
/// buffer is constructed. Channels are stored one after another in a single
/// allocation, and each channel tracks how many samples it currently holds.
/// Writing to a channel replaces its content entirely, so after a write the
/// channel holds exactly the written samples.
///
/// ```
/// use channel_copy::{buf::Planar, WriteChannel};
///
/// let mut buf = Planar::with_topology(2, 4);
/// buf.write_channel(&[1.0, 2.0, 3.0], 0)?;
/// buf.write_channel(&[4.0], 1)?;
///
/// assert_eq!(&buf[0], &[1.0, 2.0, 3.0]);
/// assert_eq!(&buf[1], &[4.0]);
///
/// buf.write_channel(&[], 0)?;
/// assert!(buf[0].is_empty());
/// # Ok::<_, channel_copy::Error>(())
/// ```
#[derive(Default, Clone)]
pub struct Planar {
    data: Vec<f32>,
    lengths: Vec<usize>,
    capacity: usize,
}

impl Planar {
    /// Construct a new empty audio buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = channel_copy::buf::Planar::new();
    ///
    /// assert_eq!(buf.channels(), 0);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            lengths: Vec::new(),
            capacity: 0,
        }
    }

    /// Allocate an audio buffer with the given topology, that is `channels`
    /// channels which can each hold up to `capacity` samples.
    ///
    /// All channels start out empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = channel_copy::buf::Planar::with_topology(4, 256);
    ///
    /// assert_eq!(buf.channels(), 4);
    /// assert_eq!(buf.capacity(), 256);
    /// assert!(buf.iter().all(|chan| chan.is_empty()));
    /// ```
    pub fn with_topology(channels: usize, capacity: usize) -> Self {
        Self {
            data: vec![0.0; channels * capacity],
            lengths: vec![0; channels],
            capacity,
        }
    }

    /// Allocate an audio buffer from a fixed-size array. Every channel is
    /// filled to capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = channel_copy::buf::Planar::from_array([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    ///
    /// assert_eq!(buf.channels(), 3);
    /// assert_eq!(buf.capacity(), 2);
    /// assert_eq!(&buf[2], &[5.0, 6.0]);
    /// ```
    pub fn from_array<const F: usize, const C: usize>(channels: [[f32; F]; C]) -> Self {
        let mut data = Vec::with_capacity(C * F);

        for frames in channels {
            data.extend(frames);
        }

        Self {
            data,
            lengths: vec![F; C],
            capacity: F,
        }
    }

    /// The number of channels in the buffer.
    pub fn channels(&self) -> usize {
        self.lengths.len()
    }

    /// The number of samples each channel can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the samples currently held by the given channel, or `None` if the
    /// channel doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = channel_copy::buf::Planar::with_topology(1, 16);
    ///
    /// assert_eq!(buf.channel(0), Some(&[][..]));
    /// assert_eq!(buf.channel(1), None);
    /// ```
    pub fn channel(&self, channel: usize) -> Option<&[f32]> {
        let len = *self.lengths.get(channel)?;
        let start = channel * self.capacity;
        Some(&self.data[start..start + len])
    }

    /// Iterate over the samples held by each channel.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = channel_copy::buf::Planar::from_array([[1.0; 2]; 3]);
    ///
    /// for chan in buf.iter() {
    ///     assert_eq!(chan, &[1.0, 1.0]);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.lengths.iter().enumerate(),
            buf: self,
        }
    }

    /// Empty every channel without changing the topology.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut buf = channel_copy::buf::Planar::from_array([[1.0; 2]; 3]);
    /// buf.clear();
    ///
    /// assert_eq!(buf.channels(), 3);
    /// assert!(buf.iter().all(|chan| chan.is_empty()));
    /// ```
    pub fn clear(&mut self) {
        for len in &mut self.lengths {
            *len = 0;
        }
    }
}

impl WriteChannel for Planar {
    type Error = Error;

    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error> {
        let channels = self.channels();

        if channel >= channels {
            return Err(Error::ChannelOutOfBounds { channel, channels });
        }

        if samples.len() > self.capacity {
            return Err(Error::CapacityExceeded {
                len: samples.len(),
                capacity: self.capacity,
            });
        }

        let start = channel * self.capacity;
        self.data[start..start + samples.len()].copy_from_slice(samples);
        self.lengths[channel] = samples.len();
        Ok(())
    }
}

impl fmt::Debug for Planar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Channels compare bitwise, so a NaN sample is equal to an identical NaN.
impl PartialEq for Planar {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.channels() == other.channels()
            && self.iter().zip(other.iter()).all(|(a, b)| {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.to_bits() == b.to_bits())
            })
    }
}

impl Eq for Planar {}

impl ops::Index<usize> for Planar {
    type Output = [f32];

    fn index(&self, index: usize) -> &Self::Output {
        match self.channel(index) {
            Some(chan) => chan,
            None => panic!("index `{}` is not a channel", index),
        }
    }
}

impl<'a> IntoIterator for &'a Planar {
    type IntoIter = Iter<'a>;
    type Item = &'a [f32];

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the channels of a [Planar] buffer.
///
/// See [Planar::iter].
pub struct Iter<'a> {
    inner: iter::Enumerate<slice::Iter<'a, usize>>,
    buf: &'a Planar,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        let (channel, &len) = self.inner.next()?;
        let start = channel * self.buf.capacity;
        Some(&self.buf.data[start..start + len])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
