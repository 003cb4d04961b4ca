use channel_copy_core::WriteChannel;

use crate::error::Error;

/// A wrapper for a sequential audio buffer, where each channel is stored one
/// after another in a single slice.
///
/// See [wrap::sequential][super::sequential()].
pub struct Sequential<T> {
    value: T,
    frames: usize,
}

impl<T> Sequential<T> {
    pub(crate) fn new(value: T, frames: usize) -> Self {
        Self { value, frames }
    }

    /// Get a reference to the inner value.
    pub fn as_ref(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the inner value.
    pub fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Release the inner value.
    ///
    /// # Example
    ///
    /// ```
    /// let buf = channel_copy::wrap::sequential(vec![0.0f32; 4], 2);
    /// assert_eq!(buf.into_inner(), vec![0.0; 4]);
    /// ```
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The number of frames each channel holds.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The number of channels in the wrapped buffer. Trailing samples which
    /// don't make up a whole channel are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// let buf = channel_copy::wrap::sequential(vec![0.0f32; 9], 4);
    /// assert_eq!(buf.channels(), 2);
    ///
    /// let buf = channel_copy::wrap::sequential(vec![0.0f32; 9], 0);
    /// assert_eq!(buf.channels(), 0);
    /// ```
    pub fn channels(&self) -> usize
    where
        T: AsRef<[f32]>,
    {
        channels(self.value.as_ref().len(), self.frames)
    }
}

impl<T> WriteChannel for Sequential<T>
where
    T: AsMut<[f32]>,
{
    type Error = Error;

    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error> {
        let frames = self.frames;
        let data = self.value.as_mut();
        let channels = channels(data.len(), frames);

        if channel >= channels {
            return Err(Error::ChannelOutOfBounds { channel, channels });
        }

        if samples.len() > frames {
            return Err(Error::CapacityExceeded {
                len: samples.len(),
                capacity: frames,
            });
        }

        let start = channel * frames;
        data[start..start + samples.len()].copy_from_slice(samples);
        Ok(())
    }
}

fn channels(len: usize, frames: usize) -> usize {
    if frames == 0 {
        0
    } else {
        len / frames
    }
}
