use channel_copy_core::WriteChannel;

use crate::error::Error;

/// A wrapper for an external dynamic audio buffer.
///
/// See [wrap::dynamic][super::dynamic()].
pub struct Dynamic<T> {
    value: T,
}

impl<T> Dynamic<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Get a reference to the inner value.
    ///
    /// # Example
    ///
    /// ```
    /// let buf = channel_copy::wrap::dynamic(vec![vec![1.0f32, 2.0]]);
    /// assert_eq!(buf.as_ref(), &[vec![1.0, 2.0]]);
    /// ```
    pub fn as_ref(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the inner value.
    pub fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Release the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The number of channels in the wrapped buffer.
    ///
    /// # Example
    ///
    /// ```
    /// let buf = channel_copy::wrap::dynamic(vec![vec![0.0f32; 4]; 3]);
    /// assert_eq!(buf.channels(), 3);
    /// ```
    pub fn channels(&self) -> usize
    where
        T: AsRef<[Vec<f32>]>,
    {
        self.value.as_ref().len()
    }
}

impl<T> WriteChannel for Dynamic<T>
where
    T: AsMut<[Vec<f32>]>,
{
    type Error = Error;

    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error> {
        let channels = self.value.as_mut();
        let len = channels.len();

        let chan = match channels.get_mut(channel) {
            Some(chan) => chan,
            None => {
                return Err(Error::ChannelOutOfBounds {
                    channel,
                    channels: len,
                })
            }
        };

        chan.clear();
        chan.extend_from_slice(samples);
        Ok(())
    }
}
