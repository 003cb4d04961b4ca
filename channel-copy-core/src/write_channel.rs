/// A destination which accepts a single channel of `f32` samples at a time.
///
/// Implementors own all validation of the write: whether `channel` exists, and
/// whether `samples` fits into it. Callers such as
/// [copy_audio_buffer][copy_audio_buffer] forward whatever error is produced
/// here without inspecting or wrapping it.
///
/// What a zero-length write means is also up to the implementor.
///
/// # Examples
///
/// ```
/// use channel_copy::WriteChannel;
///
/// struct Mono(Vec<f32>);
///
/// impl WriteChannel for Mono {
///     type Error = usize;
///
///     fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), usize> {
///         if channel != 0 {
///             return Err(channel);
///         }
///
///         self.0.clear();
///         self.0.extend_from_slice(samples);
///         Ok(())
///     }
/// }
///
/// let mut mono = Mono(Vec::new());
/// mono.write_channel(&[1.0, 2.0], 0)?;
/// assert_eq!(mono.0, [1.0, 2.0]);
/// assert_eq!(mono.write_channel(&[1.0, 2.0], 1), Err(1));
/// # Ok::<_, usize>(())
/// ```
///
/// [copy_audio_buffer]: https://docs.rs/channel-copy/latest/channel_copy/fn.copy_audio_buffer.html
pub trait WriteChannel {
    /// Error raised when a write is rejected.
    type Error;

    /// Write `samples` into the channel identified by `channel`.
    ///
    /// The samples are only borrowed for the duration of the call. An
    /// implementation which wants to keep them must copy them.
    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error>;
}

impl<W> WriteChannel for &mut W
where
    W: ?Sized + WriteChannel,
{
    type Error = W::Error;

    #[inline]
    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error> {
        (**self).write_channel(samples, channel)
    }
}
