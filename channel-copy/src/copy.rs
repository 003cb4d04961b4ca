use channel_copy_core::{Narrow, WriteChannel};

/// Copy the samples of `source` into `channel` of `destination`, narrowing
/// each of them to an `f32`.
///
/// The source is fully materialized into an owned vector before the
/// destination is touched, so the destination only ever observes a complete
/// snapshot. Order and length are preserved exactly and every sample goes
/// through [Narrow], so out of range values become infinities and NaN stays
/// NaN.
///
/// Neither `channel` nor the length of `source` is checked here. Both are
/// forwarded to [WriteChannel::write_channel], and any error it raises is
/// returned unmodified.
///
/// # Examples
///
/// ```
/// let mut channels: Vec<Vec<f32>> = vec![Vec::new(); 2];
///
/// channel_copy::copy_audio_buffer(channel_copy::wrap::dynamic(&mut channels), 0u8..4, 1)?;
///
/// assert_eq!(channels, [vec![], vec![0.0, 1.0, 2.0, 3.0]]);
/// # Ok::<_, channel_copy::Error>(())
/// ```
///
/// Sources need to be iterable.
///
/// ```compile_fail
/// let mut buf = channel_copy::buf::Planar::with_topology(1, 4);
/// channel_copy::copy_audio_buffer(&mut buf, 1.0f64, 0);
/// ```
pub fn copy_audio_buffer<D, I>(mut destination: D, source: I, channel: usize) -> Result<(), D::Error>
where
    D: WriteChannel,
    I: IntoIterator,
    I::Item: Narrow,
{
    let samples = source.into_iter().map(Narrow::narrow).collect::<Vec<f32>>();
    tracing::trace!(channel, len = samples.len(), "copying samples into channel");
    destination.write_channel(&samples, channel)
}
