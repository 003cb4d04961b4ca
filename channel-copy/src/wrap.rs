//! This module provides wrappers which let storage from crates using a
//! different buffer format act as a destination for
//! [copy_audio_buffer][crate::copy_audio_buffer], without first copying it
//! into a [Planar][crate::buf::Planar].

mod dynamic;
pub use self::dynamic::Dynamic;

mod sequential;
pub use self::sequential::Sequential;

/// Wrap a collection of vectors as a dynamic buffer, where each vector is one
/// channel.
///
/// Channels have no fixed capacity. A write replaces the content of the
/// vector, growing or shrinking it as needed.
///
/// # Example
///
/// ```
/// use channel_copy::{wrap, WriteChannel};
///
/// let mut buf = wrap::dynamic(vec![vec![0.0f32; 2]; 2]);
/// buf.write_channel(&[1.0, 2.0, 3.0], 1)?;
///
/// assert_eq!(buf.into_inner(), [vec![0.0, 0.0], vec![1.0, 2.0, 3.0]]);
/// # Ok::<_, channel_copy::Error>(())
/// ```
pub fn dynamic<T>(value: T) -> Dynamic<T>
where
    T: AsMut<[Vec<f32>]>,
{
    Dynamic::new(value)
}

/// Wrap a slice as a sequential buffer with the given number of frames per
/// channel. The length of the slice determines the number of channels it has.
///
/// Each channel can hold at most `frames` samples. A write copies into the
/// front of the channel and leaves the rest of its frames untouched.
///
/// # Example
///
/// ```
/// use channel_copy::{wrap, WriteChannel};
///
/// let mut data = [0.0f32; 8];
/// let mut buf = wrap::sequential(&mut data[..], 4);
/// buf.write_channel(&[1.0, 2.0], 1)?;
///
/// assert_eq!(data, [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 0.0, 0.0]);
/// # Ok::<_, channel_copy::Error>(())
/// ```
pub fn sequential<T>(value: T, frames: usize) -> Sequential<T>
where
    T: AsMut<[f32]>,
{
    Sequential::new(value, frames)
}
