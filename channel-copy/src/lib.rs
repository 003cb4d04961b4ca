//! Copy numeric samples into one channel of an audio buffer.
//!
//! The crate is built around a single operation, [copy_audio_buffer]. It takes
//! any iterable source of numeric samples, takes an owned `f32` snapshot of it,
//! and hands that snapshot to a destination implementing [WriteChannel].
//!
//! The snapshot decouples the destination from the source: once the call
//! returns, the source can be mutated or dropped without affecting what was
//! written.
//!
//! ```
//! use channel_copy::buf::Planar;
//!
//! let mut buf = Planar::with_topology(2, 4);
//!
//! channel_copy::copy_audio_buffer(&mut buf, [1i16, 2, 3, 4], 0)?;
//! channel_copy::copy_audio_buffer(&mut buf, &[0.5f64, 0.25][..], 1)?;
//!
//! assert_eq!(&buf[0], &[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(&buf[1], &[0.5, 0.25]);
//! # Ok::<_, channel_copy::Error>(())
//! ```
//!
//! This is made up of two parts:
//!
//! * [channel-copy-core] - The core traits, [WriteChannel] for destinations
//!   and [Narrow] for samples.
//! * [channel-copy] - This crate, which provides the copy operation, a
//!   reference destination in [buf::Planar], and [wrappers][wrap] which let
//!   external storage act as a destination.
//!
//! Validation of the channel index and of the channel capacity is left
//! entirely to the destination. Whatever error it produces is returned to the
//! caller as-is.
//!
//! ```
//! use channel_copy::{buf::Planar, Error};
//!
//! let mut buf = Planar::with_topology(2, 4);
//!
//! assert_eq! {
//!     channel_copy::copy_audio_buffer(&mut buf, [1.0f32; 4], 2),
//!     Err(Error::ChannelOutOfBounds { channel: 2, channels: 2 }),
//! };
//!
//! assert_eq! {
//!     channel_copy::copy_audio_buffer(&mut buf, [1.0f32; 5], 0),
//!     Err(Error::CapacityExceeded { len: 5, capacity: 4 }),
//! };
//! ```
//!
//! [channel-copy-core]: https://docs.rs/channel-copy-core
//! [channel-copy]: https://docs.rs/channel-copy

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]
#![allow(clippy::should_implement_trait)]

pub use channel_copy_core::narrow;
pub use channel_copy_core::{Narrow, WriteChannel};

mod copy;
pub use self::copy::copy_audio_buffer;

mod error;
pub use self::error::{Error, Result};

pub mod buf;
pub mod wrap;
