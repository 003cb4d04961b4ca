//! The core [channel-copy] traits.
//!
//! If you want to build an audio buffer that can receive copied channels, or a
//! sample type that can be copied into one, you can add a dependency directly
//! to these traits instead of depending on all of the [channel-copy] crate.
//!
//! * [WriteChannel] is implemented by destinations. It accepts one channel
//!   worth of `f32` samples at a time and is the only place where the channel
//!   index and the channel capacity are validated.
//! * [Narrow] is implemented by sample types which can be narrowed into an
//!   `f32`, following the rules of a numeric `as` cast.
//!
//! [channel-copy]: https://docs.rs/channel-copy

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod write_channel;
pub use self::write_channel::WriteChannel;

pub mod narrow;
pub use self::narrow::Narrow;
