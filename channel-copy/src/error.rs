use thiserror::Error;

/// Errors raised by the destinations provided in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The written channel does not exist.
    #[error("channel {channel} is out of bounds for a buffer with {channels} channels")]
    ChannelOutOfBounds {
        /// The channel that was written to.
        channel: usize,
        /// The number of channels in the buffer.
        channels: usize,
    },
    /// More samples were written than the channel can hold.
    #[error("cannot write {len} samples into a channel with a capacity of {capacity}")]
    CapacityExceeded {
        /// The number of samples that were written.
        len: usize,
        /// The capacity of the channel.
        capacity: usize,
    },
}

/// The re-exported error type.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;
