//! Audio buffers which can be copied into.

mod planar;
pub use self::planar::{Iter, Planar};
