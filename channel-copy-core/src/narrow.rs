//! Narrowing of numeric samples into `f32`.
//!
//! Narrowing follows the rules of a numeric `as f32` cast and nothing else:
//!
//! * Every value is converted to the nearest representable `f32`, with ties
//!   rounding to the value with an even mantissa.
//! * Values whose magnitude is too large for an `f32` become infinity of the
//!   same sign, values too small become zero of the same sign.
//! * NaN stays NaN and infinities stay infinities.
//!
//! Integers are *not* treated as PCM samples. An `i16` holding `16384`
//! narrows to `16384.0`, not to `0.5`. Anything that wants amplitude
//! normalization has to do it before the samples are narrowed.


/// A numeric sample which can be narrowed into an `f32`.
///
/// This is implemented for all primitive integer and floating point types,
/// and for references to them so that borrowed slices can be used as a
/// source directly.
///
/// # Examples
///
/// ```
/// use channel_copy::Narrow;
///
/// assert_eq!(1.0000000000000002f64.narrow(), 1.0f32);
/// assert_eq!(16384i16.narrow(), 16384.0);
/// assert_eq!(16777217i32.narrow(), 16777216.0);
/// assert_eq!(f64::MAX.narrow(), f32::INFINITY);
/// assert!(f64::NAN.narrow().is_nan());
///
/// let samples = [1u8, 2, 3];
/// let narrowed = samples.iter().map(Narrow::narrow).collect::<Vec<f32>>();
/// assert_eq!(narrowed, [1.0, 2.0, 3.0]);
/// ```
pub trait Narrow: Copy {
    /// Narrow the sample into an `f32`.
    fn narrow(self) -> f32;
}

impl Narrow for f32 {
    #[inline]
    fn narrow(self) -> f32 {
        self
    }
}

impl<T> Narrow for &T
where
    T: Narrow,
{
    #[inline]
    fn narrow(self) -> f32 {
        (*self).narrow()
    }
}

// Helper macro to implement [Narrow] through a plain numeric cast.
macro_rules! cast {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Narrow for $ty {
                #[inline]
                fn narrow(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

cast!(f64);
cast!(i8, i16, i32, i64, i128, isize);
cast!(u8, u16, u32, u64, u128, usize);
