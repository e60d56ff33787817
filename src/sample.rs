//! Floating-point sample widths accepted by the centroid kernel.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A waveform sample: `f32` or `f64`.
///
/// The output of the kernel has the same width as its input, so every
/// public entry point is generic over this trait rather than inspecting
/// the element type at runtime.
pub trait Sample: sealed::Sealed + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The "undefined" sentinel.
    fn nan() -> Self;

    fn is_nan(self) -> bool;

    /// Strictly greater than zero.
    fn is_strictly_positive(self) -> bool;

    /// Strictly less than zero.
    fn is_strictly_negative(self) -> bool;

    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_sample {
    ($t:ty) => {
        impl Sample for $t {
            #[inline]
            fn nan() -> Self {
                <$t>::NAN
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_strictly_positive(self) -> bool {
                self > 0.0
            }

            #[inline]
            fn is_strictly_negative(self) -> bool {
                self < 0.0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_sample!(f32);
impl_sample!(f64);
