//! Floating-point tolerance and IEEE-754 classification checks.

/// Floating-point types the tolerance and classification checks accept.
pub trait AttoFloat: Copy + PartialOrd + core::ops::Sub<Output = Self> {
    fn abs(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_sign_positive(self) -> bool;
}

macro_rules! impl_atto_float {
    ($($ty:ty),*) => {$(
        impl AttoFloat for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            fn is_sign_positive(self) -> bool {
                <$ty>::is_sign_positive(self)
            }
        }
    )*};
}

impl_atto_float!(f32, f64);

/// `|a - b| <= tolerance`. Any NaN operand fails.
#[inline]
pub fn approx_equal<F: AttoFloat>(a: F, b: F, tolerance: F) -> bool {
    (a - b).abs() <= tolerance
}

/// `|a - b| <= |delta|`; the sign of `delta` is irrelevant.
#[inline]
pub fn within_delta<F: AttoFloat>(a: F, b: F, delta: F) -> bool {
    (a - b).abs() <= delta.abs()
}

#[inline]
pub fn is_nan<F: AttoFloat>(x: F) -> bool {
    x.is_nan()
}

/// Infinite of either sign.
#[inline]
pub fn is_infinite<F: AttoFloat>(x: F) -> bool {
    x.is_infinite()
}

#[inline]
pub fn is_plus_infinity<F: AttoFloat>(x: F) -> bool {
    x.is_infinite() && x.is_sign_positive()
}

#[inline]
pub fn is_minus_infinity<F: AttoFloat>(x: F) -> bool {
    x.is_infinite() && !x.is_sign_positive()
}

/// Neither infinite nor NaN.
#[inline]
pub fn is_finite<F: AttoFloat>(x: F) -> bool {
    x.is_finite()
}

/// Infinite or NaN.
#[inline]
pub fn is_not_finite<F: AttoFloat>(x: F) -> bool {
    !x.is_finite()
}
