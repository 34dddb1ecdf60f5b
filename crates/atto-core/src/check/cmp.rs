//! Equality and ordering checks.
//!
//! Operands only need to be comparable with each other, so `u8` can be
//! checked against `u8` and `String` against `&str` without conversions.

#[inline]
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a == b
}

#[inline]
pub fn not_equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a != b
}

#[inline]
pub fn greater<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a > b
}

#[inline]
pub fn greater_or_equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a >= b
}

#[inline]
pub fn less<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a < b
}

#[inline]
pub fn less_or_equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a <= b
}
