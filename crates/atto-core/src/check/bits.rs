//! Bit-flag checks.
//!
//! A zero mask selects no bits, so `flag_set(v, 0)` never passes and
//! `flag_not_set(v, 0)` always does. Use `flag_not_set` or an equality
//! check against zero to assert that no flag is raised.

use core::ops::BitAnd;

/// True when at least one bit of `mask` is set in `value`.
#[inline]
pub fn flag_set<T>(value: T, mask: T) -> bool
where
    T: BitAnd<Output = T> + PartialEq + Default,
{
    (value & mask) != T::default()
}

/// True when no bit of `mask` is set in `value`.
#[inline]
pub fn flag_not_set<T>(value: T, mask: T) -> bool
where
    T: BitAnd<Output = T> + PartialEq + Default,
{
    (value & mask) == T::default()
}
