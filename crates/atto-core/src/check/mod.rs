//! Check predicates.
//!
//! Pure functions deciding whether a single assertion passes. They hold no
//! state and emit nothing; the assertion macros feed their verdict into a
//! [`TestContext`](crate::TestContext).

pub mod bits;
pub mod cmp;
pub mod float;
pub mod mem;

pub use bits::{flag_not_set, flag_set};
pub use cmp::{equal, greater, greater_or_equal, less, less_or_equal, not_equal};
pub use float::{
    AttoFloat, approx_equal, is_finite, is_infinite, is_minus_infinity, is_nan, is_not_finite,
    is_plus_infinity, within_delta,
};
pub use mem::{all_zero, mem_equal, mem_not_equal, not_all_zero, str_equal_prefix};
