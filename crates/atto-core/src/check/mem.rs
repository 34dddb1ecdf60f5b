//! String-prefix, memory and zero-fill checks over byte slices.
//!
//! The length given to a memory check must fit in every buffer it
//! covers. A length running past the end of a buffer fails the check
//! instead of reading out of bounds.

/// Compares `a` and `b` like C `strncmp(a, b, maxlen) == 0`.
///
/// Comparison stops after `maxlen` bytes or at the first NUL. A byte past
/// the end of a slice reads as NUL, so `"abc"` and `"abc\0def"` are equal
/// for every `maxlen`.
pub fn str_equal_prefix(a: &[u8], b: &[u8], maxlen: usize) -> bool {
    for i in 0..maxlen {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return false;
        }
        if x == 0 {
            return true;
        }
    }
    true
}

/// The first `len` bytes of `a` and `b` are identical.
pub fn mem_equal(a: &[u8], b: &[u8], len: usize) -> bool {
    match (a.get(..len), b.get(..len)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// At least one of the first `len` bytes differs between `a` and `b`.
pub fn mem_not_equal(a: &[u8], b: &[u8], len: usize) -> bool {
    match (a.get(..len), b.get(..len)) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}

/// Every one of the first `len` bytes is zero. Vacuously true for `len == 0`.
pub fn all_zero(bytes: &[u8], len: usize) -> bool {
    bytes
        .get(..len)
        .is_some_and(|range| range.iter().all(|&b| b == 0))
}

/// At least one of the first `len` bytes is non-zero.
pub fn not_all_zero(bytes: &[u8], len: usize) -> bool {
    bytes
        .get(..len)
        .is_some_and(|range| range.iter().any(|&b| b != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strncmp_prefix_semantics() {
        let a = b"hello\0";
        let b = b"hello\0";
        for n in 0..=8 {
            assert!(str_equal_prefix(a, b, n));
        }
        assert!(str_equal_prefix(b"", b"", 0));
        assert!(!str_equal_prefix(a, b"HELLO\0", 5));
        assert!(str_equal_prefix(b"helloworld", b"helloWORLD", 5));
        assert!(!str_equal_prefix(b"helloworld", b"helloWORLD", 6));
    }

    #[test]
    fn strncmp_stops_at_nul() {
        assert!(str_equal_prefix(b"abc\0xyz", b"abc\0123", 7));
        assert!(str_equal_prefix(b"abc", b"abc\0def", 100));
        assert!(!str_equal_prefix(b"abc", b"abcd", 4));
    }

    #[test]
    fn memeq_exact_length() {
        let a = [255u8; 5];
        let b = [255u8; 5];
        let c = [255u8, 255, 255, 255, 55];
        for n in 0..=5 {
            assert!(mem_equal(&a, &b, n));
        }
        assert!(mem_equal(&a, &c, 4));
        assert!(!mem_equal(&a, &c, 5));
        assert!(mem_equal(b"abcd", b"abcd", 2));
    }

    #[test]
    fn memeq_does_not_stop_at_nul() {
        assert!(!mem_equal(b"a\0b", b"a\0c", 3));
        assert!(mem_not_equal(b"a\0b", b"a\0c", 3));
    }

    #[test]
    fn memneq() {
        let a = [255u8; 5];
        let c = [11u8, 22, 33, 44, 55];
        for n in 1..=5 {
            assert!(mem_not_equal(&a, &c, n));
        }
        assert!(!mem_not_equal(&a, &c, 0));
        assert!(mem_not_equal(b"abcd", b"abcD", 4));
        assert!(!mem_not_equal(b"abcd", b"abcD", 3));
    }

    #[test]
    fn out_of_range_length_fails_both_ways() {
        assert!(!mem_equal(b"ab", b"abc", 3));
        assert!(!mem_not_equal(b"ab", b"abc", 3));
        assert!(!all_zero(&[0, 0], 3));
        assert!(!not_all_zero(&[1, 1], 3));
    }

    #[test]
    fn zeros() {
        let a = [0u8; 5];
        for n in 0..=5 {
            assert!(all_zero(&a, n));
        }
        for i in 0..5 {
            let mut flipped = a;
            flipped[i] = 1;
            assert!(!all_zero(&flipped, 5));
            assert!(all_zero(&flipped, i));
        }
        assert!(all_zero(&[0, 0, 255, 255, 255], 2));
        assert!(all_zero(b"\0\0\0", 3));
    }

    #[test]
    fn nzeros() {
        let c = [11u8, 22, 33, 0, 0];
        assert!(not_all_zero(&[0, 0, 255, 255, 255], 3));
        assert!(not_all_zero(&c, 3));
        assert!(not_all_zero(&c[2..], 1));
        assert!(not_all_zero(b"\0\0c\0", 4));
        assert!(!not_all_zero(&[0u8; 5], 5));
        assert!(!not_all_zero(&c, 0));
    }
}
