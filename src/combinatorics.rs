//! Binomial coefficients.
//!
//! Small arguments are answered from a Pascal's-triangle table built once on
//! first use and shared by every thread afterwards. Larger arguments fall back
//! to the multiplicative formula in `u128`.

use std::sync::OnceLock;
use tracing::debug;

/// Rows `0..PASCAL_ROWS` are tabulated; row 67 is the last whose entries all
/// fit in a `u64`.
pub const PASCAL_ROWS: usize = 68;

type PascalTable = [[u64; PASCAL_ROWS]; PASCAL_ROWS];

static PASCAL: OnceLock<Box<PascalTable>> = OnceLock::new();

fn pascal() -> &'static PascalTable {
    PASCAL.get_or_init(|| {
        let mut table = Box::new([[0u64; PASCAL_ROWS]; PASCAL_ROWS]);
        for n in 0..PASCAL_ROWS {
            table[n][0] = 1;
            for k in 1..=n {
                table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            }
        }
        debug!(rows = PASCAL_ROWS, "built binomial coefficient table");
        table
    })
}

/// Number of ways to choose `k` items out of `n`.
///
/// `k > n` yields `Some(0)`. Returns `None` when the result does not fit a
/// `u64`.
///
/// ```
/// # use strkit::n_choose_k;
/// assert_eq!(n_choose_k(5, 2), Some(10));
/// assert_eq!(n_choose_k(67, 33), Some(14_226_520_737_620_288_370));
/// assert_eq!(n_choose_k(200, 100), None);
/// ```
pub fn n_choose_k(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    if n < PASCAL_ROWS as u64 {
        return Some(pascal()[n as usize][k as usize]);
    }

    // After step i, acc == C(n - k + i, i), so every division is exact.
    let mut acc: u128 = 1;
    for i in 1..=u128::from(k) {
        acc = acc.checked_mul(u128::from(n - k) + i)? / i;
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    Some(acc as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(n_choose_k(0, 0), Some(1));
        assert_eq!(n_choose_k(1, 0), Some(1));
        assert_eq!(n_choose_k(1, 1), Some(1));
        assert_eq!(n_choose_k(10, 3), Some(120));
        assert_eq!(n_choose_k(3, 5), Some(0));
    }

    #[test]
    fn test_symmetry() {
        for n in 0..PASCAL_ROWS as u64 {
            for k in 0..=n {
                assert_eq!(n_choose_k(n, k), n_choose_k(n, n - k));
            }
        }
    }

    #[test]
    fn test_fallback_matches_table_recurrence() {
        // C(68, k) = C(67, k - 1) + C(67, k)
        for k in 1..=10 {
            let expected = n_choose_k(67, k - 1).unwrap() + n_choose_k(67, k).unwrap();
            assert_eq!(n_choose_k(68, k), Some(expected));
        }
    }

    #[test]
    fn test_large() {
        assert_eq!(n_choose_k(1_000_000, 1), Some(1_000_000));
        assert_eq!(n_choose_k(1_000_000, 2), Some(499_999_500_000));
        assert_eq!(n_choose_k(u64::MAX, u64::MAX), Some(1));
        assert_eq!(n_choose_k(100, 50), None);
    }
}
