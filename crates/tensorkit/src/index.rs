//! Multi-index linearization.
//!
//! A rank-`R` multi-index over a fixed extent `dim` is treated as the
//! digits of a base-`dim` number, least-significant digit first:
//!
//! ```text
//! offset = indices[0] + indices[1]*dim + indices[2]*dim^2 + ...
//! ```
//!
//! The least-significant-first ordering lets callers grow an offset
//! incrementally while walking index tuples, without recomputing the
//! whole sum.

/// Integer power, `base^exp`.
///
/// # Examples
///
/// ```
/// use tensorkit::index::pow;
///
/// assert_eq!(pow(3, 0), 1);
/// assert_eq!(pow(3, 4), 81);
/// assert_eq!(pow(1, 7), 1);
/// ```
pub const fn pow(base: usize, exp: u32) -> usize {
    base.pow(exp)
}

/// Number of components of a tensor with the given extent and rank,
/// i.e. `dim^rank`.
///
/// # Examples
///
/// ```
/// use tensorkit::index::n_components;
///
/// assert_eq!(n_components(3, 2), 9);
/// assert_eq!(n_components(2, 0), 1); // rank 0 is a scalar
/// ```
pub const fn n_components(dim: usize, rank: u32) -> usize {
    pow(dim, rank)
}

/// Convert a rank-`RANK` multi-index to a flat offset in `[0, dim^RANK)`.
///
/// Each index must be `< dim`; this is checked in debug builds only, so
/// release builds may silently return an offset addressing the wrong
/// component. Callers must not rely on in-range clamping.
///
/// # Examples
///
/// ```
/// use tensorkit::index::linearize;
///
/// // Least-significant digit first: (i, j) -> i + dim*j.
/// assert_eq!(linearize(3, &[0, 0]), 0);
/// assert_eq!(linearize(3, &[1, 0]), 1);
/// assert_eq!(linearize(3, &[0, 1]), 3);
/// assert_eq!(linearize(3, &[2, 2]), 8);
/// assert_eq!(linearize(2, &[1, 0, 1, 1]), 1 + 4 + 8);
/// ```
#[inline]
pub fn linearize<const RANK: usize>(dim: usize, indices: &[usize; RANK]) -> usize {
    let mut offset = 0;
    let mut stride = 1;
    for &index in indices.iter() {
        debug_assert!(
            index < dim,
            "index {index} out of range for extent {dim}"
        );
        offset += index * stride;
        stride *= dim;
    }
    offset
}
