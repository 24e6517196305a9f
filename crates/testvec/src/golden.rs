//! Golden reference results for elementwise kernels.

use crate::Element;

/// Elementwise product of two vectors, under the overflow policy of `T`.
///
/// For `i8` this is the same truncating multiplication a RISC-V `vmul.vv`
/// performs at `SEW=8`.
///
/// # Errors
///
/// * If `a` and `b` have different lengths.
pub fn multiply<T: Element>(a: &[T], b: &[T]) -> Result<Vec<T>, String> {
    if a.len() != b.len() {
        return Err(format!(
            "Cannot multiply vectors of different lengths: {} and {}",
            a.len(),
            b.len()
        ));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| x.mul_wrapping(y)).collect())
}

/// Finds the first position where `result` differs from `golden` by more
/// than `tolerance`.
///
/// Differences are computed exactly in `T::AbsDiff`, so integer differences
/// never wrap. Returns `None` if every element is within tolerance.
///
/// # Errors
///
/// * If `result` and `golden` have different lengths.
pub fn first_mismatch<T: Element>(result: &[T], golden: &[T], tolerance: T::AbsDiff) -> Result<Option<usize>, String> {
    if result.len() != golden.len() {
        return Err(format!(
            "Result has {} elements but the golden vector has {}",
            result.len(),
            golden.len()
        ));
    }
    Ok(result
        .iter()
        .zip(golden)
        .position(|(&r, &g)| r.abs_diff_wide(g) > tolerance))
}
