//! Per-row kernel bodies shared by every host backend
//!
//! Backends differ only in how rows are distributed; the arithmetic of one
//! output row, including its accumulation order, lives here.

use sell_core::{entry_offset, SellIndex, SellValue};

use crate::dense::Dense;
use crate::matrix::SlicedEllMatrix;

/// `out := A[row, :] * B`
#[inline]
pub(crate) fn spmv_row<V: SellValue, I: SellIndex, const S: usize>(
    a: &SlicedEllMatrix<V, I, S>,
    slice: usize,
    row_in_slice: usize,
    b: &Dense<V>,
    out: &mut [V],
) {
    out.fill(V::zero());
    accumulate_row(a, slice, row_in_slice, b, out, |val| val);
}

/// `out := alpha * A[row, :] * B + beta * out`
///
/// A zero `beta` overwrites `out` instead of scaling it, so non-finite
/// prior contents are discarded.
#[inline]
pub(crate) fn advanced_spmv_row<V: SellValue, I: SellIndex, const S: usize>(
    alpha: V,
    a: &SlicedEllMatrix<V, I, S>,
    slice: usize,
    row_in_slice: usize,
    b: &Dense<V>,
    beta: V,
    out: &mut [V],
) {
    if beta.is_zero() {
        out.fill(V::zero());
    } else {
        for o in out.iter_mut() {
            *o *= beta;
        }
    }
    accumulate_row(a, slice, row_in_slice, b, out, |val| alpha * val);
}

/// `out := A[row, :]` densified, duplicate columns summed
#[inline]
pub(crate) fn dense_row<V: SellValue, I: SellIndex, const S: usize>(
    a: &SlicedEllMatrix<V, I, S>,
    slice: usize,
    row_in_slice: usize,
    out: &mut [V],
) {
    out.fill(V::zero());
    let set = a.slice_sets()[slice];
    let (values, col_idxs) = (a.values(), a.col_idxs());
    for i in 0..a.slice_lengths()[slice] {
        let offset = entry_offset(row_in_slice, set, i, S);
        out[col_idxs[offset].as_usize()] += values[offset];
    }
}

#[inline(always)]
fn accumulate_row<V: SellValue, I: SellIndex, const S: usize>(
    a: &SlicedEllMatrix<V, I, S>,
    slice: usize,
    row_in_slice: usize,
    b: &Dense<V>,
    out: &mut [V],
    scale: impl Fn(V) -> V,
) {
    let set = a.slice_sets()[slice];
    let (values, col_idxs) = (a.values(), a.col_idxs());
    for i in 0..a.slice_lengths()[slice] {
        let offset = entry_offset(row_in_slice, set, i, S);
        let val = scale(values[offset]);
        let b_row = b.row(col_idxs[offset].as_usize());
        for (o, &b_val) in out.iter_mut().zip(b_row) {
            *o += val * b_val;
        }
    }
}
