//! Exact integer row reduction to Hermite normal form.
//!
//! Given integer row vectors, [`hermite_normal_form`] brings them into row
//! echelon form using only lattice-preserving operations: swapping rows,
//! adding integer multiples of one row to another, and negating a row. No
//! division ever leaves the integers, so the rank is exact regardless of
//! entry size. Leading entries end up positive and every entry above a
//! leading entry lies in `[0, pivot)`, which makes the result canonical for
//! the lattice spanned by the input rows.
//!
//! All arithmetic is checked; leaving the range of `T` yields
//! [`PeriodicNetError::ArithmeticOverflow`] instead of a wrapped result.

use num_traits::{CheckedNeg, PrimInt, Signed};

use crate::net_error::PeriodicNetError;

/// Result of a Hermite reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HermiteForm<T> {
    /// Reduced rows; rows `rank..` are zero.
    pub reduced: Vec<Vec<T>>,
    /// Unimodular `m x m` transform with `transform * input = reduced`.
    pub transform: Vec<Vec<T>>,
    /// Number of nonzero rows of `reduced`.
    pub rank: usize,
}

impl<T> HermiteForm<T> {
    /// The linearly independent leading rows.
    pub fn independent_rows(&self) -> &[Vec<T>] {
        &self.reduced[..self.rank]
    }
}

/// Row-operation workspace keeping the transform in lockstep with the matrix.
struct Workspace<T> {
    a: Vec<Vec<T>>,
    u: Vec<Vec<T>>,
}

impl<T> Workspace<T>
where
    T: PrimInt + Signed + CheckedNeg,
{
    fn swap(&mut self, i: usize, j: usize) {
        self.a.swap(i, j);
        self.u.swap(i, j);
    }

    fn negate(&mut self, row: usize, col: usize) -> Result<(), PeriodicNetError> {
        let overflow = PeriodicNetError::ArithmeticOverflow { row, col };
        for x in self.a[row].iter_mut().chain(self.u[row].iter_mut()) {
            *x = x.checked_neg().ok_or_else(|| overflow.clone())?;
        }
        Ok(())
    }

    /// `target -= q * source` where `q = floor(a[target][col] / a[source][col])`,
    /// leaving `a[target][col]` with the sign of the source entry and smaller
    /// in magnitude.
    fn reduce(&mut self, col: usize, source: usize, target: usize) -> Result<(), PeriodicNetError> {
        if source == target {
            return Ok(());
        }
        let overflow = || PeriodicNetError::ArithmeticOverflow { row: target, col };
        let q = floor_div(self.a[target][col], self.a[source][col]).ok_or_else(overflow)?;
        if q.is_zero() {
            return Ok(());
        }
        for m in [&mut self.a, &mut self.u] {
            let (src, tgt) = pair_mut(m, source, target);
            for (t, s) in tgt.iter_mut().zip(src.iter()) {
                *t = q
                    .checked_mul(s)
                    .and_then(|qs| t.checked_sub(&qs))
                    .ok_or_else(overflow)?;
            }
        }
        Ok(())
    }
}

/// Shared borrow of row `i` together with a mutable borrow of row `j != i`.
fn pair_mut<T>(m: &mut [Vec<T>], i: usize, j: usize) -> (&Vec<T>, &mut Vec<T>) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = m.split_at_mut(j);
        (&lo[i], &mut hi[0])
    } else {
        let (lo, hi) = m.split_at_mut(i);
        (&hi[0], &mut lo[j])
    }
}

/// `|x|`, saturating at `T::max_value()` for `T::min_value()`.
fn magnitude<T: PrimInt + Signed + CheckedNeg>(x: T) -> T {
    x.checked_neg().map_or(T::max_value(), |neg| neg.max(x))
}

/// Division rounding towards negative infinity; `None` on overflow.
fn floor_div<T: PrimInt + Signed>(a: T, b: T) -> Option<T> {
    let q = a.checked_div(&b)?;
    if (a % b).is_zero() || (a.is_negative() == b.is_negative()) {
        Some(q)
    } else {
        q.checked_sub(&T::one())
    }
}

/// Reduce `matrix` (rows of equal length) to Hermite normal form.
///
/// Column by column, the rows at or below the working row are repeatedly
/// reduced modulo the row holding the smallest nonzero magnitude in that
/// column until only that row is nonzero there. It is then swapped into the
/// working row, made positive, and used to reduce the entries above it. A
/// column with no nonzero entry left is skipped without advancing the row.
/// The final working row is the rank.
pub fn hermite_normal_form<T>(matrix: &[Vec<T>]) -> Result<HermiteForm<T>, PeriodicNetError>
where
    T: PrimInt + Signed + CheckedNeg,
{
    let m = matrix.len();
    let n = matrix.first().map_or(0, Vec::len);
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(PeriodicNetError::RaggedMatrix {
            row,
            expected: n,
            found: r.len(),
        });
    }

    let identity = (0..m)
        .map(|i| {
            (0..m)
                .map(|j| if i == j { T::one() } else { T::zero() })
                .collect()
        })
        .collect();
    let mut ws = Workspace {
        a: matrix.to_vec(),
        u: identity,
    };

    let mut row = 0usize;
    let mut col = 0usize;
    while col < n && row < m {
        let Some(source) = (row..m)
            .filter(|&i| !ws.a[i][col].is_zero())
            .min_by_key(|&i| magnitude(ws.a[i][col]))
        else {
            col += 1;
            continue;
        };

        let mut column_cleared = true;
        for target in row..m {
            ws.reduce(col, source, target)?;
            if target != source && !ws.a[target][col].is_zero() {
                column_cleared = false;
            }
        }
        if !column_cleared {
            // a smaller remainder exists now; pick a new source
            continue;
        }

        ws.swap(source, row);
        if ws.a[row][col].is_negative() {
            ws.negate(row, col)?;
        }
        for target in 0..row {
            ws.reduce(col, row, target)?;
        }
        row += 1;
    }

    Ok(HermiteForm {
        reduced: ws.a,
        transform: ws.u,
        rank: row,
    })
}

/// Exact rank of an integer matrix.
pub fn lattice_rank<T>(matrix: &[Vec<T>]) -> Result<usize, PeriodicNetError>
where
    T: PrimInt + Signed + CheckedNeg,
{
    hermite_normal_form(matrix).map(|h| h.rank)
}
