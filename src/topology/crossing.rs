//! `CrossingVector`: integer boundary-crossing displacement of an edge or loop.
//!
//! Component `i` counts how many times a path wraps around boundary `i` of
//! the periodic box, signed by direction. Edges carry one relative to the
//! direction `node1 → node2`; loops carry the net sum along the cycle.

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

/// A d-dimensional integer boundary-crossing vector.
///
/// Ordering is lexicographic over the components, which is what reduction
/// relies on when it sorts and deduplicates edge rows.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CrossingVector(Vec<i64>);

impl CrossingVector {
    /// The all-zero vector of dimension `dim`.
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        CrossingVector(vec![0; dim])
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// True when no boundary is crossed (net).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    /// Equality up to a global sign flip.
    pub fn eq_up_to_sign(&self, other: &Self) -> bool {
        self == other || *self == -other
    }

    /// Component-wise sum, `None` if any component overflows.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.zip_checked(rhs, i64::checked_add)
    }

    /// Component-wise difference, `None` if any component overflows.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.zip_checked(rhs, i64::checked_sub)
    }

    fn zip_checked(&self, rhs: &Self, op: fn(i64, i64) -> Option<i64>) -> Option<Self> {
        debug_assert_eq!(self.dim(), rhs.dim());
        self.0
            .iter()
            .zip(&rhs.0)
            .map(|(&a, &b)| op(a, b))
            .collect::<Option<Vec<_>>>()
            .map(CrossingVector)
    }
}

impl From<Vec<i64>> for CrossingVector {
    fn from(v: Vec<i64>) -> Self {
        CrossingVector(v)
    }
}

impl From<&[i64]> for CrossingVector {
    fn from(v: &[i64]) -> Self {
        CrossingVector(v.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for CrossingVector {
    fn from(v: [i64; N]) -> Self {
        CrossingVector(v.to_vec())
    }
}

impl Index<usize> for CrossingVector {
    type Output = i64;
    #[inline]
    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

// -----------------------------------------------------------------------------
// Arithmetic (component-wise; operands must share a dimension)
// -----------------------------------------------------------------------------

impl Add for &CrossingVector {
    type Output = CrossingVector;
    fn add(self, rhs: &CrossingVector) -> CrossingVector {
        debug_assert_eq!(self.dim(), rhs.dim());
        CrossingVector(self.0.iter().zip(&rhs.0).map(|(a, b)| a + b).collect())
    }
}

impl Sub for &CrossingVector {
    type Output = CrossingVector;
    fn sub(self, rhs: &CrossingVector) -> CrossingVector {
        debug_assert_eq!(self.dim(), rhs.dim());
        CrossingVector(self.0.iter().zip(&rhs.0).map(|(a, b)| a - b).collect())
    }
}

impl Neg for &CrossingVector {
    type Output = CrossingVector;
    fn neg(self) -> CrossingVector {
        CrossingVector(self.0.iter().map(|c| -c).collect())
    }
}

impl Neg for CrossingVector {
    type Output = CrossingVector;
    fn neg(mut self) -> CrossingVector {
        self.0.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

/// Prints as `[bx, by, bz]`.
impl fmt::Debug for CrossingVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for CrossingVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
