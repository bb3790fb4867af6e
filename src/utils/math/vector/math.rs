use std::cmp::Ordering;
use std::ops::AddAssign;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product of two sparse vectors
    ///
    /// # Arguments
    /// * `other` - the other vector, same dimension
    ///
    /// # Returns
    /// * `R` - Σ(a_i * b_i) accumulated in `R`
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        if self.nnz() == 0 || other.nnz() == 0 {
            return result;
        }

        // both sides are sorted by index, walk them like a merge
        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    let (x, y): (R, R) = ((*va).into(), (*vb).into());
                    result += x * y;
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// ||a||
    #[inline]
    pub fn norm(&self) -> N {
        self.raw_iter()
            .fold(N::zero(), |acc, (_, v)| acc + *v * *v)
            .sqrt()
    }

    /// Scale the vector to unit L2 length in place.
    /// A zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm.is_zero() || !norm.is_finite() {
            return;
        }
        for v in self.vals_mut() {
            *v = *v / norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = ZeroSpVec::from_pairs(6, vec![(0, 1.0_f64), (2, 2.0), (5, 3.0)]);
        let b = ZeroSpVec::from_pairs(6, vec![(2, 4.0_f64), (3, 9.0), (5, 1.0)]);
        let d: f64 = a.dot(&b);
        assert!(approx(d, 2.0 * 4.0 + 3.0 * 1.0));
    }

    #[test]
    fn dot_with_empty_is_zero() {
        let a = ZeroSpVec::from_pairs(3, vec![(1, 5.0_f64)]);
        let b: ZeroSpVec<f64> = ZeroSpVec::from_pairs(3, vec![]);
        assert_eq!(a.dot::<f64>(&b), 0.0);
    }

    #[test]
    fn l2_normalize_gives_unit_length() {
        let mut a = ZeroSpVec::from_pairs(4, vec![(0, 3.0_f64), (3, 4.0)]);
        a.l2_normalize();
        assert!(approx(a.norm(), 1.0));
        assert!(approx(a[0], 0.6));
        assert!(approx(a[3], 0.8));
    }

    #[test]
    fn l2_normalize_leaves_zero_vector_alone() {
        let mut a: ZeroSpVec<f64> = ZeroSpVec::from_pairs(4, vec![]);
        a.l2_normalize();
        assert_eq!(a.nnz(), 0);
        assert_eq!(a.norm(), 0.0);
    }
}
