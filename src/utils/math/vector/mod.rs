pub mod math;

use std::fmt::{self, Debug};
use std::ops::Index;

use num::Num;

/// ZeroSpVec is a sparse vector where zero elements are implicit.
/// It keeps `inds` (logical positions) and `vals` (element values)
/// side by side.
///
/// `inds` is always sorted ascending and never holds a zero value.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
            zero: N::zero(),
        }
    }

    /// `cap` is the expected number of non-zero elements, not the dimension
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
            zero: N::zero(),
        }
    }

    /// Build a vector of dimension `len` from `(index, value)` pairs.
    ///
    /// Pairs may come in any order. Zero values and indices `>= len` are dropped,
    /// and if an index repeats the last pair wins.
    pub fn from_pairs(len: usize, mut pairs: Vec<(usize, N)>) -> Self {
        pairs.retain(|(idx, val)| *idx < len && !val.is_zero());
        pairs.sort_by_key(|(idx, _)| *idx);
        let mut vec = Self::with_capacity(pairs.len());
        vec.len = len;
        for (idx, val) in pairs {
            if vec.inds.last() == Some(&idx) {
                if let Some(last) = vec.vals.last_mut() {
                    *last = val;
                }
                continue;
            }
            vec.inds.push(idx);
            vec.vals.push(val);
        }
        vec
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals.get(pos),
            Err(_) => Some(&self.zero),
        }
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    /// Iterate stored elements as `(index, &value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub(crate) fn vals_mut(&mut self) -> &mut [N] {
        &mut self.vals
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<usize> for ZeroSpVec<N>
where
    N: Num,
{
    type Output = N;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(val) => val,
            None => panic!("index out of bounds: the len is {} but the index is {}", self.len, index),
        }
    }
}

impl<N: Num + Debug> Debug for ZeroSpVec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec {{ len: {}, nnz: {} }} [", self.len, self.nnz())?;
            for (idx, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", idx, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
