use std::time::Instant;

use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::scoring::Hits;

/// Dense N×N cosine similarity matrix, row major, `f64` cells.
///
/// Input vectors are L2-normalized, so each cell is a plain dot product.
/// Scores are clamped to `[0, 1]` and the diagonal is fixed at `1.0`,
/// zero vectors included.
#[derive(Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pairwise score. Rows are filled in parallel; the dot
    /// product walks both vectors in index order so `M[i][j] == M[j][i]`
    /// bit for bit.
    pub fn build<N>(vectors: &[ZeroSpVec<N>]) -> Self
    where
        N: Float + Into<f64> + Send + Sync,
    {
        let start = Instant::now();
        let n = vectors.len();
        let mut scores = vec![0.0_f64; n * n];
        if n > 0 {
            scores.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                let a = &vectors[i];
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        1.0
                    } else {
                        a.dot::<f64>(&vectors[j]).clamp(0.0, 1.0)
                    };
                }
            });
        }
        debug!(
            n,
            bytes = n * n * std::mem::size_of::<f64>(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "similarity matrix built"
        );
        Self { n, scores }
    }

    /// number of rows (= columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `M[i][j]`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.scores.get(i * self.n + j).copied()
    }

    /// whole row `i`, self score included
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.n {
            return None;
        }
        self.scores.get(i * self.n..(i + 1) * self.n)
    }

    /// Row `i` as hits over every column, in column order, unsorted
    pub fn row_hits(&self, i: usize) -> Option<Hits<usize>> {
        let row = self.row(i)?;
        Some(Hits::new(
            row.iter().copied().enumerate().collect(),
        ))
    }

    /// `(j, M[i][j])` for every `j != i`, ascending `j`, unsorted by score
    pub fn similarity_row(&self, i: usize) -> Option<Hits<usize>> {
        let mut hits = self.row_hits(i)?;
        hits.exclude(&i);
        Some(hits)
    }
}

impl std::fmt::Debug for SimilarityMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "SimilarityMatrix {} x {} [", self.n, self.n)?;
            for i in 0..self.n {
                let row = &self.scores[i * self.n..(i + 1) * self.n];
                writeln!(f, "    {:?}", row)?;
            }
            write!(f, "]")
        } else {
            f.debug_struct("SimilarityMatrix").field("n", &self.n).finish()
        }
    }
}
