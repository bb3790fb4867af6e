use std::fmt;

use serde::Serialize;

use crate::catalog::ItemId;

/// Requested number of recommendations.
///
/// Any number is accepted. `clamp_to` truncates toward zero and then
/// forces the value into `[1, available]`; NaN and negatives become 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopN(f64);

impl TopN {
    pub fn new(requested: f64) -> Self {
        TopN(requested)
    }

    /// the raw request
    #[inline]
    pub fn requested(&self) -> f64 {
        self.0
    }

    /// Clamp against the number of ranked candidates.
    ///
    /// ```
    /// use tag_recommender::TopN;
    /// assert_eq!(TopN::from(0).clamp_to(4), 1);
    /// assert_eq!(TopN::from(2.9).clamp_to(4), 2);
    /// assert_eq!(TopN::from(1_000_000).clamp_to(4), 4);
    /// ```
    pub fn clamp_to(self, available: usize) -> usize {
        // float -> usize casts saturate, NaN becomes 0
        let requested = self.0.trunc() as usize;
        requested.min(available).max(1)
    }
}

impl Default for TopN {
    fn default() -> Self {
        TopN(5.0)
    }
}

macro_rules! top_n_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TopN {
                fn from(v: $t) -> Self {
                    TopN(v as f64)
                }
            }
        )*
    };
}

top_n_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// the item a query resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    pub id: ItemId,
    pub name: String,
}

/// one ranked neighbour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: ItemId,
    pub name: String,
    /// cosine similarity to the matched item, in `[0, 1]`
    pub score: f64,
}

/// Answer to one query: the matched item and its ranked neighbours,
/// best first, the matched item itself never included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// query as typed
    pub query: String,
    pub matched: ItemRef,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// `(name, id)` pairs in rank order
    pub fn pairs(&self) -> Vec<(&str, ItemId)> {
        self.recommendations
            .iter()
            .map(|r| (r.name.as_str(), r.id))
            .collect()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.recommendations.iter().map(|r| r.id).collect()
    }
}

impl fmt::Display for RecommendationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Showing recommendations for : {}", self.matched.name)?;
        for rec in &self.recommendations {
            writeln!(f, "{:.6}\t{}\t{}", rec.score, rec.id, rec.name)?;
        }
        Ok(())
    }
}
