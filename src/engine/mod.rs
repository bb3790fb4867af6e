pub mod query;
pub mod shared;

use std::borrow::Borrow;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{normalizer::normalize, Item, ItemId, RawRecord};
use crate::error::{RecommendError, Result};
use crate::vectorizer::{scoring::Hits, similarity::SimilarityMatrix, FeatureSpace};

pub use query::{ItemRef, Recommendation, RecommendationResult, TopN};
pub use shared::SharedEngine;

/// A loaded catalog, ready to answer queries.
///
/// Bundles the items, their feature space (vocabulary + vectors) and the
/// similarity matrix as one immutable value. Everything is computed in
/// `load`; afterwards the engine is read-only and can be shared between
/// threads freely. Loading another catalog means building a new `Engine`.
#[derive(Debug)]
pub struct Engine {
    items: Vec<Item>,
    /// lowercased names, same order as `items`
    match_names: Vec<String>,
    space: FeatureSpace<f64>,
    matrix: SimilarityMatrix,
    build_time: Duration,
}

/// Summary numbers of a loaded engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStats {
    pub items: usize,
    pub vocabulary: usize,
    pub build_ms: f64,
}

impl Engine {
    /// Normalize every record, build the feature space and the similarity
    /// matrix. Record `i` becomes item `i`.
    ///
    /// Fails with `EmptyCorpus` when there are no records.
    pub fn load<I>(records: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<RawRecord>,
    {
        let start = Instant::now();
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .map(|(id, record)| normalize(id, record.borrow()))
            .collect();
        if items.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let space: FeatureSpace<f64> = FeatureSpace::build(items.iter().map(|item| &item.tokens));
        let matrix = SimilarityMatrix::build(&space.vectors);
        let match_names = items.iter().map(|item| item.name.to_lowercase()).collect();
        let build_time = start.elapsed();

        info!(
            items = items.len(),
            vocabulary = space.dim(),
            build_ms = build_time.as_secs_f64() * 1000.0,
            "engine loaded"
        );

        Ok(Self {
            items,
            match_names,
            space,
            matrix,
            build_time,
        })
    }

    /// First item, in load order, whose name contains `partial_name`
    /// ignoring case. An empty query matches nothing.
    pub fn resolve_name(&self, partial_name: &str) -> Option<ItemId> {
        if partial_name.is_empty() {
            return None;
        }
        let needle = partial_name.to_lowercase();
        self.match_names
            .iter()
            .position(|name| name.contains(&needle))
    }

    /// Recommend up to `top_n` items similar to the first item matching
    /// `query`.
    ///
    /// The matched item's row is ranked by descending score, ties in item
    /// order, then the matched item is dropped and the list cut to the
    /// clamped `top_n`.
    pub fn recommend(&self, query: &str, top_n: impl Into<TopN>) -> Result<RecommendationResult> {
        let Some(id) = self.resolve_name(query) else {
            debug!(query, "no match");
            return Err(RecommendError::NoMatchFound {
                query: query.to_string(),
            });
        };

        // resolve_name only yields ids of loaded items and the matrix has a
        // row for each of them, so the fallback is never taken
        let mut hits = self
            .matrix
            .row_hits(id)
            .unwrap_or_else(|| Hits::new(Vec::new()));
        hits.sort_by_score().exclude(&id);
        let n = top_n.into().clamp_to(hits.len());
        hits.truncate(n);

        let matched = &self.items[id];
        debug!(query, matched = %matched.name, id, returned = hits.len(), "query resolved");

        Ok(RecommendationResult {
            query: query.to_string(),
            matched: ItemRef {
                id,
                name: matched.name.clone(),
            },
            recommendations: hits
                .into_iter()
                .map(|(j, score)| Recommendation {
                    id: j,
                    name: self.items[j].name.clone(),
                    score,
                })
                .collect(),
        })
    }

    /// `(j, score)` for every other item, ascending `j`
    pub fn similarity_row(&self, id: ItemId) -> Option<Hits<ItemId>> {
        self.matrix.similarity_row(id)
    }

    /// cosine similarity of two items
    pub fn similarity(&self, i: ItemId, j: ItemId) -> Option<f64> {
        self.matrix.get(i, j)
    }

    #[inline]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// always false for a loaded engine
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.space.vocabulary()
    }

    #[inline]
    pub fn feature_space(&self) -> &FeatureSpace<f64> {
        &self.space
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            items: self.items.len(),
            vocabulary: self.space.dim(),
            build_ms: self.build_time.as_secs_f64() * 1000.0,
        }
    }
}

/// Build an engine from a corpus, see [`Engine::load`]
pub fn load<I>(corpus: I) -> Result<Engine>
where
    I: IntoIterator,
    I::Item: Borrow<RawRecord>,
{
    Engine::load(corpus)
}

/// Query an engine, see [`Engine::recommend`]
pub fn recommend(handle: &Engine, query: &str, top_n: impl Into<TopN>) -> Result<RecommendationResult> {
    handle.recommend(query, top_n)
}
