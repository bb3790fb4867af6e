//! A content-based game recommender built on a TF-IDF feature space.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod logging;
pub mod utils;
pub mod vectorizer;

/// Recommendation Engine
/// The top-level struct of this crate.
/// It normalizes a catalog of raw records, weights every item's tags with
/// TF-IDF and precomputes the cosine similarity of every pair of items.
///
/// Internally, it holds:
/// - The normalized items
/// - The vocabulary with document frequencies
/// - One L2-normalized TF-IDF vector per item
/// - The dense N×N similarity matrix
///
/// An `Engine` is immutable once loaded and can be queried from many
/// threads at once. To swap catalogs under running queries use
/// `SharedEngine`.
pub use engine::Engine;

/// Engine holder with atomic reload
/// Readers take an `Arc<Engine>` snapshot; `reload` builds a new engine
/// and replaces the old one in a single step.
pub use engine::SharedEngine;

/// Query results
/// - `RecommendationResult`: the matched item and its ranked neighbours
/// - `Recommendation`: one neighbour with its score
/// - `ItemRef`: id and name of the matched item
/// - `TopN`: requested result count, clamped rather than rejected
pub use engine::{ItemRef, Recommendation, RecommendationResult, TopN};

/// Entry points for callers that prefer free functions
pub use engine::{load, recommend};

/// Catalog items
/// `RawRecord` is one row as read from the data source, `Item` is the
/// normalized form the engine works on.
pub use catalog::{Item, ItemId, RawRecord};

/// Deduplicated token set of one item
pub use vectorizer::token::TokenSet;

/// Feature space and its TF-IDF calculation engine
/// `TFIDFEngine` is the seam for other weighting schemes,
/// `DefaultTFIDFEngine` uses binary tf and smoothed idf.
pub use vectorizer::{tfidf::{DefaultTFIDFEngine, TFIDFEngine}, FeatureSpace};

/// Error type of this crate
pub use error::{RecommendError, Result};
