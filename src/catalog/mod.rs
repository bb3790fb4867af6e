pub mod loader;
pub mod normalizer;
pub mod record;

use serde::Serialize;

use crate::vectorizer::token::TokenSet;

pub use record::RawRecord;

/// Stable row index, assigned in load order
pub type ItemId = usize;

/// One normalized catalog entry.
///
/// Every tag field is a (possibly empty) lowercase token set, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// cleaned display name, used for matching
    pub name: String,
    pub genres: TokenSet,
    pub categories: TokenSet,
    pub tags: TokenSet,
    pub developers: TokenSet,
    /// canonical `;`-joined developer field, original casing
    pub developer_tags: String,
    /// analyzer output over all four fields, what gets weighted
    pub tokens: TokenSet,
}
