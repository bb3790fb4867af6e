pub mod corpus;
pub mod scoring;
pub mod similarity;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;
use std::time::Instant;

use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{corpus::Corpus, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, token::TokenSet};

/// Feature space of a loaded catalog.
///
/// Holds the vocabulary with document frequencies, the IDF vector and one
/// L2-normalized TF-IDF vector per item, in item order. Built once from the
/// whole catalog and never mutated afterwards.
///
/// `FeatureSpace<N, E>` generic parameters:
/// - `N`: vector element type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine (`DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct FeatureSpace<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// vocabulary and document frequencies
    pub corpus: Corpus,
    /// IDF per dimension
    pub idf: Vec<N>,
    /// one normalized vector per document
    pub vectors: Vec<ZeroSpVec<N>>,
    _marker: PhantomData<E>,
}

impl<N, E> FeatureSpace<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Build the feature space from every document's token set.
    /// Document `i` of the input gets vector `i`.
    pub fn build<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenSet>,
    {
        let start = Instant::now();
        let docs: Vec<&TokenSet> = docs.into_iter().collect();

        let mut corpus = Corpus::new();
        for tokens in &docs {
            corpus.add_set(&tokens.token_set_ref_str());
        }
        corpus.sort_vocabulary();
        let idf = E::idf_vec(&corpus);

        let vectors: Vec<ZeroSpVec<N>> = docs
            .par_iter()
            .map(|tokens| {
                let mut vec = E::tfidf_vec(tokens, &corpus, &idf);
                vec.l2_normalize();
                vec.shrink_to_fit();
                vec
            })
            .collect();

        debug!(
            docs = vectors.len(),
            vocabulary = corpus.vocab_size(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "feature space built"
        );

        Self {
            corpus,
            idf,
            vectors,
            _marker: PhantomData,
        }
    }
}

impl<N, E> FeatureSpace<N, E>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// number of documents
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// vocabulary size, the dimension of every vector
    #[inline]
    pub fn dim(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// vocabulary tokens in dimension order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.corpus.tokens()
    }

    /// Get the feature vector of a document
    #[inline]
    pub fn vector(&self, doc: usize) -> Option<&ZeroSpVec<N>> {
        self.vectors.get(doc)
    }

    /// IDF weight of a token, `None` when out of vocabulary
    pub fn idf_of(&self, token: &str) -> Option<N> {
        self.corpus
            .token_index(token)
            .and_then(|idx| self.idf.get(idx).copied())
    }

    /// normalized weight of `token` in document `doc`
    pub fn weight(&self, doc: usize, token: &str) -> Option<N> {
        let idx = self.corpus.token_index(token)?;
        self.vector(doc).and_then(|v| v.get(idx).copied())
    }
}
