use num::{Float, Num};

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{corpus::Corpus, token::TokenSet};

pub trait TFIDFEngine<N>
where
    N: Num,
{
    /// Generate the IDF vector
    /// # Arguments
    /// * `corpus` - corpus, its vocabulary order is the dimension order
    /// # Returns
    /// * `Vec<N>` - one IDF weight per vocabulary dimension
    fn idf_vec(corpus: &Corpus) -> Vec<N>;

    /// Generate the (unnormalized) TF-IDF vector of one document
    /// # Arguments
    /// * `tokens` - the document's deduplicated tokens
    /// * `corpus` - corpus the vocabulary comes from
    /// * `idf` - output of `idf_vec` for the same corpus
    fn tfidf_vec(tokens: &TokenSet, corpus: &Corpus, idf: &[N]) -> ZeroSpVec<N>;
}

/// Default TF-IDF engine
///
/// - tf is binary presence (tokens are already deduplicated)
/// - idf is smoothed: `ln((1 + n) / (1 + df)) + 1`
///
/// Works for `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// smoothed idf of a token seen in `doc_freq` of `doc_num` documents
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        corpus
            .iter()
            .map(|(_, doc_freq)| num::cast::<f64, N>(Self::idf_calc(doc_num, doc_freq)).unwrap_or_else(N::zero))
            .collect()
    }

    fn tfidf_vec(tokens: &TokenSet, corpus: &Corpus, idf: &[N]) -> ZeroSpVec<N> {
        let pairs: Vec<(usize, N)> = tokens
            .iter()
            .filter_map(|token| corpus.token_index(token))
            .filter_map(|idx| idf.get(idx).map(|w| (idx, *w)))
            .collect();
        ZeroSpVec::from_pairs(corpus.vocab_size(), pairs)
    }
}
