use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// keep document count and per-token document frequency
///
/// The position of a token in `token_counts` is its dimension in every
/// feature vector built from this corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// token -> number of documents containing it
    pub token_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            token_counts: IndexMap::new(),
        }
    }

    /// Add one document's tokens.
    /// The tokens must already be deduplicated, each one counts as one document hit.
    pub fn add_set<T>(&mut self, tokens: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for token in tokens {
            let token = token.as_ref();
            match self.token_counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.token_counts.insert(token.into(), 1);
                }
            }
        }
    }

    /// Put the vocabulary in lexical order so dimensions do not depend on
    /// which document introduced a token
    pub fn sort_vocabulary(&mut self) {
        self.token_counts.sort_keys();
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a token
    #[inline]
    pub fn get_token_count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique tokens)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_counts.len()
    }

    /// dimension of a token
    #[inline]
    pub fn token_index(&self, token: &str) -> Option<usize> {
        self.token_counts.get_index_of(token)
    }

    /// every token in dimension order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.token_counts.keys().map(|t| t.as_ref())
    }

    /// `(token, document frequency)` in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.token_counts.iter().map(|(t, c)| (t.as_ref(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["action", "rpg"]);
        corpus.add_set(&["action"]);
        corpus.add_set::<&str>(&[]);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_token_count("action"), 2);
        assert_eq!(corpus.get_token_count("rpg"), 1);
        assert_eq!(corpus.get_token_count("simulation"), 0);
        assert_eq!(corpus.vocab_size(), 2);
    }

    #[test]
    fn sorted_vocabulary_defines_dimensions() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["rpg", "action", "indie"]);
        corpus.sort_vocabulary();
        assert_eq!(corpus.tokens().collect::<Vec<_>>(), vec!["action", "indie", "rpg"]);
        assert_eq!(corpus.token_index("indie"), Some(1));
        assert_eq!(corpus.token_index("rpg"), Some(2));
        assert_eq!(corpus.token_index("strategy"), None);
    }
}
