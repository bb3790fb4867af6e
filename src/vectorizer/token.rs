use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// TokenSet
/// The deduplicated tokens of one item.
///
/// Unlike a frequency table, a token seen twice is stored once, so term
/// frequency is binary presence. Insertion order is kept for display.
///
/// # Examples
/// ```
/// use tag_recommender::TokenSet;
/// let mut tokens = TokenSet::new();
/// tokens.add_token("action");
/// tokens.add_token("rpg");
/// tokens.add_token("action");
///
/// assert_eq!(tokens.len(), 2);
/// assert!(tokens.contains("rpg"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: IndexSet<Box<str>>,
}

impl TokenSet {
    pub fn new() -> Self {
        TokenSet {
            tokens: IndexSet::new(),
        }
    }

    /// Add a token, returns false if it was already present
    #[inline]
    pub fn add_token(&mut self, token: &str) -> bool {
        if self.tokens.contains(token) {
            return false;
        }
        self.tokens.insert(token.into())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| t.as_ref())
    }

    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.add_token(token);
        }
        set
    }
}
