use crate::catalog::{Item, ItemId, RawRecord};
use crate::vectorizer::token::TokenSet;

/// Canonical tag separator
pub const SEPARATOR: char = ';';

/// Separators seen in developer fields that mean the same as `;`
const DEVELOPER_ALT_SEPARATORS: [char; 3] = ['|', ',', '/'];

/// Clean a raw developer field into `;`-joined developer tags.
///
/// Alternate separators become `;`, every part loses all of its whitespace
/// and empty parts are dropped.
///
/// ```
/// use tag_recommender::catalog::normalizer::clean_developer_name;
/// assert_eq!(clean_developer_name("Team Cherry, Silksong Studios|"), "TeamCherry;SilksongStudios");
/// ```
pub fn clean_developer_name(raw: &str) -> String {
    raw.replace(DEVELOPER_ALT_SEPARATORS, ";")
        .split(SEPARATOR)
        .map(|part| part.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(";")
}

/// Clean a display name: anything that is not an ASCII letter or `:`
/// becomes a space, whitespace runs collapse to one space, ends are trimmed.
pub fn clean_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphabetic() || c == ':' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join the tag fields into the single string the analyzer reads
pub fn metadata(genres: &str, categories: &str, tags: &str, developer_tags: &str) -> String {
    [genres, categories, tags, developer_tags].join(";")
}

/// The analyzer: split on `;`, lowercase, drop empty pieces and keep each
/// token once.
pub fn analyze(metadata: &str) -> TokenSet {
    let mut set = TokenSet::new();
    for piece in metadata.split(SEPARATOR) {
        if piece.is_empty() {
            continue;
        }
        set.add_token(&piece.to_lowercase());
    }
    set
}

/// Turn a raw record into an `Item` with the given id
pub fn normalize(id: ItemId, record: &RawRecord) -> Item {
    let developer_tags = clean_developer_name(record.developer_str());
    let meta = metadata(
        record.genres_str(),
        record.categories_str(),
        record.tags_str(),
        &developer_tags,
    );
    Item {
        id,
        name: clean_name(record.name_str()),
        genres: analyze(record.genres_str()),
        categories: analyze(record.categories_str()),
        tags: analyze(record.tags_str()),
        developers: analyze(&developer_tags),
        tokens: analyze(&meta),
        developer_tags,
    }
}
