use serde::{Deserialize, Serialize};

/// One raw catalog row as it comes out of the data source.
///
/// Every field may be missing. Missing columns, empty cells and `null`
/// all end up as `None` and are read back as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub name: Option<String>,
    pub genres: Option<String>,
    pub categories: Option<String>,
    /// store tags, `steamspy_tags` in the Steam dumps
    #[serde(alias = "steamspy_tags")]
    pub tags: Option<String>,
    pub developer: Option<String>,
}

impl RawRecord {
    pub fn new(name: &str) -> Self {
        RawRecord {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn genres(mut self, genres: &str) -> Self {
        self.genres = Some(genres.to_string());
        self
    }

    pub fn categories(mut self, categories: &str) -> Self {
        self.categories = Some(categories.to_string());
        self
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.tags = Some(tags.to_string());
        self
    }

    pub fn developer(mut self, developer: &str) -> Self {
        self.developer = Some(developer.to_string());
        self
    }

    #[inline]
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn genres_str(&self) -> &str {
        self.genres.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn categories_str(&self) -> &str {
        self.categories.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn tags_str(&self) -> &str {
        self.tags.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn developer_str(&self) -> &str {
        self.developer.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let rec: RawRecord = serde_json::from_str(r#"{"name":"Hollow Knight","genres":null}"#).unwrap();
        assert_eq!(rec.name_str(), "Hollow Knight");
        assert_eq!(rec.genres_str(), "");
        assert_eq!(rec.categories_str(), "");
        assert_eq!(rec.tags_str(), "");
        assert_eq!(rec.developer_str(), "");
    }

    #[test]
    fn steamspy_tags_is_accepted_as_tags() {
        let rec: RawRecord = serde_json::from_str(r#"{"name":"Celeste","steamspy_tags":"Platformer;Indie"}"#).unwrap();
        assert_eq!(rec.tags_str(), "Platformer;Indie");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let rec: RawRecord =
            serde_json::from_str(r#"{"name":"Hades","header_image_url":"https://x","appid":1145360}"#).unwrap();
        assert_eq!(rec, RawRecord::new("Hades"));
    }
}
