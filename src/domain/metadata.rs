//! Canonical, provider-agnostic book metadata

use serde::{Deserialize, Serialize};

/// Which provider produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookSource {
    PrimaryProvider,
    FallbackProvider,
}

impl BookSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSource::PrimaryProvider => "PrimaryProvider",
            BookSource::FallbackProvider => "FallbackProvider",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PrimaryProvider" => Some(BookSource::PrimaryProvider),
            "FallbackProvider" => Some(BookSource::FallbackProvider),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub isbn: Vec<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub cover_image: Option<String>,
    pub source: BookSource,
}

impl BookMetadata {
    /// Identity check: exact title match or any shared ISBN.
    pub fn same_book(&self, other: &BookMetadata) -> bool {
        self.title == other.title || self.isbn.iter().any(|i| other.isbn.contains(i))
    }
}

/// A metadata record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBook {
    pub id: i32,
    #[serde(flatten)]
    pub metadata: BookMetadata,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, isbn: &[&str]) -> BookMetadata {
        BookMetadata {
            title: title.to_string(),
            authors: vec![],
            isbn: isbn.iter().map(|s| s.to_string()).collect(),
            publisher: None,
            published_date: None,
            description: None,
            page_count: None,
            average_rating: None,
            ratings_count: None,
            cover_image: None,
            source: BookSource::PrimaryProvider,
        }
    }

    #[test]
    fn test_same_book_by_title_is_case_sensitive() {
        assert!(book("Dune", &[]).same_book(&book("Dune", &[])));
        assert!(!book("Dune", &[]).same_book(&book("dune", &[])));
    }

    #[test]
    fn test_same_book_by_shared_isbn() {
        let a = book("Dune", &["9780441013593", "0441013597"]);
        let b = book("Dune (Deluxe Edition)", &["0441013597"]);
        assert!(a.same_book(&b));
        assert!(!a.same_book(&book("Children of Dune", &["9780593098240"])));
    }

    #[test]
    fn test_source_serializes_as_variant_name() {
        let json = serde_json::to_value(book("Dune", &["1"])).unwrap();
        assert_eq!(json["source"], "PrimaryProvider");
        assert_eq!(json["isbn"][0], "1");
        assert!(json.get("pageCount").is_some());
        assert_eq!(
            BookSource::parse("FallbackProvider"),
            Some(BookSource::FallbackProvider)
        );
        assert_eq!(BookSource::parse("Other"), None);
    }
}
