//! Provider response normalization
//!
//! One mapping per provider shape. Missing fields become empty sequences or
//! `None`; normalization never fails.

use crate::domain::{BookMetadata, BookSource};
use crate::modules::integrations::google_books::GoogleVolumeInfo;
use crate::modules::integrations::openlibrary::{cover_url_from_id, OpenLibraryDoc};
use crate::modules::integrations::ProviderRecord;

pub const UNKNOWN_TITLE: &str = "Unknown Title";

pub fn normalize(record: ProviderRecord) -> BookMetadata {
    match record {
        ProviderRecord::Primary(volume) => from_google_books(volume),
        ProviderRecord::Fallback(doc) => from_openlibrary(doc),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn title_or_unknown(title: Option<String>) -> String {
    non_blank(title).unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Trimmed, non-blank, first occurrence only
fn clean_identifiers(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in raw {
        let id = id.trim().to_string();
        if !id.is_empty() && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn non_negative(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

fn from_google_books(volume: GoogleVolumeInfo) -> BookMetadata {
    let isbn = clean_identifiers(
        volume
            .industry_identifiers
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| id.identifier),
    );

    // Google Books returns http links often, upgrade to https
    let cover_image = volume
        .image_links
        .and_then(|links| links.thumbnail)
        .map(|thumb| thumb.replace("http://", "https://"));

    BookMetadata {
        title: title_or_unknown(volume.title),
        authors: volume.authors.unwrap_or_default(),
        isbn,
        publisher: non_blank(volume.publisher),
        published_date: non_blank(volume.published_date),
        description: non_blank(volume.description),
        page_count: non_negative(volume.page_count),
        average_rating: volume.average_rating,
        ratings_count: non_negative(volume.ratings_count),
        cover_image,
        source: BookSource::PrimaryProvider,
    }
}

fn from_openlibrary(doc: OpenLibraryDoc) -> BookMetadata {
    let authors = doc
        .author_name
        .unwrap_or_default()
        .into_iter()
        .filter(|name| {
            let n = name.trim();
            !n.is_empty()
                && !n.eq_ignore_ascii_case("unknown author")
                && !n.eq_ignore_ascii_case("unknown")
        })
        .collect();

    // Only the first identifier of a search document is kept
    let isbn = clean_identifiers(doc.isbn.unwrap_or_default().into_iter().take(1));

    let cover_image = doc
        .cover
        .and_then(|c| c.large)
        .or_else(|| doc.cover_i.filter(|id| *id > 0).map(cover_url_from_id));

    BookMetadata {
        title: title_or_unknown(doc.title),
        authors,
        isbn,
        publisher: non_blank(doc.publisher.and_then(|p| p.into_iter().next())),
        published_date: non_blank(doc.publish_date.and_then(|d| d.into_iter().next())),
        description: None,
        page_count: None,
        average_rating: None,
        ratings_count: None,
        cover_image,
        source: BookSource::FallbackProvider,
    }
}
