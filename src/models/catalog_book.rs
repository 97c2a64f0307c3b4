use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{BookMetadata, BookSource, CatalogBook};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalog_books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub authors: String, // JSON array
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<i64>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub cover_image: Option<String>,
    /// `PrimaryProvider` or `FallbackProvider`
    pub source: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::catalog_isbn::Entity")]
    Isbns,
    #[sea_orm(has_many = "super::shelf_entry::Entity")]
    ShelfEntries,
}

impl Related<super::catalog_isbn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Isbns.def()
    }
}

impl Related<super::shelf_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShelfEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain record; `isbns` must already be in ordinal order
    pub fn into_catalog_book(self, isbns: Vec<String>) -> CatalogBook {
        let authors: Vec<String> = serde_json::from_str(&self.authors).unwrap_or_default();
        let source = BookSource::parse(&self.source).unwrap_or_else(|| {
            tracing::warn!("Unknown source '{}' on catalog book #{}", self.source, self.id);
            BookSource::PrimaryProvider
        });

        CatalogBook {
            id: self.id,
            metadata: BookMetadata {
                title: self.title,
                authors,
                isbn: isbns,
                publisher: self.publisher,
                published_date: self.published_date,
                description: self.description,
                page_count: self.page_count.and_then(|n| u32::try_from(n).ok()),
                average_rating: self.average_rating,
                ratings_count: self.ratings_count.and_then(|n| u32::try_from(n).ok()),
                cover_image: self.cover_image,
                source,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
