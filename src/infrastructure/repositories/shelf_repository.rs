//! SeaORM implementation of ShelfRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::catalog_repository::hydrate;
use crate::domain::{DomainError, ShelfEntry, ShelfRepository};
use crate::models::catalog_book::Entity as BookEntity;
use crate::models::shelf_entry::{ActiveModel, Column, Entity as ShelfEntity};

pub struct SeaOrmShelfRepository {
    db: DatabaseConnection,
}

impl SeaOrmShelfRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShelfRepository for SeaOrmShelfRepository {
    async fn add(&self, book_id: i32) -> Result<ShelfEntry, DomainError> {
        let txn = self.db.begin().await?;

        let book = BookEntity::find_by_id(book_id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        if ShelfEntity::find()
            .filter(Column::BookId.eq(book_id))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "Book #{} is already on the shelf",
                book_id
            )));
        }

        let position = ShelfEntity::find()
            .order_by_desc(Column::Position)
            .one(&txn)
            .await?
            .map_or(1, |last| last.position + 1);

        let model = ActiveModel {
            book_id: Set(book_id),
            position: Set(position),
            added_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let book = hydrate(&txn, book).await?;
        txn.commit().await?;

        tracing::info!("Shelved book #{} at position {}", book_id, position);

        let mut entry = ShelfEntry::from(model);
        entry.book = Some(book);
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<ShelfEntry>, DomainError> {
        let rows = ShelfEntity::find()
            .order_by_asc(Column::Position)
            .find_also_related(BookEntity)
            .all(&self.db)
            .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (shelf_model, book_model) in rows {
            let mut entry = ShelfEntry::from(shelf_model);
            if let Some(model) = book_model {
                entry.book = Some(hydrate(&self.db, model).await?);
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let result = ShelfEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
