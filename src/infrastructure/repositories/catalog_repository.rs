//! SeaORM implementation of CatalogRepository

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

use crate::domain::{
    BookMetadata, CatalogBook, CatalogFilter, CatalogRepository, DomainError, PaginatedCatalog,
    PersistOutcome,
};
use crate::models::catalog_book::{self, ActiveModel, Column, Entity as BookEntity};
use crate::models::catalog_isbn::{self, Entity as IsbnEntity};

/// SeaORM-based implementation of CatalogRepository
pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_new(&self, candidate: &BookMetadata) -> Result<CatalogBook, DbErr> {
        let now = chrono::Utc::now().to_rfc3339();
        let authors_json =
            serde_json::to_string(&candidate.authors).unwrap_or_else(|_| "[]".to_string());

        let txn = self.db.begin().await?;

        let model = ActiveModel {
            title: Set(candidate.title.clone()),
            authors: Set(authors_json),
            publisher: Set(candidate.publisher.clone()),
            published_date: Set(candidate.published_date.clone()),
            description: Set(candidate.description.clone()),
            page_count: Set(candidate.page_count.map(i64::from)),
            average_rating: Set(candidate.average_rating),
            ratings_count: Set(candidate.ratings_count.map(i64::from)),
            cover_image: Set(candidate.cover_image.clone()),
            source: Set(candidate.source.as_str().to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (ordinal, isbn) in candidate.isbn.iter().enumerate() {
            catalog_isbn::ActiveModel {
                isbn: Set(isbn.clone()),
                book_id: Set(model.id),
                ordinal: Set(ordinal as i32),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(model.into_catalog_book(candidate.isbn.clone()))
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

async fn load_isbns<C: ConnectionTrait>(conn: &C, book_id: i32) -> Result<Vec<String>, DbErr> {
    let rows = IsbnEntity::find()
        .filter(catalog_isbn::Column::BookId.eq(book_id))
        .order_by_asc(catalog_isbn::Column::Ordinal)
        .all(conn)
        .await?;

    Ok(rows.into_iter().map(|r| r.isbn).collect())
}

/// Attach the ISBN set to a stored book row
pub(crate) async fn hydrate<C: ConnectionTrait>(
    conn: &C,
    model: catalog_book::Model,
) -> Result<CatalogBook, DbErr> {
    let isbns = load_isbns(conn, model.id).await?;
    Ok(model.into_catalog_book(isbns))
}

/// Title equality OR ISBN set intersection, lowest id first
async fn find_existing_in<C: ConnectionTrait>(
    conn: &C,
    candidate: &BookMetadata,
) -> Result<Option<CatalogBook>, DbErr> {
    let mut condition = Condition::any().add(Column::Title.eq(candidate.title.as_str()));

    if !candidate.isbn.is_empty() {
        condition = condition.add(
            Column::Id.in_subquery(
                Query::select()
                    .column(catalog_isbn::Column::BookId)
                    .from(IsbnEntity)
                    .and_where(catalog_isbn::Column::Isbn.is_in(candidate.isbn.iter().cloned()))
                    .to_owned(),
            ),
        );
    }

    let found = BookEntity::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .one(conn)
        .await?;

    let Some(model) = found else {
        return Ok(None);
    };
    let book = hydrate(conn, model).await?;
    debug_assert!(book.metadata.same_book(candidate));

    Ok(Some(book))
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn find_existing(
        &self,
        candidate: &BookMetadata,
    ) -> Result<Option<CatalogBook>, DomainError> {
        Ok(find_existing_in(&self.db, candidate).await?)
    }

    async fn persist(&self, candidate: BookMetadata) -> Result<PersistOutcome, DomainError> {
        match self.insert_new(&candidate).await {
            Ok(book) => Ok(PersistOutcome {
                book,
                created: true,
            }),
            Err(e) if is_unique_violation(&e) => {
                // Another request stored the same identity between our lookup and insert
                tracing::info!(
                    "Concurrent insert detected for '{}', returning stored record",
                    candidate.title
                );
                let book = find_existing_in(&self.db, &candidate).await?.ok_or_else(|| {
                    DomainError::Database(format!(
                        "Conflicting record for '{}' not found after rollback",
                        candidate.title
                    ))
                })?;
                Ok(PersistOutcome {
                    book,
                    created: false,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CatalogBook>, DomainError> {
        match BookEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(hydrate(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, filter: CatalogFilter) -> Result<PaginatedCatalog, DomainError> {
        let mut query = BookEntity::find();

        if let Some(title) = &filter.title {
            if !title.is_empty() {
                query = query.filter(Column::Title.contains(title));
            }
        }

        query = query.order_by_asc(Column::Id);

        // Fetch with pagination and total count
        let (models, total) = if let Some(limit) = filter.limit.filter(|l| *l > 0) {
            let page = filter.page.unwrap_or(0);
            let paginator = query.paginate(&self.db, limit);
            let total = paginator.num_items().await?;
            let items = paginator.fetch_page(page).await?;
            (items, total)
        } else {
            let items = query.all(&self.db).await?;
            let total = items.len() as u64;
            (items, total)
        };

        let mut books = Vec::with_capacity(models.len());
        for model in models {
            books.push(hydrate(&self.db, model).await?);
        }

        Ok(PaginatedCatalog { books, total })
    }
}
