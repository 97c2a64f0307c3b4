use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::ShelfEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shelf_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub book_id: i32,
    #[sea_orm(unique)]
    pub position: i32,
    pub added_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::catalog_book::Entity",
        from = "Column::BookId",
        to = "super::catalog_book::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Book,
}

impl Related<super::catalog_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ShelfEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            book_id: model.book_id,
            position: model.position,
            added_at: model.added_at,
            book: None,
        }
    }
}
