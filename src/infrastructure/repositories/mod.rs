//! Repository implementations using SeaORM

pub mod catalog_repository;
pub mod shelf_repository;

pub use catalog_repository::SeaOrmCatalogRepository;
pub use shelf_repository::SeaOrmShelfRepository;
