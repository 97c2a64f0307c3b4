pub mod catalog_book;
pub mod catalog_isbn;
pub mod shelf_entry;
