use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Title is an identity field: the UNIQUE constraint turns a racing
    // duplicate insert into a conflict instead of a second row
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS catalog_books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            authors TEXT NOT NULL DEFAULT '[]',
            publisher TEXT,
            published_date TEXT,
            description TEXT,
            page_count INTEGER,
            average_rating REAL,
            ratings_count INTEGER,
            cover_image TEXT,
            source TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS catalog_isbns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            isbn TEXT NOT NULL UNIQUE,
            book_id INTEGER NOT NULL,
            ordinal INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (book_id) REFERENCES catalog_books(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_catalog_isbns_book ON catalog_isbns(book_id)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS shelf_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            book_id INTEGER NOT NULL UNIQUE,
            position INTEGER NOT NULL UNIQUE,
            added_at TEXT NOT NULL,
            FOREIGN KEY (book_id) REFERENCES catalog_books(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    tracing::debug!("Database migrations applied");

    Ok(())
}
