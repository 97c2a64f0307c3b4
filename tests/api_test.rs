use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use librarium::config::Config;
use librarium::db;
use librarium::domain::{BookMetadata, BookSource};
use librarium::infrastructure::AppState;
use librarium::server;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to build the full router against mock providers
async fn setup_app(primary: &MockServer, fallback: &MockServer) -> (Router, AppState) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let config = Config {
        google_books_url: primary.uri(),
        openlibrary_url: fallback.uri(),
        ..Config::default()
    };
    let state = AppState::new(db, &config).expect("Failed to build state");
    (server::build_router(state.clone(), &[]), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn metadata(title: &str, isbn: &str) -> BookMetadata {
    BookMetadata {
        title: title.to_string(),
        authors: vec![],
        isbn: vec![isbn.to_string()],
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

fn dune_volume() -> Value {
    json!({
        "items": [{
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "industryIdentifiers": [
                    { "type": "ISBN_13", "identifier": "9780441013593" }
                ],
                "imageLinks": { "thumbnail": "http://books.google.com/dune.jpg" }
            }
        }]
    })
}

#[tokio::test]
async fn test_search_without_fields_returns_400_and_calls_nothing() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_volume()))
        .expect(0)
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(0)
        .mount(&fallback)
        .await;

    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());

    let (status, _) = send(&app, "GET", "/api/search?title=%20&isbn=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_adds_then_finds_book() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_volume()))
        .expect(2)
        .mount(&primary)
        .await;

    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/search?title=Dune", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book added to catalog");
    assert_eq!(body["book"]["title"], "Dune");
    assert_eq!(body["book"]["source"], "PrimaryProvider");
    assert_eq!(body["book"]["isbn"][0], "9780441013593");
    assert_eq!(body["book"]["coverImage"], "https://books.google.com/dune.jpg");
    let id = body["book"]["id"].as_i64().expect("id missing");

    let (status, body) = send(&app, "GET", "/api/search?title=Dune", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book already in catalog");
    assert_eq!(body["book"]["id"].as_i64(), Some(id));

    let (status, body) = send(&app, "GET", "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, body) = send(&app, "GET", &format!("/api/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book"]["authors"][0], "Frank Herbert");
}

#[tokio::test]
async fn test_search_not_found_returns_404() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0 })))
        .expect(1)
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(1)
        .mount(&fallback)
        .await;

    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/search?q=no%20such%20book", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No matching book found");
}

#[tokio::test]
async fn test_provider_failure_returns_static_500() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(0)
        .mount(&fallback)
        .await;

    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/search?isbn=9780441013593", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_lookup_does_not_persist() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_volume()))
        .expect(1)
        .mount(&primary)
        .await;

    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/lookup?isbn=9780441013593", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book"]["title"], "Dune");
    assert!(body["book"].get("id").is_none());

    let (_, body) = send(&app, "GET", "/api/books", None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_books_listing_filters_and_paginates() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    let (app, state) = setup_app(&primary, &fallback).await;

    for (title, isbn) in [
        ("Dune", "9780441013593"),
        ("Dune Messiah", "9780593098233"),
        ("Kindred", "9780807083697"),
    ] {
        state.catalog_repo.persist(metadata(title, isbn)).await.unwrap();
    }

    let (status, body) = send(&app, "GET", "/api/books?title=Dune", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (_, body) = send(&app, "GET", "/api/books?limit=2&page=1", None).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["books"].as_array().unwrap().len(), 1);
    assert_eq!(body["books"][0]["title"], "Kindred");

    let (status, body) = send(&app, "GET", "/api/books/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");
}

#[tokio::test]
async fn test_shelf_positions_increase() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    let (app, state) = setup_app(&primary, &fallback).await;

    let dune = state
        .catalog_repo
        .persist(metadata("Dune", "9780441013593"))
        .await
        .unwrap()
        .book;
    let kindred = state
        .catalog_repo
        .persist(metadata("Kindred", "9780807083697"))
        .await
        .unwrap()
        .book;

    let (status, body) = send(&app, "POST", "/api/shelf", Some(json!({ "bookId": dune.id }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["position"], 1);
    assert_eq!(body["entry"]["book"]["title"], "Dune");
    let first_entry = body["entry"]["id"].as_i64().unwrap();

    let (_, body) = send(&app, "POST", "/api/shelf", Some(json!({ "bookId": kindred.id }))).await;
    assert_eq!(body["entry"]["position"], 2);

    let (status, _) = send(&app, "POST", "/api/shelf", Some(json!({ "bookId": dune.id }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "POST", "/api/shelf", Some(json!({ "bookId": 999 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/shelf", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["entries"][0]["book"]["title"], "Dune");
    assert_eq!(body["entries"][1]["book"]["title"], "Kindred");

    let uri = format!("/api/shelf/{}", first_entry);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Positions are not renumbered after removal
    let (_, body) = send(&app, "POST", "/api/shelf", Some(json!({ "bookId": dune.id }))).await;
    assert_eq!(body["entry"]["position"], 3);
}

#[tokio::test]
async fn test_health_check() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    let (app, _) = setup_app(&primary, &fallback).await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "librarium");
}
