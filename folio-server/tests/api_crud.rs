//! End-to-end CRUD properties against a running MongoDB
//!
//! Run with: MONGODB_URI=mongodb://localhost:27017 cargo test -p folio-server -- --ignored
//! Set RUST_LOG=debug to surface request traces on failures.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;

use folio_server::http::{build_router, AppState};
use folio_server::models::Education;
use folio_server::store::Store;

const TEST_DB: &str = "folio_test";

// Only the first caller registers a subscriber; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

async fn connect(db_name: &str) -> Store {
    init_tracing();
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI required");
    Store::connect(&uri, db_name).await.expect("connect failed")
}

async fn app() -> Router {
    let store = connect(TEST_DB).await;
    build_router(Arc::new(AppState { store }))
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn list(app: Router, uri: &str) -> Vec<Value> {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["data"].as_array().expect("data array").clone()
}

async fn delete_by_path(app: Router, uri: &str) -> StatusCode {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
#[ignore = "requires database"]
async fn created_article_gets_id_and_timestamp_and_lists() {
    let payload = json!({
        "nome": "Test",
        "descricao": "D",
        "areaEstudo": "CS",
        "dataPublicacao": "2024-01-01",
        "linkAcesso": "https://x.com"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/articles", payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["error"].is_null());

    let created = &body["data"];
    let id = created["id"].as_str().expect("assigned id");
    assert!(!id.is_empty());
    assert_eq!(created["nome"], "Test");

    // The posting timestamp was not in the request and must parse
    let posted = created["dataPostagem"].as_str().expect("dataPostagem");
    assert!(chrono::DateTime::parse_from_rfc3339(posted).is_ok());

    // Round-trip: the listing includes the document with fields intact
    let articles = list(app().await, "/api/articles").await;
    let found = articles
        .iter()
        .find(|a| a["id"] == id)
        .expect("created article listed");
    assert_eq!(found["descricao"], "D");
    assert_eq!(found["areaEstudo"], "CS");
    assert_eq!(found["dataPublicacao"], "2024-01-01");
    assert_eq!(found["linkAcesso"], "https://x.com");

    assert_eq!(
        delete_by_path(app().await, &format!("/api/articles/{id}")).await,
        StatusCode::OK
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn created_project_keeps_optional_links() {
    let payload = json!({
        "nome": "E-commerce API",
        "descricao": "RESTful API",
        "tecnologias": ["Rust", "MongoDB"],
        "linkGit": "https://github.com/u/ecommerce-api",
        "linkAcesso": "",
        "dataCriacao": "2023-08-15T10:00:00.000Z"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/projects", payload).await;

    assert_eq!(status, StatusCode::CREATED);
    let created = &body["data"];
    let id = created["id"].as_str().unwrap().to_string();

    // Empty string is a tolerated spelling of "no link" and round-trips
    assert_eq!(created["linkAcesso"], "");
    assert_eq!(created["linkGit"], "https://github.com/u/ecommerce-api");
    assert_eq!(created["tecnologias"], json!(["Rust", "MongoDB"]));

    assert_eq!(
        delete_by_path(app().await, &format!("/api/projects/{id}")).await,
        StatusCode::OK
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_missing_document_is_404_without_side_effects() {
    // Dedicated database so parallel tests cannot shift the count
    let store = connect("folio_test_upd").await;
    let app = build_router(Arc::new(AppState { store }));

    let before = list(app.clone(), "/api/articles").await.len();

    let ghost = ObjectId::new().to_hex();
    let (status, body) = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/articles/{ghost}"),
        json!({ "nome": "Ghost" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let after = list(app.clone(), "/api/articles").await;
    assert_eq!(after.len(), before);
    assert!(after.iter().all(|a| a["id"] != ghost.as_str()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_missing_document_is_404_and_collection_unchanged() {
    // Dedicated database so parallel tests cannot shift the count
    let store = connect("folio_test_del").await;
    let app = build_router(Arc::new(AppState { store }));

    let before = list(app.clone(), "/api/articles").await.len();

    let ghost = ObjectId::new().to_hex();
    let status = delete_by_path(app.clone(), &format!("/api/articles/{ghost}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let after = list(app.clone(), "/api/articles").await.len();
    assert_eq!(after, before);
}

#[tokio::test]
#[ignore = "requires database"]
async fn partial_update_merges_single_field() {
    let payload = json!({
        "nome": "Portfolio Website",
        "descricao": "First draft",
        "tecnologias": ["Next.js", "Tailwind"],
        "linkGit": "https://github.com/u/portfolio",
        "dataCriacao": "2023-10-10"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/projects", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let posted = body["data"]["dataPostagem"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        app().await,
        Method::PUT,
        &format!("/api/projects/{id}"),
        json!({ "descricao": "Personal site, rebuilt" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    // Field-level merge: only descricao changed
    let projects = list(app().await, "/api/projects").await;
    let found = projects.iter().find(|p| p["id"] == id.as_str()).unwrap();
    assert_eq!(found["descricao"], "Personal site, rebuilt");
    assert_eq!(found["nome"], "Portfolio Website");
    assert_eq!(found["tecnologias"], json!(["Next.js", "Tailwind"]));
    assert_eq!(found["linkGit"], "https://github.com/u/portfolio");
    assert_eq!(found["dataPostagem"], posted.as_str());

    assert_eq!(
        delete_by_path(app().await, &format!("/api/projects/{id}")).await,
        StatusCode::OK
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn body_identifier_resolves_update_and_delete() {
    let payload = json!({
        "cargo": "Backend Developer",
        "empresa": "Acme",
        "periodo": "2020 - 2022",
        "descricao": "Services and pipelines",
        "tecnologias": ["Rust"]
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/experiences", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Update keyed by the body id, no path segment
    let (status, _) = send_json(
        app().await,
        Method::PUT,
        "/api/experiences",
        json!({ "id": id, "periodo": "2020 - 2023" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let experiences = list(app().await, "/api/experiences").await;
    let found = experiences.iter().find(|e| e["id"] == id.as_str()).unwrap();
    assert_eq!(found["periodo"], "2020 - 2023");

    // Delete keyed by the body id
    let (status, body) = send_json(
        app().await,
        Method::DELETE,
        "/api/experiences",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let experiences = list(app().await, "/api/experiences").await;
    assert!(experiences.iter().all(|e| e["id"] != id.as_str()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn path_identifier_wins_over_body_identifier() {
    let first = json!({
        "nome": "Borrow Checker Notes",
        "descricao": "Ownership in practice",
        "areaEstudo": "CS",
        "dataPublicacao": "2024-03-01",
        "linkAcesso": "https://x.com/borrow"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/articles", first).await;
    assert_eq!(status, StatusCode::CREATED);
    let id_a = body["data"]["id"].as_str().unwrap().to_string();

    let second = json!({
        "nome": "Async Pitfalls",
        "descricao": "Cancellation and timeouts",
        "areaEstudo": "CS",
        "dataPublicacao": "2024-03-02",
        "linkAcesso": "https://x.com/async"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/articles", second).await;
    assert_eq!(status, StatusCode::CREATED);
    let id_b = body["data"]["id"].as_str().unwrap().to_string();

    // Both identifiers present: the path names the first article, the
    // body names the second. Only the first may change.
    let (status, body) = send_json(
        app().await,
        Method::PUT,
        &format!("/api/articles/{id_a}"),
        json!({ "id": id_b, "nome": "Borrow Checker Notes, revised" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id_a.as_str());

    let articles = list(app().await, "/api/articles").await;
    let renamed = articles.iter().find(|a| a["id"] == id_a.as_str()).unwrap();
    let untouched = articles.iter().find(|a| a["id"] == id_b.as_str()).unwrap();
    assert_eq!(renamed["nome"], "Borrow Checker Notes, revised");
    assert_eq!(untouched["nome"], "Async Pitfalls");

    // Same rule for delete: the body id must not redirect the removal
    let (status, body) = send_json(
        app().await,
        Method::DELETE,
        &format!("/api/articles/{id_a}"),
        json!({ "id": id_b }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id_a.as_str());

    let articles = list(app().await, "/api/articles").await;
    assert!(articles.iter().all(|a| a["id"] != id_a.as_str()));
    assert!(articles.iter().any(|a| a["id"] == id_b.as_str()));

    assert_eq!(
        delete_by_path(app().await, &format!("/api/articles/{id_b}")).await,
        StatusCode::OK
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn unchanged_update_reports_not_found() {
    let payload = json!({
        "nome": "Fixed Point",
        "descricao": "Stable",
        "areaEstudo": "Math",
        "dataPublicacao": "2024-02-02",
        "linkAcesso": "https://x.com/fixed"
    });
    let (status, body) = send_json(app().await, Method::POST, "/api/articles", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // The merge matches the document but modifies nothing
    let (status, body) = send_json(
        app().await,
        Method::PUT,
        &format!("/api/articles/{id}"),
        json!({ "nome": "Fixed Point" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    assert_eq!(
        delete_by_path(app().await, &format!("/api/articles/{id}")).await,
        StatusCode::OK
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn education_lists_seeded_records() {
    let store = connect(TEST_DB).await;
    let app = build_router(Arc::new(AppState {
        store: store.clone(),
    }));

    // No write endpoint exists; seed through the collection handle
    let record = Education {
        id: ObjectId::new(),
        curso: "Computer Science".into(),
        instituicao: "State University".into(),
        periodo: "2018 - 2022".into(),
        descricao: "Bachelor's degree".into(),
    };
    store
        .education()
        .insert_one(&record)
        .await
        .expect("seed education");

    let records = list(app, "/api/education").await;
    let found = records
        .iter()
        .find(|e| e["id"] == record.id.to_hex())
        .expect("seeded record listed");
    assert_eq!(found["curso"], "Computer Science");
    assert_eq!(found["instituicao"], "State University");

    store
        .education()
        .delete_one(doc! { "_id": record.id })
        .await
        .expect("cleanup");
}
