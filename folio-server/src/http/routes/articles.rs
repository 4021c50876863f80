//! Article endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use crate::http::envelope::{Ack, Envelope};
use crate::http::error::ApiError;
use crate::http::extractors::ValidDocumentId;
use crate::http::routes::IdBody;
use crate::http::server::AppState;
use crate::models::{Article, ArticleUpdate, NewArticle};
use crate::store::ArticleRepo;

/// Article response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub area_estudo: String,
    pub data_publicacao: String,
    pub data_postagem: String,
    pub link_acesso: String,
}

impl From<Article> for ArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            id: a.id.to_hex(),
            nome: a.nome,
            descricao: a.descricao,
            area_estudo: a.area_estudo,
            data_publicacao: a.data_publicacao,
            data_postagem: a.data_postagem,
            link_acesso: a.link_acesso,
        }
    }
}

/// GET /articles - list all articles
async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<ArticleResponse>>>, ApiError> {
    let articles = ArticleRepo::new(&state.store).list().await?;
    let items = articles.into_iter().map(ArticleResponse::from).collect();
    Ok(Json(Envelope::data(items)))
}

/// POST /articles - create an article
async fn create_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewArticle>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<ArticleResponse>>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;

    let article = ArticleRepo::new(&state.store).create(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(ArticleResponse::from(article))),
    ))
}

/// PUT /articles - merge fields into the article named by the body id
async fn update_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ArticleUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    let id = update.id.as_deref().ok_or(ApiError::MissingId)?;
    let id = super::parse_id(id)?;
    update.validate()?;

    ArticleRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// PUT /articles/{id} - merge fields into the article at this path
async fn update_article_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
    payload: Result<Json<ArticleUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    update.validate()?;

    // The path identifier wins over any identifier in the body
    ArticleRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /articles - remove the article named by the body id
async fn delete_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let id = super::body_id(payload)?;

    ArticleRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /articles/{id} - remove the article at this path
async fn delete_article_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    ArticleRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/articles",
            get(list_articles)
                .post(create_article)
                .put(update_article)
                .delete(delete_article),
        )
        .route(
            "/articles/{id}",
            put(update_article_by_id).delete(delete_article_by_id),
        )
}

#[cfg(test)]
mod tests {
    // Validation paths are covered in tests/api_validation.rs; CRUD
    // round-trips live in tests/api_crud.rs against a real store.
    // Run with: MONGODB_URI=... cargo test -p folio-server -- --ignored
}
