//! Experience endpoints

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
use crate::models::{Experience, ExperienceUpdate, NewExperience};
use crate::store::ExperienceRepo;

/// Experience response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub id: String,
    pub cargo: String,
    pub empresa: String,
    pub periodo: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
    pub data_postagem: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id.to_hex(),
            cargo: e.cargo,
            empresa: e.empresa,
            periodo: e.periodo,
            descricao: e.descricao,
            tecnologias: e.tecnologias,
            data_postagem: e.data_postagem,
        }
    }
}

/// GET /experiences - list all experiences
async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<ExperienceResponse>>>, ApiError> {
    let experiences = ExperienceRepo::new(&state.store).list().await?;
    let items = experiences
        .into_iter()
        .map(ExperienceResponse::from)
        .collect();
    Ok(Json(Envelope::data(items)))
}

/// POST /experiences - create an experience
async fn create_experience(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewExperience>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<ExperienceResponse>>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;

    let experience = ExperienceRepo::new(&state.store).create(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(ExperienceResponse::from(experience))),
    ))
}

/// PUT /experiences - merge fields into the experience named by the body id
async fn update_experience(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExperienceUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    let id = update.id.as_deref().ok_or(ApiError::MissingId)?;
    let id = super::parse_id(id)?;
    update.validate()?;

    ExperienceRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// PUT /experiences/{id} - merge fields into the experience at this path
async fn update_experience_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
    payload: Result<Json<ExperienceUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    update.validate()?;

    // The path identifier wins over any identifier in the body
    ExperienceRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /experiences - remove the experience named by the body id
async fn delete_experience(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let id = super::body_id(payload)?;

    ExperienceRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /experiences/{id} - remove the experience at this path
async fn delete_experience_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    ExperienceRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// Experience routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/experiences",
            get(list_experiences)
                .post(create_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
        .route(
            "/experiences/{id}",
            put(update_experience_by_id).delete(delete_experience_by_id),
        )
}
