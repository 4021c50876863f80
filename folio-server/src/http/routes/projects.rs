//! Project endpoints

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
use crate::models::{NewProject, Project, ProjectUpdate};
use crate::store::ProjectRepo;

/// Project response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_git: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_acesso: Option<String>,
    pub data_criacao: String,
    pub data_postagem: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_hex(),
            nome: p.nome,
            descricao: p.descricao,
            tecnologias: p.tecnologias,
            link_git: p.link_git,
            link_acesso: p.link_acesso,
            data_criacao: p.data_criacao,
            data_postagem: p.data_postagem,
        }
    }
}

/// GET /projects - list all projects
async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<ProjectResponse>>>, ApiError> {
    let projects = ProjectRepo::new(&state.store).list().await?;
    let items = projects.into_iter().map(ProjectResponse::from).collect();
    Ok(Json(Envelope::data(items)))
}

/// POST /projects - create a project
async fn create_project(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<ProjectResponse>>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;

    let project = ProjectRepo::new(&state.store).create(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(ProjectResponse::from(project))),
    ))
}

/// PUT /projects - merge fields into the project named by the body id
async fn update_project(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    let id = update.id.as_deref().ok_or(ApiError::MissingId)?;
    let id = super::parse_id(id)?;
    update.validate()?;

    ProjectRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// PUT /projects/{id} - merge fields into the project at this path
async fn update_project_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
    payload: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let Json(update) = payload?;
    update.validate()?;

    // The path identifier wins over any identifier in the body
    ProjectRepo::new(&state.store).update(id, update).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /projects - remove the project named by the body id
async fn delete_project(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    let id = super::body_id(payload)?;

    ProjectRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// DELETE /projects/{id} - remove the project at this path
async fn delete_project_by_id(
    State(state): State<Arc<AppState>>,
    ValidDocumentId(id): ValidDocumentId,
) -> Result<Json<Envelope<Ack>>, ApiError> {
    ProjectRepo::new(&state.store).delete(id).await?;

    Ok(Json(Envelope::data(Ack { id: id.to_hex() })))
}

/// Project routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/projects",
            get(list_projects)
                .post(create_project)
                .put(update_project)
                .delete(delete_project),
        )
        .route(
            "/projects/{id}",
            put(update_project_by_id).delete(delete_project_by_id),
        )
}
