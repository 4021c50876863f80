//! Education endpoints - read-only
//!
//! No admin form exists for education records; they are maintained
//! directly in the collection, so only the list operation is exposed.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Education;
use crate::store::EducationRepo;

/// Education response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub id: String,
    pub curso: String,
    pub instituicao: String,
    pub periodo: String,
    pub descricao: String,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id.to_hex(),
            curso: e.curso,
            instituicao: e.instituicao,
            periodo: e.periodo,
            descricao: e.descricao,
        }
    }
}

/// GET /education - list all education records
async fn list_education(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<EducationResponse>>>, ApiError> {
    let records = EducationRepo::new(&state.store).list().await?;
    let items = records.into_iter().map(EducationResponse::from).collect();
    Ok(Json(Envelope::data(items)))
}

/// Education routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/education", get(list_education))
}
