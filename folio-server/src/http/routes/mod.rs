//! Route handlers organized by resource
//!
//! Identifier-keyed operations accept the identifier either in the route
//! path or in the request body; the path wins when both are present.

pub mod articles;
pub mod education;
pub mod experiences;
pub mod health;
pub mod projects;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::ValidationError;

/// Body for identifier-keyed requests without a path identifier.
#[derive(Deserialize)]
pub struct IdBody {
    pub id: Option<String>,
}

/// Parse a 24-hex document identifier.
pub(crate) fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::Validation(ValidationError::InvalidId))
}

/// Resolve the identifier for body-keyed delete requests. An absent or
/// unreadable body counts as no identifier, matching the admin client,
/// which sends `{"id": "..."}` or nothing at all.
pub(crate) fn body_id(payload: Result<Json<IdBody>, JsonRejection>) -> Result<ObjectId, ApiError> {
    let id = payload
        .ok()
        .and_then(|Json(body)| body.id)
        .ok_or(ApiError::MissingId)?;
    parse_id(&id)
}
