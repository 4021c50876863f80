//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a document ObjectId from path
pub struct ValidDocumentId(pub ObjectId);

impl<S> FromRequestParts<S> for ValidDocumentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingId)?;

        let id = ObjectId::parse_str(&id)
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId))?;

        Ok(Self(id))
    }
}
