//! Education documents - read-only section data
//!
//! The admin UI has no form for these; records are maintained directly in
//! the collection, so only the stored shape is modeled.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored education document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub curso: String,
    pub instituicao: String,
    pub periodo: String,
    pub descricao: String,
}
