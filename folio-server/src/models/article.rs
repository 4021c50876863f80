//! Article documents - published writing listed on the portfolio
//!
//! Wire field names keep the original JSON contract (`areaEstudo`,
//! `dataPublicacao`, ...) via camelCase renaming.

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::validation::{self, ValidationError};

/// Stored article document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nome: String,
    pub descricao: String,
    pub area_estudo: String,
    pub data_publicacao: String,
    /// Stamped by the server at insert time (RFC 3339 UTC).
    pub data_postagem: String,
    pub link_acesso: String,
}

/// Client-suppliable fields for creating an article.
///
/// `id` and `dataPostagem` are server-assigned; unknown body fields are
/// dropped by deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub nome: String,
    pub descricao: String,
    pub area_estudo: String,
    pub data_publicacao: String,
    pub link_acesso: String,
}

impl NewArticle {
    /// Check all required fields before any store write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_empty("nome", &self.nome)?;
        validation::non_empty("descricao", &self.descricao)?;
        validation::non_empty("areaEstudo", &self.area_estudo)?;
        validation::iso_date("dataPublicacao", &self.data_publicacao)?;
        validation::valid_url("linkAcesso", &self.link_acesso)?;
        Ok(())
    }

    /// Build the stored document with the assigned identifier and the
    /// posting timestamp.
    pub fn into_article(self, id: ObjectId, posted_at: DateTime<Utc>) -> Article {
        Article {
            id,
            nome: self.nome,
            descricao: self.descricao,
            area_estudo: self.area_estudo,
            data_publicacao: self.data_publicacao,
            data_postagem: posted_at.to_rfc3339(),
            link_acesso: self.link_acesso,
        }
    }
}

/// Partial update for an article; only supplied fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdate {
    /// Fallback identifier for requests without a path id.
    pub id: Option<String>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub area_estudo: Option<String>,
    pub data_publicacao: Option<String>,
    pub link_acesso: Option<String>,
}

impl ArticleUpdate {
    /// Supplied fields must still satisfy the field invariants; an update
    /// carrying no updatable field at all is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut any = false;
        if let Some(v) = &self.nome {
            validation::non_empty("nome", v)?;
            any = true;
        }
        if let Some(v) = &self.descricao {
            validation::non_empty("descricao", v)?;
            any = true;
        }
        if let Some(v) = &self.area_estudo {
            validation::non_empty("areaEstudo", v)?;
            any = true;
        }
        if let Some(v) = &self.data_publicacao {
            validation::iso_date("dataPublicacao", v)?;
            any = true;
        }
        if let Some(v) = &self.link_acesso {
            validation::valid_url("linkAcesso", v)?;
            any = true;
        }
        if !any {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }

    /// Fields to `$set` on the stored document. Never contains `_id`;
    /// identifiers are immutable after creation.
    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        if let Some(v) = self.nome {
            set.insert("nome", v);
        }
        if let Some(v) = self.descricao {
            set.insert("descricao", v);
        }
        if let Some(v) = self.area_estudo {
            set.insert("areaEstudo", v);
        }
        if let Some(v) = self.data_publicacao {
            set.insert("dataPublicacao", v);
        }
        if let Some(v) = self.link_acesso {
            set.insert("linkAcesso", v);
        }
        set
    }
}
