//! Experience documents - employment history entries

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::validation::{self, ValidationError};

/// Stored experience document. `periodo` is free text ("2020 - 2022").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub cargo: String,
    pub empresa: String,
    pub periodo: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
    /// Stamped by the server at insert time (RFC 3339 UTC).
    pub data_postagem: String,
}

/// Client-suppliable fields for creating an experience.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub cargo: String,
    pub empresa: String,
    pub periodo: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
}

impl NewExperience {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_empty("cargo", &self.cargo)?;
        validation::non_empty("empresa", &self.empresa)?;
        validation::non_empty("periodo", &self.periodo)?;
        validation::non_empty("descricao", &self.descricao)?;
        validation::non_empty_list("tecnologias", &self.tecnologias)?;
        Ok(())
    }

    pub fn into_experience(self, id: ObjectId, posted_at: DateTime<Utc>) -> Experience {
        Experience {
            id,
            cargo: self.cargo,
            empresa: self.empresa,
            periodo: self.periodo,
            descricao: self.descricao,
            tecnologias: self.tecnologias,
            data_postagem: posted_at.to_rfc3339(),
        }
    }
}

/// Partial update for an experience; only supplied fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdate {
    /// Fallback identifier for requests without a path id.
    pub id: Option<String>,
    pub cargo: Option<String>,
    pub empresa: Option<String>,
    pub periodo: Option<String>,
    pub descricao: Option<String>,
    pub tecnologias: Option<Vec<String>>,
}

impl ExperienceUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut any = false;
        if let Some(v) = &self.cargo {
            validation::non_empty("cargo", v)?;
            any = true;
        }
        if let Some(v) = &self.empresa {
            validation::non_empty("empresa", v)?;
            any = true;
        }
        if let Some(v) = &self.periodo {
            validation::non_empty("periodo", v)?;
            any = true;
        }
        if let Some(v) = &self.descricao {
            validation::non_empty("descricao", v)?;
            any = true;
        }
        if let Some(v) = &self.tecnologias {
            validation::non_empty_list("tecnologias", v)?;
            any = true;
        }
        if !any {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }

    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        if let Some(v) = self.cargo {
            set.insert("cargo", v);
        }
        if let Some(v) = self.empresa {
            set.insert("empresa", v);
        }
        if let Some(v) = self.periodo {
            set.insert("periodo", v);
        }
        if let Some(v) = self.descricao {
            set.insert("descricao", v);
        }
        if let Some(v) = self.tecnologias {
            set.insert("tecnologias", v);
        }
        set
    }
}
