//! Project documents - portfolio work with technology tags and links

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::validation::{self, ValidationError};

/// Stored project document.
///
/// `linkGit` and `linkAcesso` are optional; historical records use empty
/// strings for "no link", so both spellings of absence are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nome: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_git: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_acesso: Option<String>,
    pub data_criacao: String,
    /// Stamped by the server at insert time (RFC 3339 UTC).
    pub data_postagem: String,
}

/// Client-suppliable fields for creating a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub nome: String,
    pub descricao: String,
    pub tecnologias: Vec<String>,
    #[serde(default)]
    pub link_git: Option<String>,
    #[serde(default)]
    pub link_acesso: Option<String>,
    pub data_criacao: String,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_empty("nome", &self.nome)?;
        validation::non_empty("descricao", &self.descricao)?;
        validation::non_empty_list("tecnologias", &self.tecnologias)?;
        validation::optional_url("linkGit", self.link_git.as_deref())?;
        validation::optional_url("linkAcesso", self.link_acesso.as_deref())?;
        validation::iso_date("dataCriacao", &self.data_criacao)?;
        Ok(())
    }

    pub fn into_project(self, id: ObjectId, posted_at: DateTime<Utc>) -> Project {
        Project {
            id,
            nome: self.nome,
            descricao: self.descricao,
            tecnologias: self.tecnologias,
            link_git: self.link_git,
            link_acesso: self.link_acesso,
            data_criacao: self.data_criacao,
            data_postagem: posted_at.to_rfc3339(),
        }
    }
}

/// Partial update for a project; only supplied fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    /// Fallback identifier for requests without a path id.
    pub id: Option<String>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub tecnologias: Option<Vec<String>>,
    pub link_git: Option<String>,
    pub link_acesso: Option<String>,
    pub data_criacao: Option<String>,
}

impl ProjectUpdate {
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
        if let Some(v) = &self.tecnologias {
            validation::non_empty_list("tecnologias", v)?;
            any = true;
        }
        if let Some(v) = &self.link_git {
            validation::optional_url("linkGit", Some(v))?;
            any = true;
        }
        if let Some(v) = &self.link_acesso {
            validation::optional_url("linkAcesso", Some(v))?;
            any = true;
        }
        if let Some(v) = &self.data_criacao {
            validation::iso_date("dataCriacao", v)?;
            any = true;
        }
        if !any {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }

    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        if let Some(v) = self.nome {
            set.insert("nome", v);
        }
        if let Some(v) = self.descricao {
            set.insert("descricao", v);
        }
        if let Some(v) = self.tecnologias {
            set.insert("tecnologias", v);
        }
        if let Some(v) = self.link_git {
            set.insert("linkGit", v);
        }
        if let Some(v) = self.link_acesso {
            set.insert("linkAcesso", v);
        }
        if let Some(v) = self.data_criacao {
            set.insert("dataCriacao", v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewProject {
        NewProject {
            nome: "Portfolio Website".into(),
            descricao: "Personal site".into(),
            tecnologias: vec!["Rust".into(), "axum".into()],
            link_git: Some("https://github.com/u/portfolio".into()),
            link_acesso: None,
            data_criacao: "2023-10-10T14:48:00.000Z".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn rejects_empty_tag_list() {
        let mut d = draft();
        d.tecnologias = vec![];
        let err = d.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "tecnologias" }));
    }

    #[test]
    fn empty_string_link_is_treated_as_absent() {
        let mut d = draft();
        d.link_acesso = Some("".into());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_git_link() {
        let mut d = draft();
        d.link_git = Some("github.com/u/r".into());
        let err = d.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { field: "linkGit" }));
    }

    #[test]
    fn update_merges_tags_as_array() {
        let upd = ProjectUpdate {
            tecnologias: Some(vec!["Rust".into()]),
            ..Default::default()
        };
        assert!(upd.validate().is_ok());

        let set = upd.into_set_document();
        assert_eq!(set.len(), 1);
        let tags = set.get_array("tecnologias").unwrap();
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn absent_links_stay_off_the_document() {
        let mut d = draft();
        d.link_acesso = None;
        let project = d.into_project(ObjectId::new(), Utc::now());
        let doc = mongodb::bson::to_document(&project).unwrap();
        assert!(!doc.contains_key("linkAcesso"));
        assert!(doc.contains_key("linkGit"));
    }
}
