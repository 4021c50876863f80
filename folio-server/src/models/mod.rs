//! Entity documents with validation at the boundary
//!
//! Create and update payloads are checked against the field invariants
//! before any store write; invalid input returns ValidationError, not panic.

pub mod validation;
pub mod article;
pub mod project;
pub mod experience;
pub mod education;

pub use validation::ValidationError;
pub use article::{Article, ArticleUpdate, NewArticle};
pub use project::{NewProject, Project, ProjectUpdate};
pub use experience::{Experience, ExperienceUpdate, NewExperience};
pub use education::Education;
