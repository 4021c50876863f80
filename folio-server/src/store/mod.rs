//! Document store layer - collection gateway and repositories
//!
//! # Design Principles
//!
//! - One `Store` per process, owned by the HTTP state; the driver's
//!   internal pool handles connection reuse and task safety
//! - Repositories execute exactly one document operation per call
//! - Explicit `shutdown()` after the server drains

pub mod articles;
pub mod projects;
pub mod experiences;
pub mod education;

use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::models::{Article, Education, Experience, Project};

pub use articles::ArticleRepo;
pub use education::EducationRepo;
pub use experiences::ExperienceRepo;
pub use projects::ProjectRepo;

/// Database name used when none is configured.
pub const DEFAULT_DATABASE: &str = "portfolio";

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Collection gateway: owns the shared client and hands back typed
/// per-entity collection handles.
#[derive(Debug, Clone)]
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    /// Parse the connection string and build the shared client.
    ///
    /// The driver defers socket I/O until the first operation; call
    /// [`Store::ping`] once at startup to fail fast on an unreachable
    /// or misconfigured target.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        Ok(Self { client, db })
    }

    /// Round-trip a `ping` command to verify the store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection("articles")
    }

    pub fn projects(&self) -> Collection<Project> {
        self.db.collection("projects")
    }

    pub fn experiences(&self) -> Collection<Experience> {
        self.db.collection("experiences")
    }

    pub fn education(&self) -> Collection<Education> {
        self.db.collection("education")
    }

    /// Tear down the client, waiting for in-flight operations to finish.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
