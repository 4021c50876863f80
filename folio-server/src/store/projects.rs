//! Project repository

use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use super::{Store, StoreError};
use crate::models::{NewProject, Project, ProjectUpdate};

/// Project repository
pub struct ProjectRepo {
    coll: Collection<Project>,
}

impl ProjectRepo {
    pub fn new(store: &Store) -> Self {
        Self {
            coll: store.projects(),
        }
    }

    /// List every project in store-native order.
    pub async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let cursor = self.coll.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert one project, assigning the identifier and stamping the
    /// posting timestamp.
    pub async fn create(&self, new: NewProject) -> Result<Project, StoreError> {
        let project = new.into_project(ObjectId::new(), Utc::now());
        self.coll.insert_one(&project).await?;
        Ok(project)
    }

    /// Merge the supplied fields into the document with this identifier.
    pub async fn update(&self, id: ObjectId, update: ProjectUpdate) -> Result<(), StoreError> {
        let set = update.into_set_document();
        let result = self
            .coll
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        if result.modified_count == 0 {
            return Err(StoreError::NotFound {
                resource: "project",
                id: id.to_hex(),
            });
        }
        Ok(())
    }

    /// Remove the document with this identifier.
    pub async fn delete(&self, id: ObjectId) -> Result<(), StoreError> {
        let result = self.coll.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound {
                resource: "project",
                id: id.to_hex(),
            });
        }
        Ok(())
    }
}
