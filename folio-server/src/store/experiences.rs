//! Experience repository

use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use super::{Store, StoreError};
use crate::models::{Experience, ExperienceUpdate, NewExperience};

/// Experience repository
pub struct ExperienceRepo {
    coll: Collection<Experience>,
}

impl ExperienceRepo {
    pub fn new(store: &Store) -> Self {
        Self {
            coll: store.experiences(),
        }
    }

    /// List every experience in store-native order.
    pub async fn list(&self) -> Result<Vec<Experience>, StoreError> {
        let cursor = self.coll.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert one experience, assigning the identifier and stamping the
    /// posting timestamp.
    pub async fn create(&self, new: NewExperience) -> Result<Experience, StoreError> {
        let experience = new.into_experience(ObjectId::new(), Utc::now());
        self.coll.insert_one(&experience).await?;
        Ok(experience)
    }

    /// Merge the supplied fields into the document with this identifier.
    pub async fn update(&self, id: ObjectId, update: ExperienceUpdate) -> Result<(), StoreError> {
        let set = update.into_set_document();
        let result = self
            .coll
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        if result.modified_count == 0 {
            return Err(StoreError::NotFound {
                resource: "experience",
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
                resource: "experience",
                id: id.to_hex(),
            });
        }
        Ok(())
    }
}
