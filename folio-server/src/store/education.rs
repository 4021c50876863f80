//! Education repository - list only
//!
//! Education records are maintained directly in the collection (no admin
//! form exists), so the repository only reads.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use super::{Store, StoreError};
use crate::models::Education;

/// Education repository
pub struct EducationRepo {
    coll: Collection<Education>,
}

impl EducationRepo {
    pub fn new(store: &Store) -> Self {
        Self {
            coll: store.education(),
        }
    }

    /// List every education record in store-native order.
    pub async fn list(&self) -> Result<Vec<Education>, StoreError> {
        let cursor = self.coll.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
