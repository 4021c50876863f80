//! Article repository
//!
//! Each call is a single document operation. Updates that match nothing
//! (or change nothing) and deletes that remove nothing surface as
//! `StoreError::NotFound`.

use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use super::{Store, StoreError};
use crate::models::{Article, ArticleUpdate, NewArticle};

/// Article repository
pub struct ArticleRepo {
    coll: Collection<Article>,
}

impl ArticleRepo {
    pub fn new(store: &Store) -> Self {
        Self {
            coll: store.articles(),
        }
    }

    /// List every article in store-native order.
    pub async fn list(&self) -> Result<Vec<Article>, StoreError> {
        let cursor = self.coll.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert one article, assigning the identifier and stamping the
    /// posting timestamp.
    pub async fn create(&self, new: NewArticle) -> Result<Article, StoreError> {
        let article = new.into_article(ObjectId::new(), Utc::now());
        self.coll.insert_one(&article).await?;
        Ok(article)
    }

    /// Merge the supplied fields into the document with this identifier.
    pub async fn update(&self, id: ObjectId, update: ArticleUpdate) -> Result<(), StoreError> {
        let set = update.into_set_document();
        let result = self
            .coll
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        if result.modified_count == 0 {
            return Err(StoreError::NotFound {
                resource: "article",
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
                resource: "article",
                id: id.to_hex(),
            });
        }
        Ok(())
    }
}
