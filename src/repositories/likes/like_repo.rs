//! # 좋아요 리포지토리 구현
//!
//! 좋아요 수의 원본 데이터입니다. Redis 카운터가 없거나 만료되면
//! `count_by_post_id`로 다시 집계합니다.

use std::sync::Arc;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use singleton_macro::repository;
use crate::db::Database;
use crate::domain::entities::Like;
use crate::errors::{AppError, AppResult};

pub const LIKES_COLLECTION: &str = "likes";

#[repository(name = "like", collection = "likes")]
pub struct LikeRepository {
    db: Arc<Database>,
}

impl LikeRepository {
    pub async fn save(&self, like: &Like) -> AppResult<()> {
        self.collection::<Like>()
            .insert_one(like)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub async fn count_by_post_id(&self, post_id: i64) -> AppResult<i64> {
        let count = self.collection::<Like>()
            .count_documents(doc! { "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count as i64)
    }

    pub async fn delete_all_by_post_id(&self, post_id: i64) -> AppResult<u64> {
        let result = self.collection::<Like>()
            .delete_many(doc! { "post_id": post_id })
            .await?;

        Ok(result.deleted_count)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let post_id_index = IndexModel::builder()
            .keys(doc! { "post_id": 1 })
            .options(IndexOptions::builder()
                .name("post_id_asc".to_string())
                .build())
            .build();

        self.collection::<Like>()
            .create_indexes([post_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

