//! # 댓글 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use singleton_macro::repository;
use crate::db::Database;
use crate::domain::entities::Comment;
use crate::errors::{AppError, AppResult};

pub const COMMENTS_COLLECTION: &str = "comments";

/// 댓글 데이터 액세스 리포지토리
///
/// 게시글 상세 조회 시 `post_id` 인덱스로 댓글을 등록 순서대로 가져옵니다.
#[repository(name = "comment", collection = "comments")]
pub struct CommentRepository {
    db: Arc<Database>,
}

impl CommentRepository {
    pub async fn save(&self, comment: &Comment) -> AppResult<()> {
        self.collection::<Comment>()
            .insert_one(comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        self.collection::<Comment>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn update(&self, comment: &Comment) -> AppResult<()> {
        let result = self.collection::<Comment>()
            .replace_one(doc! { "_id": comment.id }, comment)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("comment {}", comment.id)));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.collection::<Comment>()
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    /// 게시글의 댓글을 등록 순서대로 조회합니다.
    pub async fn find_all_by_post_id(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let cursor = self.collection::<Comment>()
            .find(doc! { "post_id": post_id })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    pub async fn delete_all_by_post_id(&self, post_id: i64) -> AppResult<u64> {
        let result = self.collection::<Comment>()
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

        self.collection::<Comment>()
            .create_indexes([post_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

