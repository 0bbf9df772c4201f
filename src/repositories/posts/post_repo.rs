//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션에 대한 저장, 조회, 페이지 검색을 담당합니다.
//!
//! ## 정렬
//!
//! 목록은 항상 최신 글이 먼저 오도록 `_id` 내림차순으로 정렬됩니다.
//! ID는 시퀀스로 발급되므로 생성 순서와 같습니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document, Regex};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use singleton_macro::repository;
use crate::db::Database;
use crate::domain::dto::Pageable;
use crate::domain::entities::Post;
use crate::errors::{AppError, AppResult};

pub const POSTS_COLLECTION: &str = "posts";

/// 게시글 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = PostRepository::instance();
///
/// repo.save(&post).await?;
///
/// let filter = PostRepository::search_filter(Some("title"), None);
/// let (posts, total) = repo.find_page(filter, pageable).await?;
/// ```
#[repository(name = "post", collection = "posts")]
pub struct PostRepository {
    db: Arc<Database>,
}

impl PostRepository {
    pub async fn save(&self, post: &Post) -> AppResult<()> {
        self.collection::<Post>()
            .insert_one(post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        self.collection::<Post>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID 목록에 해당하는 게시글을 조회합니다. 순서는 보장하지 않습니다.
    pub async fn find_all_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Post>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection::<Post>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// 게시글 전체를 교체 저장합니다.
    pub async fn update(&self, post: &Post) -> AppResult<()> {
        let result = self.collection::<Post>()
            .replace_one(doc! { "_id": post.id }, post)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("post {}", post.id)));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.collection::<Post>()
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    /// 필터에 맞는 게시글 한 페이지와 전체 개수를 반환합니다.
    pub async fn find_page(&self, filter: Document, pageable: Pageable) -> AppResult<(Vec<Post>, u64)> {
        let total = self.collection::<Post>()
            .count_documents(filter.clone())
            .await?;

        let cursor = self.collection::<Post>()
            .find(filter)
            .sort(doc! { "_id": -1 })
            .skip(pageable.offset())
            .limit(pageable.size as i64)
            .await?;

        let posts = cursor.try_collect().await?;
        Ok((posts, total))
    }

    /// 제목(대소문자 무시 부분 일치)과 작성자(정확히 일치) 검색 필터를 만듭니다.
    ///
    /// 제목의 정규식 메타문자는 이스케이프되어 문자 그대로 검색됩니다.
    pub fn search_filter(title: Option<&str>, created_by: Option<&str>) -> Document {
        let mut filter = Document::new();

        if let Some(title) = title {
            filter.insert(
                "title",
                Regex {
                    pattern: regex::escape(title),
                    options: "i".to_string(),
                },
            );
        }

        if let Some(created_by) = created_by {
            filter.insert("created_by", created_by);
        }

        filter
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let created_by_index = IndexModel::builder()
            .keys(doc! { "created_by": 1 })
            .options(IndexOptions::builder()
                .name("created_by_asc".to_string())
                .build())
            .build();

        self.collection::<Post>()
            .create_indexes([created_by_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
