//! # 태그 리포지토리 구현
//!
//! 태그는 게시글과 별도의 `tags` 컬렉션에 저장됩니다.
//! 게시글 내 태그 순서는 `_id` 오름차순(등록 순서)입니다.

use std::collections::HashMap;
use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use singleton_macro::repository;
use crate::db::Database;
use crate::domain::dto::Pageable;
use crate::domain::entities::Tag;
use crate::errors::{AppError, AppResult};

pub const TAGS_COLLECTION: &str = "tags";

#[repository(name = "tag", collection = "tags")]
pub struct TagRepository {
    db: Arc<Database>,
}

impl TagRepository {
    /// 태그들을 한 번에 저장합니다. 빈 목록이면 아무것도 하지 않습니다.
    pub async fn save_all(&self, tags: &[Tag]) -> AppResult<()> {
        if tags.is_empty() {
            return Ok(());
        }

        self.collection::<Tag>()
            .insert_many(tags)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// 게시글의 태그를 등록 순서대로 조회합니다.
    pub async fn find_all_by_post_id(&self, post_id: i64) -> AppResult<Vec<Tag>> {
        let cursor = self.collection::<Tag>()
            .find(doc! { "post_id": post_id })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    pub async fn delete_all_by_post_id(&self, post_id: i64) -> AppResult<u64> {
        let result = self.collection::<Tag>()
            .delete_many(doc! { "post_id": post_id })
            .await?;

        Ok(result.deleted_count)
    }

    /// 이름이 같은 태그 한 페이지(최신순)와 전체 개수를 반환합니다.
    pub async fn find_page_by_name(&self, name: &str, pageable: Pageable) -> AppResult<(Vec<Tag>, u64)> {
        let filter = doc! { "name": name };

        let total = self.collection::<Tag>()
            .count_documents(filter.clone())
            .await?;

        let cursor = self.collection::<Tag>()
            .find(filter)
            .sort(doc! { "_id": -1 })
            .skip(pageable.offset())
            .limit(pageable.size as i64)
            .await?;

        let tags = cursor.try_collect().await?;
        Ok((tags, total))
    }

    /// 게시글별 첫 번째 태그 이름을 조회합니다. 태그가 없는 게시글은 결과에 없습니다.
    pub async fn find_first_names_by_post_ids(&self, post_ids: &[i64]) -> AppResult<HashMap<i64, String>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cursor = self.collection::<Tag>()
            .find(doc! { "post_id": { "$in": post_ids.to_vec() } })
            .sort(doc! { "_id": 1 })
            .await?;

        let tags: Vec<Tag> = cursor.try_collect().await?;
        Ok(first_names_by_post(tags))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let post_id_index = IndexModel::builder()
            .keys(doc! { "post_id": 1 })
            .options(IndexOptions::builder()
                .name("post_id_asc".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("name_asc_id_desc".to_string())
                .build())
            .build();

        self.collection::<Tag>()
            .create_indexes([post_id_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// `_id` 오름차순으로 정렬된 태그 목록에서 게시글별 첫 태그 이름을 고릅니다.
fn first_names_by_post(tags: Vec<Tag>) -> HashMap<i64, String> {
    let mut first_names = HashMap::new();
    for tag in tags {
        first_names.entry(tag.post_id).or_insert(tag.name);
    }
    first_names
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_names_by_post_keeps_earliest_tag() {
        let tags = vec![
            Tag::new(1, "tag1".to_string(), 10, "harris".to_string()),
            Tag::new(2, "tag2".to_string(), 10, "harris".to_string()),
            Tag::new(3, "tag3".to_string(), 20, "harris".to_string()),
        ];

        let first_names = first_names_by_post(tags);

        assert_eq!(first_names.len(), 2);
        assert_eq!(first_names.get(&10).map(String::as_str), Some("tag1"));
        assert_eq!(first_names.get(&20).map(String::as_str), Some("tag3"));
        assert_eq!(first_names.get(&30), None);
    }
}
