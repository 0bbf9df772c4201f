//! # ID 시퀀스 리포지토리
//!
//! 컬렉션별로 단조 증가하는 `i64` ID를 발급합니다.
//! `sequences` 컬렉션의 `{_id: <collection>, seq}` 문서를 `$inc` + upsert로
//! 원자적으로 증가시키므로 여러 워커가 동시에 호출해도 같은 값이 나오지 않습니다.

use std::sync::Arc;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use singleton_macro::repository;
use crate::db::Database;
use crate::domain::entities::Sequence;
use crate::errors::{AppError, AppResult};

pub const SEQUENCES_COLLECTION: &str = "sequences";

#[repository(name = "sequence", collection = "sequences")]
pub struct SequenceRepository {
    db: Arc<Database>,
}

impl SequenceRepository {
    /// `name` 시퀀스의 다음 값을 발급합니다. 첫 호출은 1을 반환합니다.
    pub async fn next_id(&self, name: &str) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let sequence = self
            .collection::<Sequence>()
            .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("시퀀스 발급 실패: {}", name)))?;

        Ok(sequence.seq)
    }
}

