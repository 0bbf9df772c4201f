use serde::{Deserialize, Serialize};

/// 컬렉션별 ID 시퀀스 문서 (`{_id: <collection>, seq: <i64>}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    #[serde(rename = "_id")]
    pub name: String,
    pub seq: i64,
}
