//! 게시글 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::{to_utc, Comment, Post};

/// 게시글 상세 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
    pub tags: Vec<String>,
    pub like_count: i64,
}

impl PostDetailResponse {
    pub fn new(post: Post, comments: Vec<Comment>, tags: Vec<String>, like_count: i64) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_by: post.created_by,
            created_at: to_utc(post.created_at),
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            tags,
            like_count,
        }
    }
}

/// 게시글 목록 항목
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub first_tag: Option<String>,
    pub like_count: i64,
}

impl PostSummaryResponse {
    pub fn new(post: &Post, first_tag: Option<String>, like_count: i64) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            created_by: post.created_by.clone(),
            created_at: to_utc(post.created_at),
            first_tag,
            like_count,
        }
    }
}

/// 게시글 상세에 포함되는 댓글
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_by: comment.created_by,
            created_at: to_utc(comment.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_response_json() {
        let post = Post::new(1, "title".to_string(), "content".to_string(), "harris".to_string());
        let comments = vec![Comment::new(3, 1, "comment".to_string(), "harris2".to_string())];

        let detail = PostDetailResponse::new(post, comments, vec!["tag1".to_string()], 2);
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["createdBy"], "harris");
        assert_eq!(json["likeCount"], 2);
        assert_eq!(json["tags"], serde_json::json!(["tag1"]));
        assert_eq!(json["comments"][0]["createdBy"], "harris2");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_summary_response_json() {
        let post = Post::new(1, "title".to_string(), "content".to_string(), "harris".to_string());

        let summary = PostSummaryResponse::new(&post, None, 0);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["firstTag"], serde_json::Value::Null);
        assert_eq!(json["likeCount"], 0);
        assert!(json.get("content").is_none());
    }
}
