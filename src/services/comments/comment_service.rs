//! # 댓글 서비스 구현
//!
//! 댓글 생성은 게시글 존재 여부를, 수정/삭제는 작성자 일치 여부를 확인합니다.
//! 작성자 이름은 앞뒤 공백을 제거한 뒤 저장하고 비교합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::domain::dto::comments::{CommentCreateRequest, CommentUpdateRequest};
use crate::domain::entities::Comment;
use crate::errors::{AppResult, CommentError, PostError};
use crate::repositories::comments::CommentRepository;
use crate::repositories::comments::comment_repo::COMMENTS_COLLECTION;
use crate::repositories::posts::PostRepository;
use crate::repositories::sequences::SequenceRepository;
use crate::utils::string_utils::validate_required_string;

#[service(name = "comment")]
pub struct CommentService {
    comment_repo: Arc<CommentRepository>,
    post_repo: Arc<PostRepository>,
    sequence_repo: Arc<SequenceRepository>,
}

impl CommentService {
    /// 게시글에 댓글을 작성합니다. 게시글이 없으면 `PostError::NotFound`.
    pub async fn create_comment(&self, post_id: i64, request: CommentCreateRequest) -> AppResult<i64> {
        let post = self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        let request = request.normalized();
        let id = self.sequence_repo.next_id(COMMENTS_COLLECTION).await?;
        let comment = Comment::new(id, post.id, request.content, request.created_by);
        self.comment_repo.save(&comment).await?;

        Ok(id)
    }

    /// 댓글을 수정합니다.
    ///
    /// - 없는 댓글 → `CommentError::NotFound`
    /// - 작성자가 아님 → `CommentError::NotUpdatable`
    pub async fn update_comment(&self, id: i64, request: CommentUpdateRequest) -> AppResult<i64> {
        let comment = self.comment_repo.find_by_id(id).await?;
        let comment = apply_comment_update(comment, request)?;
        self.comment_repo.update(&comment).await?;

        Ok(id)
    }

    /// 댓글을 삭제합니다.
    ///
    /// - 없는 댓글 → `CommentError::NotFound`
    /// - 작성자가 아님 → `CommentError::NotDeletable`
    pub async fn delete_comment(&self, id: i64, deleted_by: &str) -> AppResult<i64> {
        let deleted_by = validate_required_string(deleted_by, "deletedBy")?;
        let comment = self.comment_repo.find_by_id(id).await?;
        authorize_comment_delete(comment, &deleted_by)?;

        self.comment_repo.delete_by_id(id).await?;

        Ok(id)
    }
}

fn apply_comment_update(comment: Option<Comment>, request: CommentUpdateRequest) -> AppResult<Comment> {
    let request = request.normalized();
    let mut comment = comment.ok_or(CommentError::NotFound)?;

    comment.update(request.content, request.updated_by)?;
    Ok(comment)
}

fn authorize_comment_delete(comment: Option<Comment>, deleted_by: &str) -> AppResult<Comment> {
    let comment = comment.ok_or(CommentError::NotFound)?;
    comment.ensure_deletable_by(deleted_by)?;
    Ok(comment)
}
