//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로로 선언된 MongoDB 리포지토리들을 제공합니다.
//! 인덱스는 [`create_indexes`]로 서버 시작 시 한 번 생성합니다.
//!
//! | 리포지토리 | 컬렉션 | 인덱스 |
//! |-----------|--------|--------|
//! | `SequenceRepository` | `sequences` | - |
//! | `PostRepository` | `posts` | `created_by` |
//! | `TagRepository` | `tags` | `post_id`, `name` |
//! | `CommentRepository` | `comments` | `post_id` |
//! | `LikeRepository` | `likes` | `post_id` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::posts::PostRepository;
//!
//! let post_repo = PostRepository::instance();
//! let post = post_repo.find_by_id(1).await?;
//! ```

pub mod sequences;
pub mod posts;
pub mod comments;
pub mod likes;

use crate::core::registry::Repository;
use crate::errors::AppResult;
use crate::utils::display_terminal::{print_step_complete, print_step_start, print_sub_task};
use comments::CommentRepository;
use likes::LikeRepository;
use posts::{PostRepository, TagRepository};

/// 모든 리포지토리의 컬렉션 인덱스를 생성합니다.
///
/// `ServiceLocator::initialize_all()` 이후에 호출해야 합니다.
/// 이미 존재하는 인덱스는 MongoDB가 그대로 둡니다.
pub async fn create_indexes() -> AppResult<()> {
    print_step_start(3, "Creating collection indexes");

    let post_repo = PostRepository::instance();
    let tag_repo = TagRepository::instance();
    let comment_repo = CommentRepository::instance();
    let like_repo = LikeRepository::instance();

    report_index(post_repo.as_ref(), post_repo.create_indexes().await)?;
    report_index(tag_repo.as_ref(), tag_repo.create_indexes().await)?;
    report_index(comment_repo.as_ref(), comment_repo.create_indexes().await)?;
    report_index(like_repo.as_ref(), like_repo.create_indexes().await)?;

    print_step_complete(3, "Collection indexes created", 4);
    Ok(())
}

fn report_index(repository: &dyn Repository, result: AppResult<()>) -> AppResult<()> {
    match &result {
        Ok(()) => print_sub_task(repository.name(), &format!("✓ {}", repository.collection_name())),
        Err(e) => print_sub_task(repository.name(), &format!("✗ {}", e)),
    }
    result
}
