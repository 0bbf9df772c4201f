pub mod post_repo;
pub mod tag_repo;

pub use post_repo::PostRepository;
pub use tag_repo::TagRepository;
