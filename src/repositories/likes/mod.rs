pub mod like_repo;

pub use like_repo::LikeRepository;
