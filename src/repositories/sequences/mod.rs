pub mod sequence_repo;

pub use sequence_repo::SequenceRepository;
