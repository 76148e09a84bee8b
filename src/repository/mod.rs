mod error;
pub mod movie_repository;

pub use error::RepositoryError;
