use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{model::movie::Movie, repository::RepositoryError};

const BUNDLED_MOVIES: &str = include_str!("../../resources/movies.json");

#[derive(Debug, Clone)]
enum Source {
    Bundled,
    Payload(String),
    File(PathBuf),
}

/// Reads the movie catalog from a single JSON array.
///
/// `load_all` never fails: a payload that cannot be read or parsed yields an
/// empty list and a warning in the log. Use `try_load_all` to get the error.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    source: Source,
}

impl MovieRepository {
    pub fn new() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    pub fn from_payload(payload: impl Into<String>) -> Self {
        Self {
            source: Source::Payload(payload.into()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn load_all(&self) -> Vec<Movie> {
        match self.try_load_all() {
            Ok(movies) => movies,
            Err(e) => {
                log::warn!("Falling back to an empty movie list. {}", e);
                vec![]
            }
        }
    }

    pub fn try_load_all(&self) -> Result<Vec<Movie>, RepositoryError> {
        let movies: Vec<Movie> = match &self.source {
            Source::Bundled => serde_json::from_str(BUNDLED_MOVIES)?,
            Source::Payload(payload) => serde_json::from_str(payload)?,
            Source::File(path) => {
                log::debug!("Reading movie catalog from {}", path.display());
                serde_json::from_str(&fs::read_to_string(path)?)?
            }
        };

        log::debug!("Loaded {} movies", movies.len());
        Ok(movies)
    }
}

impl Default for MovieRepository {
    fn default() -> Self {
        Self::new()
    }
}
