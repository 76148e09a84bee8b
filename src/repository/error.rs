use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Io(e) => write!(f, "could not read movie catalog: {e}"),
            RepositoryError::Parse(e) => write!(f, "could not parse movie catalog: {e}"),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Io(e) => Some(e),
            RepositoryError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(e: std::io::Error) -> Self {
        RepositoryError::Io(e)
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Parse(e)
    }
}
