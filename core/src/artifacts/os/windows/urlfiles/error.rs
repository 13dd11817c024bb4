use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlFileError {
    ReadFile,
    ReadDirectory,
    NoUrl,
}

impl std::error::Error for UrlFileError {}

impl fmt::Display for UrlFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlFileError::ReadFile => write!(f, "Could not read url file"),
            UrlFileError::ReadDirectory => write!(f, "Could not read directory"),
            UrlFileError::NoUrl => write!(f, "No URL entry in url file"),
        }
    }
}
