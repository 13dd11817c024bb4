use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FileSystemError {
    NotDirectory,
    NotFile,
    ReadDirectory,
    ReadFile,
    UserPaths,
    NoUserParent,
}

impl std::error::Error for FileSystemError {}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::NotDirectory => write!(f, "Not a directory"),
            FileSystemError::NotFile => write!(f, "Not a file"),
            FileSystemError::ReadDirectory => write!(f, "Could not read directory"),
            FileSystemError::ReadFile => write!(f, "Could not read file"),
            FileSystemError::UserPaths => write!(f, "Could not get user directories"),
            FileSystemError::NoUserParent => write!(f, "Could not get parent user directory"),
        }
    }
}
