use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum EdgeError {
    ReadFile,
    BadJson,
    UserPaths,
}

impl std::error::Error for EdgeError {}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeError::ReadFile => write!(f, "Could not read Bookmarks file"),
            EdgeError::BadJson => write!(f, "Could not parse Bookmarks JSON"),
            EdgeError::UserPaths => write!(f, "Could not get user directories"),
        }
    }
}
