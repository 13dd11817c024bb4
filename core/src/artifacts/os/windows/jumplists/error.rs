use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum JumpListError {
    ReadDirectory,
}

impl std::error::Error for JumpListError {}

impl fmt::Display for JumpListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpListError::ReadDirectory => write!(f, "Could not read JumpList directory"),
        }
    }
}
