use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum RecentDocsError {
    RegistryAccess,
}

impl std::error::Error for RecentDocsError {}

impl fmt::Display for RecentDocsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecentDocsError::RegistryAccess => {
                write!(f, "Could not access RecentDocs Registry keys")
            }
        }
    }
}
