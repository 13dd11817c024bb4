use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum MruError {
    RegistryAccess,
}

impl std::error::Error for MruError {}

impl fmt::Display for MruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MruError::RegistryAccess => write!(f, "Could not access MRU Registry keys"),
        }
    }
}
