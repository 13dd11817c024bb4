use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum UserAssistError {
    RegistryAccess,
}

impl std::error::Error for UserAssistError {}

impl fmt::Display for UserAssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAssistError::RegistryAccess => {
                write!(f, "Could not access UserAssist Registry keys")
            }
        }
    }
}
