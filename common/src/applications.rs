use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct EdgeFavorite {
    pub name: String,
    pub url: String,
}
