/**
 * Microsoft `Edge` stores favorites in a JSON `Bookmarks` file per browser profile.
 * Favorites live under the `bookmark_bar` and `other` roots as nested folder nodes
 */
use super::error::EdgeError;
use crate::filesystem::{
    directory::get_user_paths,
    files::{is_file, read_text_file},
};
use crate::structs::artifacts::EdgeOptions;
use common::applications::EdgeFavorite;
use log::error;
use serde_json::Value;

/// Collect `Edge` favorites from the default profile of every user, or from a single
/// provided Bookmarks file
pub fn grab_edge_favorites(options: &EdgeOptions) -> Result<Vec<EdgeFavorite>, EdgeError> {
    if let Some(alt_bookmarks) = &options.alt_bookmarks {
        return parse_bookmarks_file(alt_bookmarks);
    }

    let user_result = get_user_paths();
    let users = match user_result {
        Ok(results) => results,
        Err(err) => {
            error!("[edge] Could not get user directories: {err:?}");
            return Err(EdgeError::UserPaths);
        }
    };

    let mut favorites = Vec::new();
    for user in users {
        let bookmarks_path =
            format!("{user}\\AppData\\Local\\Microsoft\\Edge\\User Data\\Default\\Bookmarks");
        if !is_file(&bookmarks_path) {
            continue;
        }
        match parse_bookmarks_file(&bookmarks_path) {
            Ok(mut results) => favorites.append(&mut results),
            Err(err) => {
                error!("[edge] Could not parse {bookmarks_path}: {err:?}");
                continue;
            }
        }
    }
    Ok(favorites)
}

/// Parse one Bookmarks file
pub fn parse_bookmarks_file(path: &str) -> Result<Vec<EdgeFavorite>, EdgeError> {
    let data_result = read_text_file(path);
    let data = match data_result {
        Ok(result) => result,
        Err(err) => {
            error!("[edge] Could not read Bookmarks file {path}: {err:?}");
            return Err(EdgeError::ReadFile);
        }
    };
    parse_bookmarks(&data)
}

/// Walk the favorite roots of the Bookmarks JSON
fn parse_bookmarks(data: &str) -> Result<Vec<EdgeFavorite>, EdgeError> {
    let json_result: Result<Value, _> = serde_json::from_str(data);
    let bookmarks = match json_result {
        Ok(result) => result,
        Err(err) => {
            error!("[edge] Could not parse Bookmarks JSON: {err:?}");
            return Err(EdgeError::BadJson);
        }
    };

    let mut favorites = Vec::new();
    for root in ["bookmark_bar", "other"] {
        if let Some(node) = bookmarks.get("roots").and_then(|roots| roots.get(root)) {
            collect_favorites(node, &mut favorites);
        }
    }
    Ok(favorites)
}

/// Recursively collect url nodes. Folder nodes hold their entries under `children`
fn collect_favorites(node: &Value, favorites: &mut Vec<EdgeFavorite>) {
    if let Some(children) = node.get("children").and_then(|value| value.as_array()) {
        for child in children {
            collect_favorites(child, favorites);
        }
        return;
    }

    if node.get("type").and_then(|value| value.as_str()) == Some("url") {
        favorites.push(EdgeFavorite {
            name: node
                .get("name")
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .to_string(),
            url: node
                .get("url")
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .to_string(),
        });
    }
}
