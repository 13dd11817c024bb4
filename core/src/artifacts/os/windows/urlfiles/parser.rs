/**
 * Internet `Shortcut` files (`url` extension) are small INI style text files pointing
 * to a URL. They commonly land on the Desktop or in Downloads when a user saves or
 * drags a link out of a browser
 */
use super::error::UrlFileError;
use crate::filesystem::{
    directory::{get_user_paths, is_directory},
    files::{list_files_recursive, read_text_file},
};
use crate::structs::artifacts::UrlFileOptions;
use common::windows::UrlShortcut;
use log::error;

/// Collect internet shortcuts from the standard user directories, or from a single
/// provided directory
pub fn grab_urlfiles(options: &UrlFileOptions) -> Result<Vec<UrlShortcut>, UrlFileError> {
    if let Some(alt_path) = &options.alt_path {
        return grab_url_directory(alt_path);
    }

    let user_result = get_user_paths();
    let users = match user_result {
        Ok(results) => results,
        Err(err) => {
            error!("[urlfiles] Could not get user directories: {err:?}");
            return Err(UrlFileError::ReadDirectory);
        }
    };

    let mut shortcuts = Vec::new();
    for user in users {
        let search_dirs = [
            format!("{user}\\Desktop"),
            format!("{user}\\Downloads"),
            format!("{user}\\Documents"),
        ];
        for dir in search_dirs {
            if !is_directory(&dir) {
                continue;
            }
            match grab_url_directory(&dir) {
                Ok(mut results) => shortcuts.append(&mut results),
                Err(err) => {
                    error!("[urlfiles] Could not parse directory {dir}: {err:?}");
                    continue;
                }
            }
        }
    }
    Ok(shortcuts)
}

/// Parse any `url` files under the provided directory
pub fn grab_url_directory(path: &str) -> Result<Vec<UrlShortcut>, UrlFileError> {
    let files_result = list_files_recursive(path, ".url");
    let files = match files_result {
        Ok(results) => results,
        Err(err) => {
            error!("[urlfiles] Could not list files at path {path}: {err:?}");
            return Err(UrlFileError::ReadDirectory);
        }
    };

    let mut shortcuts = Vec::new();
    for file in files {
        match parse_url_file(&file) {
            Ok(url) => shortcuts.push(UrlShortcut {
                source_path: file,
                url,
            }),
            Err(err) => {
                error!("[urlfiles] Failed to parse file {file}: {err:?}");
                continue;
            }
        }
    }
    Ok(shortcuts)
}

/// Extract the URL entry from an internet shortcut file
pub fn parse_url_file(path: &str) -> Result<String, UrlFileError> {
    let data_result = read_text_file(path);
    let data = match data_result {
        Ok(result) => result,
        Err(err) => {
            error!("[urlfiles] Could not read url file {path}: {err:?}");
            return Err(UrlFileError::ReadFile);
        }
    };

    let url_prefix = "URL=";
    for line in data.lines() {
        if let Some(prefix) = line.get(..url_prefix.len()) {
            if prefix.eq_ignore_ascii_case(url_prefix) {
                return Ok(line[url_prefix.len()..].to_string());
            }
        }
    }
    Err(UrlFileError::NoUrl)
}
