/**
 * `JumpList` AutomaticDestinations files record recently and frequently opened items
 * per application. The filename is a hash of the application ID, which can be resolved
 * against a reference list of known application IDs
 *
 * References:
 * `https://github.com/kacos2000/Jumplist-Browser`
 */
use super::error::JumpListError;
use crate::filesystem::{
    directory::{get_user_paths, is_directory},
    files::{get_file_stem, list_files},
};
use crate::structs::artifacts::JumpListOptions;
use common::windows::JumpListApp;
use log::{error, warn};
use std::collections::{HashMap, HashSet};

/// AppID to application name reference list, from the Jumplist-Browser project
const KNOWN_APP_IDS: &str = include_str!("known_appids.csv");

/// Resolve the applications that wrote AutomaticDestinations JumpList files, for
/// every user profile or a single provided directory
pub fn grab_jumplist_apps(options: &JumpListOptions) -> Result<Vec<JumpListApp>, JumpListError> {
    if let Some(alt_path) = &options.alt_path {
        return jumplist_apps_directory(alt_path);
    }

    let user_result = get_user_paths();
    let users = match user_result {
        Ok(results) => results,
        Err(err) => {
            error!("[jumplists] Could not get user directories: {err:?}");
            return Err(JumpListError::ReadDirectory);
        }
    };

    let mut apps = Vec::new();
    for user in users {
        let destinations = format!(
            "{user}\\AppData\\Roaming\\Microsoft\\Windows\\Recent\\AutomaticDestinations"
        );
        if !is_directory(&destinations) {
            continue;
        }
        match jumplist_apps_directory(&destinations) {
            Ok(mut results) => apps.append(&mut results),
            Err(err) => {
                error!("[jumplists] Could not check directory {destinations}: {err:?}");
                continue;
            }
        }
    }

    // The same application may have written JumpLists for multiple users
    let mut seen = HashSet::new();
    apps.retain(|app| seen.insert(app.app_id.clone()));
    apps.sort_by(|first, second| first.name.cmp(&second.name));
    Ok(apps)
}

/// Resolve known applications from the JumpList filenames in one directory
pub fn jumplist_apps_directory(path: &str) -> Result<Vec<JumpListApp>, JumpListError> {
    let files_result = list_files(path);
    let files = match files_result {
        Ok(results) => results,
        Err(err) => {
            error!("[jumplists] Could not list files at path {path}: {err:?}");
            return Err(JumpListError::ReadDirectory);
        }
    };

    let mut app_ids = HashSet::new();
    for file in files {
        let app_id = get_file_stem(&file).to_uppercase();
        if app_id.is_empty() {
            continue;
        }
        app_ids.insert(app_id);
    }

    let known_ids = known_app_ids();
    let mut apps = Vec::new();
    for app_id in app_ids {
        // IDs missing from the reference list cannot be attributed to an application
        if let Some(name) = known_ids.get(&app_id) {
            apps.push(JumpListApp {
                app_id,
                name: name.clone(),
            });
        }
    }

    apps.sort_by(|first, second| first.name.cmp(&second.name));
    Ok(apps)
}

/// Parse the embedded two column AppID reference list
fn known_app_ids() -> HashMap<String, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(KNOWN_APP_IDS.as_bytes());

    let mut known_ids = HashMap::new();
    for record_result in reader.records() {
        let record = match record_result {
            Ok(result) => result,
            Err(err) => {
                warn!("[jumplists] Bad AppID reference row: {err:?}");
                continue;
            }
        };
        let columns = 2;
        if record.len() < columns {
            continue;
        }
        known_ids.insert(
            record[0].trim().to_uppercase(),
            record[1].trim().to_string(),
        );
    }
    known_ids
}
