use super::error::WinArtifactError;
use crate::artifacts::applications::edge::parser::grab_edge_favorites;
use crate::artifacts::os::windows::{
    jumplists::parser::grab_jumplist_apps,
    mru::parser::{grab_explorer_mru, grab_office_mru},
    recentdocs::parser::grab_recentdocs,
    registry::reader::LiveRegistry,
    shortcuts::parser::grab_shortcuts,
    urlfiles::parser::grab_urlfiles,
    usbstor::parser::grab_usbstor,
    userassist::parser::grab_userassist,
};
use crate::output::json::json_format;
use crate::structs::artifacts::{EdgeOptions, JumpListOptions, ShortcutOptions, UrlFileOptions};
use crate::structs::toml::Output;
use crate::utils::time::time_now;
use log::error;
use serde::Serialize;
use serde_json::Value;

/// Collect and output `UserAssist` entries
pub(crate) fn userassist(output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let reader = LiveRegistry::default();
    let assist_result = grab_userassist(&reader);
    let assist_data = match assist_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse UserAssist: {err:?}");
            return Err(WinArtifactError::UserAssist);
        }
    };

    let serde_data = serialize_artifact(&assist_data)?;
    output_data(&serde_data, "userassist", output, &start_time)
}

/// Collect and output `RecentDocs` entries
pub(crate) fn recentdocs(output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let reader = LiveRegistry::default();
    let docs_result = grab_recentdocs(&reader);
    let docs_data = match docs_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse RecentDocs: {err:?}");
            return Err(WinArtifactError::RecentDocs);
        }
    };

    let serde_data = serialize_artifact(&docs_data)?;
    output_data(&serde_data, "recentdocs", output, &start_time)
}

/// Collect and output Office MRU file lists
pub(crate) fn office_mru(output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let reader = LiveRegistry::default();
    let mru_result = grab_office_mru(&reader);
    let mru_data = match mru_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse Office MRU keys: {err:?}");
            return Err(WinArtifactError::Mru);
        }
    };

    let serde_data = serialize_artifact(&mru_data)?;
    output_data(&serde_data, "office_mru", output, &start_time)
}

/// Collect and output Explorer MRU lists (RunMRU and TypedPaths)
pub(crate) fn explorer_mru(output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let reader = LiveRegistry::default();
    let mru_result = grab_explorer_mru(&reader);
    let mru_data = match mru_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse Explorer MRU keys: {err:?}");
            return Err(WinArtifactError::Mru);
        }
    };

    let serde_data = serialize_artifact(&mru_data)?;
    output_data(&serde_data, "explorer_mru", output, &start_time)
}

/// Collect and output USB storage device history
pub(crate) fn usbstor(output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let reader = LiveRegistry::default();
    let usb_result = grab_usbstor(&reader);
    let usb_data = match usb_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse USBSTOR: {err:?}");
            return Err(WinArtifactError::UsbStor);
        }
    };

    let serde_data = serialize_artifact(&usb_data)?;
    output_data(&serde_data, "usbstor", output, &start_time)
}

/// Collect and output shortcut (`lnk`) info
pub(crate) fn shortcuts(
    options: &ShortcutOptions,
    output: &Output,
) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let lnk_result = grab_shortcuts(options);
    let lnk_data = match lnk_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse shortcut files: {err:?}");
            return Err(WinArtifactError::Shortcuts);
        }
    };

    let serde_data = serialize_artifact(&lnk_data)?;
    output_data(&serde_data, "shortcuts", output, &start_time)
}

/// Collect and output internet shortcut (`url`) info
pub(crate) fn urlfiles(options: &UrlFileOptions, output: &Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let url_result = grab_urlfiles(options);
    let url_data = match url_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse url files: {err:?}");
            return Err(WinArtifactError::UrlFiles);
        }
    };

    let serde_data = serialize_artifact(&url_data)?;
    output_data(&serde_data, "urlfiles", output, &start_time)
}

/// Resolve and output applications seen in JumpList filenames
pub(crate) fn jumplist_apps(
    options: &JumpListOptions,
    output: &Output,
) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let apps_result = grab_jumplist_apps(options);
    let apps_data = match apps_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to check JumpList files: {err:?}");
            return Err(WinArtifactError::JumpLists);
        }
    };

    let serde_data = serialize_artifact(&apps_data)?;
    output_data(&serde_data, "jumplist_apps", output, &start_time)
}

/// Collect and output Edge favorites
pub(crate) fn edge_favorites(
    options: &EdgeOptions,
    output: &Output,
) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let favorites_result = grab_edge_favorites(options);
    let favorites_data = match favorites_result {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to parse Edge favorites: {err:?}");
            return Err(WinArtifactError::Edge);
        }
    };

    let serde_data = serialize_artifact(&favorites_data)?;
    output_data(&serde_data, "edge_favorites", output, &start_time)
}

/// Serialize collected artifact data for output
fn serialize_artifact<T: Serialize>(artifact_data: &T) -> Result<Value, WinArtifactError> {
    let serde_result = serde_json::to_value(artifact_data);
    match serde_result {
        Ok(results) => Ok(results),
        Err(err) => {
            error!("[core] Failed to serialize artifact data: {err:?}");
            Err(WinArtifactError::Serialize)
        }
    }
}

/// Write serialized artifact data to the configured output
fn output_data(
    serde_data: &Value,
    output_name: &str,
    output: &Output,
    start_time: &u64,
) -> Result<(), WinArtifactError> {
    let output_result = json_format(serde_data, output_name, output, start_time);
    match output_result {
        Ok(_) => Ok(()),
        Err(err) => {
            error!("[core] Could not output {output_name} data: {err:?}");
            Err(WinArtifactError::Output)
        }
    }
}
