/**
 * Windows `RecentDocs` tracks recently opened documents per user. The root key holds
 * the full list while child keys group entries by file extension. Values are binary:
 * a UTF16 filename followed by a shell item ID list
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/Most-recently-used.html`
 */
use super::error::RecentDocsError;
use crate::artifacts::os::windows::registry::{
    reader::{RegistryHive, RegistryReader},
    values::RegValue,
};
use crate::utils::strings::extract_utf16_string;
use common::windows::RecentDocsEntry;
use log::error;

/// Path to the `RecentDocs` key relative to a user hive
const RECENTDOCS_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\RecentDocs";

/// Extract the filename from a `RecentDocs` binary value.
/// The first NUL terminated UTF16 segment is the filename, the rest of the data is a
/// shell item ID list and is discarded
pub fn decode_recentdocs_blob(data: &[u8]) -> String {
    extract_utf16_string(data)
}

/// Collect `RecentDocs` entries for the current user: the root list plus every
/// extension child key
pub fn grab_recentdocs(
    reader: &dyn RegistryReader,
) -> Result<Vec<RecentDocsEntry>, RecentDocsError> {
    let value_result = reader.enumerate_values(RegistryHive::CurrentUser, RECENTDOCS_KEY);
    let values = match value_result {
        Ok(results) => results,
        Err(err) => {
            error!("[recentdocs] Could not enumerate RecentDocs values: {err:?}");
            return Err(RecentDocsError::RegistryAccess);
        }
    };

    let mut entries = Vec::new();
    collect_entries(&values, RECENTDOCS_KEY, &mut entries);

    let children_result = reader.enumerate_children(RegistryHive::CurrentUser, RECENTDOCS_KEY);
    let children = match children_result {
        Ok(results) => results,
        Err(err) => {
            error!("[recentdocs] Could not enumerate RecentDocs extension keys: {err:?}");
            return Ok(entries);
        }
    };

    for extension in children {
        let extension_key = format!("{RECENTDOCS_KEY}\\{extension}");
        let value_result = reader.enumerate_values(RegistryHive::CurrentUser, &extension_key);
        let values = match value_result {
            Ok(results) => results,
            Err(err) => {
                error!("[recentdocs] Could not enumerate values under {extension_key}: {err:?}");
                continue;
            }
        };
        collect_entries(&values, &extension_key, &mut entries);
    }

    Ok(entries)
}

/// Decode every binary value under a key. The MRUListEx value only stores entry
/// ordering and is skipped
fn collect_entries(values: &[RegValue], key_path: &str, entries: &mut Vec<RecentDocsEntry>) {
    let reg_binary = 3;
    for value in values {
        if value.reg_type != reg_binary || value.name == "MRUListEx" {
            continue;
        }
        entries.push(RecentDocsEntry {
            filename: decode_recentdocs_blob(&value.data),
            value_name: value.name.clone(),
            key_path: key_path.to_string(),
        });
    }
}
