/**
 * Windows `UserAssist` is a Registry artifact that records applications executed via
 * Windows Explorer. Each entry tracks an execution count, last execution time, and on
 * Windows 7+ the time the application held focus. Value names are typically ROT13
 * encoded (though this can be disabled) and often start with a known folder GUID
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/User-assist.html`
 *
 * Other Parsers:
 *  `https://github.com/Velocidex/velociraptor`
 */
use super::{
    assist::{CountRecord, parse_count_record, transform_value_name},
    error::UserAssistError,
};
use crate::artifacts::os::windows::registry::reader::{RegistryHive, RegistryReader};
use crate::utils::time::unixepoch_to_iso;
use common::windows::UserAssistEntry;
use log::{error, warn};

/// Path to the `UserAssist` key relative to a user hive
const USERASSIST_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\UserAssist";

/// Collect all `UserAssist` entries for the current user
pub fn grab_userassist(reader: &dyn RegistryReader) -> Result<Vec<UserAssistEntry>, UserAssistError> {
    let guid_result = reader.enumerate_children(RegistryHive::CurrentUser, USERASSIST_KEY);
    let guids = match guid_result {
        Ok(results) => results,
        Err(err) => {
            error!("[userassist] Could not enumerate UserAssist GUID keys: {err:?}");
            return Err(UserAssistError::RegistryAccess);
        }
    };

    let mut entries = Vec::new();
    for guid in guids {
        let count_key = format!("{USERASSIST_KEY}\\{guid}\\Count");
        if reader.open_key(RegistryHive::CurrentUser, &count_key).is_err() {
            continue;
        }

        let value_result = reader.enumerate_values(RegistryHive::CurrentUser, &count_key);
        let values = match value_result {
            Ok(results) => results,
            Err(err) => {
                error!("[userassist] Could not enumerate values under {count_key}: {err:?}");
                continue;
            }
        };

        for value in values {
            let record_result = parse_count_record(&value.data);
            let record = match record_result {
                Ok(result) => result,
                Err(err) => {
                    // Session values such as UEME_CTLSESSION are smaller than a Count record
                    warn!(
                        "[userassist] Could not parse Count record for {}: {err:?}",
                        value.name
                    );
                    continue;
                }
            };
            entries.push(assemble_entry(&value.name, &count_key, &record));
        }
    }
    Ok(entries)
}

/// Combine the decoded value name and Count record into one entry
fn assemble_entry(value_name: &str, reg_path: &str, record: &CountRecord) -> UserAssistEntry {
    let mut entry = UserAssistEntry {
        path: transform_value_name(value_name),
        rot_path: value_name.to_string(),
        run_count: 0,
        focus_count: None,
        focus_duration_ms: None,
        last_run: None,
        reg_path: reg_path.to_string(),
    };

    match record {
        CountRecord::Legacy {
            run_count,
            last_run,
        } => {
            entry.run_count = *run_count;
            entry.last_run = last_run.map(|epoch| unixepoch_to_iso(&epoch));
        }
        CountRecord::Modern {
            count,
            focus_duration,
            last_run,
        } => {
            entry.run_count = *count;
            entry.focus_count = Some(*count);
            entry.focus_duration_ms = Some(focus_duration.as_millis() as u32);
            entry.last_run = last_run.map(|epoch| unixepoch_to_iso(&epoch));
        }
    }
    entry
}
