/**
 * MRU (Most Recently Used) keys are ordered Registry records of recently accessed
 * items. Office keeps `File MRU` and `Place MRU` keys per product, Explorer keeps
 * `RunMRU` (Run dialog history) and `TypedPaths` (paths typed into the address bar)
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/Most-recently-used.html`
 */
use super::error::MruError;
use crate::artifacts::os::windows::registry::{
    reader::{RegistryHive, RegistryReader},
    values::{DecodedValue, RegValue, decode_value},
};
use crate::utils::regex_options::{create_regex, regex_check};
use common::windows::MruList;
use log::{error, warn};

/// Office products keep their MRU keys under per-version keys
const OFFICE_KEY: &str = "Software\\Microsoft\\Office";

/// Explorer MRU keys relative to a user hive
const EXPLORER_MRU_KEYS: [&str; 2] = [
    "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\RunMRU",
    "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\TypedPaths",
];

/// Normalize decoded MRU values into a deduplicated, sorted filename list.
/// Entries may carry a sort index prefix separated from the filename by an asterisk
pub fn normalize_mru(values: &[String]) -> Vec<String> {
    let mut filenames = Vec::new();
    for value in values {
        if let Some((_, filename)) = value.split_once('*') {
            filenames.push(filename.to_string());
        } else {
            filenames.push(value.clone());
        }
    }

    filenames.sort();
    filenames.dedup();
    filenames
}

/// Collect normalized Office MRU file lists, one list per installed Office version
pub fn grab_office_mru(reader: &dyn RegistryReader) -> Result<Vec<MruList>, MruError> {
    let children_result = reader.enumerate_children(RegistryHive::CurrentUser, OFFICE_KEY);
    let children = match children_result {
        Ok(results) => results,
        Err(err) => {
            error!("[mru] Could not enumerate Office keys: {err:?}");
            return Err(MruError::RegistryAccess);
        }
    };

    let version_regex = create_regex(r"\d+\.\d+").unwrap(); // always valid

    let mut lists = Vec::new();
    for child in children {
        if !regex_check(&version_regex, &child) {
            continue;
        }
        let version_key = format!("{OFFICE_KEY}\\{child}");

        let mut mru_keys = Vec::new();
        find_mru_keys(reader, &version_key, &mut mru_keys);

        let mut raw_values = Vec::new();
        for mru_key in mru_keys {
            raw_values.append(&mut string_values(reader, &mru_key));
        }

        lists.push(MruList {
            key_path: version_key,
            entries: normalize_mru(&raw_values),
        });
    }
    Ok(lists)
}

/// Collect normalized Explorer MRU lists (`RunMRU` and `TypedPaths`)
pub fn grab_explorer_mru(reader: &dyn RegistryReader) -> Result<Vec<MruList>, MruError> {
    let mut lists = Vec::new();
    for mru_key in EXPLORER_MRU_KEYS {
        if reader.open_key(RegistryHive::CurrentUser, mru_key).is_err() {
            continue;
        }
        let raw_values = string_values(reader, mru_key);
        lists.push(MruList {
            key_path: mru_key.to_string(),
            entries: normalize_mru(&raw_values),
        });
    }
    Ok(lists)
}

/// Recursively find `File MRU` and `Place MRU` keys under the provided path
fn find_mru_keys(reader: &dyn RegistryReader, path: &str, found: &mut Vec<String>) {
    let children_result = reader.enumerate_children(RegistryHive::CurrentUser, path);
    let children = match children_result {
        Ok(results) => results,
        Err(_err) => return,
    };

    for child in children {
        let child_path = format!("{path}\\{child}");
        if child.eq_ignore_ascii_case("File MRU") || child.eq_ignore_ascii_case("Place MRU") {
            found.push(child_path.clone());
        }
        find_mru_keys(reader, &child_path, found);
    }
}

/// Decode all string values under a key. The MRUList value only stores entry ordering
/// and is skipped
fn string_values(reader: &dyn RegistryReader, path: &str) -> Vec<String> {
    let value_result = reader.enumerate_values(RegistryHive::CurrentUser, path);
    let values = match value_result {
        Ok(results) => results,
        Err(err) => {
            error!("[mru] Could not enumerate values under {path}: {err:?}");
            return Vec::new();
        }
    };

    let mut strings = Vec::new();
    for value in values {
        if value.name.eq_ignore_ascii_case("MRUList") {
            continue;
        }
        match decode_value(&value) {
            Ok(DecodedValue::Text(text)) => strings.push(text),
            Ok(_) => {}
            Err(err) => {
                warn!(
                    "[mru] Could not decode value {} under {path}: {err:?}",
                    value.name
                );
            }
        }
    }
    strings
}

#[cfg(test)]
mod tests {
    use super::{OFFICE_KEY, grab_explorer_mru, grab_office_mru, normalize_mru};
    use crate::artifacts::os::windows::registry::{
        reader::{RegistryHive, stub::StubRegistry},
        values::RegValue,
    };

    fn string_value(name: &str, text: &str) -> RegValue {
        let mut data: Vec<u8> = text
            .encode_utf16()
            .flat_map(|value| value.to_le_bytes())
            .collect();
        data.extend_from_slice(&[0, 0]);
        RegValue {
            name: name.to_string(),
            reg_type: 1,
            data,
        }
    }

    #[test]
    fn test_normalize_mru() {
        let test = [
            String::from("0*foo.txt"),
            String::from("bar.txt"),
            String::from("1*foo.txt"),
        ];
        let result = normalize_mru(&test);
        assert_eq!(result, ["bar.txt", "foo.txt"]);
    }

    #[test]
    fn test_normalize_mru_empty() {
        let result = normalize_mru(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_grab_office_mru() {
        let version_key = format!("{OFFICE_KEY}\\16.0");
        let word_key = format!("{version_key}\\Word");
        let file_mru_key = format!("{word_key}\\File MRU");

        let mut stub = StubRegistry::default();
        stub.insert_key(
            RegistryHive::CurrentUser,
            OFFICE_KEY,
            vec![String::from("16.0"), String::from("Common")],
            Vec::new(),
        );
        stub.insert_key(
            RegistryHive::CurrentUser,
            &version_key,
            vec![String::from("Word")],
            Vec::new(),
        );
        stub.insert_key(
            RegistryHive::CurrentUser,
            &word_key,
            vec![String::from("File MRU")],
            Vec::new(),
        );
        stub.insert_key(
            RegistryHive::CurrentUser,
            &file_mru_key,
            Vec::new(),
            vec![
                string_value("Item 1", "[F00000000][T01D95E64][O00000000]*C:\\report.docx"),
                string_value("Item 2", "[F00000000][T01D95E65][O00000000]*C:\\budget.xlsx"),
            ],
        );

        let results = grab_office_mru(&stub).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key_path, version_key);
        assert_eq!(results[0].entries, ["C:\\budget.xlsx", "C:\\report.docx"]);
    }

    #[test]
    fn test_grab_explorer_mru() {
        let run_mru_key = "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\RunMRU";
        let mut stub = StubRegistry::default();
        stub.insert_key(
            RegistryHive::CurrentUser,
            run_mru_key,
            Vec::new(),
            vec![
                string_value("a", "cmd\\1"),
                string_value("b", "notepad\\1"),
                string_value("MRUList", "ba"),
            ],
        );

        let results = grab_explorer_mru(&stub).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key_path, run_mru_key);
        assert_eq!(results[0].entries, ["cmd\\1", "notepad\\1"]);
    }
}
