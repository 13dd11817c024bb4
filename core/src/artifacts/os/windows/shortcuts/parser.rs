/**
 * Windows `Shortcut` files are files that point to another file.
 * They have the extension `lnk` and can be found in any directory.
 * The `Shortcut` files found in `C:\Users\<user>\AppData\Roaming\Microsoft\Windows\Recent`
 * can be used to identify recent files and directories accessed by a user
 *
 * References:
 * `https://github.com/libyal/liblnk/blob/main/documentation/Windows%20Shortcut%20File%20(LNK)%20format.asciidoc`
 * `https://winprotocoldoc.blob.core.windows.net/productionwindowsarchives/MS-SHLLINK/%5bMS-SHLLINK%5d.pdf`
 *
 * Other parsers:
 * `https://github.com/EricZimmerman/LECmd`
 */
use super::{
    error::LnkError,
    header::{DataFlags, LnkHeader},
    location::LnkLocation,
};
use crate::filesystem::{
    directory::{get_user_paths, is_directory},
    files::{list_files_recursive, read_file},
};
use crate::structs::artifacts::ShortcutOptions;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_two_bytes};
use common::windows::ShortcutInfo;
use log::error;

/// Collect `Shortcut` files from the standard recent-item directories of every user
/// profile, or from a single provided directory
pub fn grab_shortcuts(options: &ShortcutOptions) -> Result<Vec<ShortcutInfo>, LnkError> {
    if let Some(alt_path) = &options.alt_path {
        return grab_lnk_directory(alt_path);
    }

    let user_result = get_user_paths();
    let users = match user_result {
        Ok(results) => results,
        Err(err) => {
            error!("[shortcuts] Could not get user directories: {err:?}");
            return Err(LnkError::ReadDirectory);
        }
    };

    let mut shortcut_info = Vec::new();
    for user in users {
        let recent_dirs = [
            format!("{user}\\AppData\\Roaming\\Microsoft\\Windows\\Recent"),
            format!("{user}\\Desktop"),
            format!("{user}\\AppData\\Roaming\\Microsoft\\Office\\Recent"),
        ];
        for dir in recent_dirs {
            if !is_directory(&dir) {
                continue;
            }
            match grab_lnk_directory(&dir) {
                Ok(mut results) => shortcut_info.append(&mut results),
                Err(err) => {
                    error!("[shortcuts] Could not parse directory {dir}: {err:?}");
                    continue;
                }
            }
        }
    }
    Ok(shortcut_info)
}

/// Parse any `lnk` (`Shortcut`) files under the provided directory
pub fn grab_lnk_directory(path: &str) -> Result<Vec<ShortcutInfo>, LnkError> {
    let files_result = list_files_recursive(path, ".lnk");
    let files = match files_result {
        Ok(results) => results,
        Err(err) => {
            error!("[shortcuts] Could not list files at path {path}: {err:?}");
            return Err(LnkError::ReadDirectory);
        }
    };

    let mut shortcut_info = Vec::new();
    for file in files {
        let result = grab_lnk_file(&file);
        match result {
            Ok(info) => shortcut_info.push(info),
            Err(_err) => {
                error!("[shortcuts] Failed to parse file: {file}");
                continue;
            }
        }
    }
    Ok(shortcut_info)
}

/// Parse a single `shortcut` file
pub fn grab_lnk_file(path: &str) -> Result<ShortcutInfo, LnkError> {
    let result = read_file(path);
    let lnk_data = match result {
        Ok(data) => data,
        Err(err) => {
            error!("[shortcuts] Could not read lnk file: {err:?}");
            return Err(LnkError::ReadFile);
        }
    };
    let mut shortcut_info = parse_lnk_data(&lnk_data)?;
    shortcut_info.source_path = path.to_string();
    Ok(shortcut_info)
}

/// Parse the raw bytes of `shortcut` data
pub fn parse_lnk_data(data: &[u8]) -> Result<ShortcutInfo, LnkError> {
    let result = LnkHeader::check_header(data);
    let is_header = match result {
        Ok((_, result)) => result,
        Err(_err) => {
            error!("[shortcuts] Could not parse lnk header");
            return Err(LnkError::BadHeader);
        }
    };

    if !is_header {
        return Err(LnkError::NotLnkData);
    }

    let shortcut_result = get_shortcut_data(data);
    let shortcut_info = match shortcut_result {
        Ok((_, result)) => result,
        Err(_err) => {
            error!("[shortcuts] Could not parse shortcut data");
            return Err(LnkError::Parse);
        }
    };

    Ok(shortcut_info)
}

/// Walk the `shortcut` structures: header, then TargetIDList (skipped), then the
/// location information holding the target path
fn get_shortcut_data(data: &[u8]) -> nom::IResult<&[u8], ShortcutInfo> {
    let (mut input, header) = LnkHeader::parse_header(data)?;

    let mut shortcut_info = ShortcutInfo {
        source_path: String::new(),
        target_path: None,
        is_directory: header.is_directory,
        hotkey: header.hotkey,
    };

    if header.data_flags.contains(&DataFlags::HasTargetIdList) {
        // The TargetIDList contents are shell items and are not decoded
        let (remaining, id_list_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (remaining, _id_list) = nom_data(remaining, id_list_size as u64)?;
        input = remaining;
    }

    if header.data_flags.contains(&DataFlags::HasLinkInfo) {
        let (remaining, location) = LnkLocation::parse_location(input)?;
        input = remaining;
        shortcut_info.target_path = location.local_path;
    }

    Ok((input, shortcut_info))
}

#[cfg(test)]
mod tests {
    use super::{grab_lnk_directory, grab_lnk_file, parse_lnk_data};
    use crate::artifacts::os::windows::shortcuts::{
        error::LnkError, header::build_header, location::build_location,
    };
    use std::{fs::File, io::Write};

    /// Assemble a complete shortcut: header, optional id list, LinkInfo with path
    fn build_lnk(id_list: Option<&[u8]>, path: &str) -> Vec<u8> {
        let mut flags = 0x2;
        if id_list.is_some() {
            flags |= 0x1;
        }
        let mut data = build_header(flags, 0x10, 0x0341);
        if let Some(items) = id_list {
            data.extend_from_slice(&(items.len() as u16).to_le_bytes());
            data.extend_from_slice(items);
        }
        data.extend_from_slice(&build_location(path));
        data
    }

    #[test]
    fn test_parse_lnk_data() {
        let test = build_lnk(None, "C:\\Users\\bob\\Projects");

        let result = parse_lnk_data(&test).unwrap();
        assert_eq!(
            result.target_path,
            Some(String::from("C:\\Users\\bob\\Projects"))
        );
        assert_eq!(result.is_directory, true);
        assert_eq!(result.hotkey, "ctrl+shift+A");
    }

    #[test]
    fn test_parse_lnk_data_with_id_list() {
        let id_list = [1, 0, 20, 0, 31, 68, 71, 26];
        let test = build_lnk(Some(&id_list), "C:\\Users\\bob\\report.docx");

        let result = parse_lnk_data(&test).unwrap();
        assert_eq!(
            result.target_path,
            Some(String::from("C:\\Users\\bob\\report.docx"))
        );
    }

    #[test]
    fn test_parse_lnk_data_truncated() {
        let test = [76, 0, 0, 0, 1, 20, 2, 0];
        let result = parse_lnk_data(&test);
        assert_eq!(result, Err(LnkError::BadHeader));
    }

    #[test]
    fn test_parse_lnk_data_not_lnk() {
        let test = [0; 76];
        let result = parse_lnk_data(&test);
        assert_eq!(result, Err(LnkError::NotLnkData));
    }

    #[test]
    fn test_parse_lnk_data_bad_id_list_size() {
        // Size field points past the end of the data
        let mut data = build_header(0x1, 0x0, 0x0);
        data.extend_from_slice(&400_u16.to_le_bytes());
        data.extend_from_slice(&[0; 4]);

        let result = parse_lnk_data(&data);
        assert_eq!(result, Err(LnkError::Parse));
    }

    #[test]
    fn test_grab_lnk_file_and_directory() {
        let test_dir = std::env::temp_dir().join("vestige_lnk_test");
        std::fs::create_dir_all(&test_dir).unwrap();

        let lnk_path = test_dir.join("projects.lnk");
        let mut lnk_file = File::create(&lnk_path).unwrap();
        lnk_file
            .write_all(&build_lnk(None, "C:\\Users\\bob\\Projects"))
            .unwrap();

        let result = grab_lnk_file(&lnk_path.display().to_string()).unwrap();
        assert_eq!(result.source_path, lnk_path.display().to_string());
        assert_eq!(
            result.target_path,
            Some(String::from("C:\\Users\\bob\\Projects"))
        );

        let results = grab_lnk_directory(&test_dir.display().to_string()).unwrap();
        assert_eq!(results.len(), 1);
    }
}
