use super::{directory::is_directory, error::FileSystemError};
use log::error;
use std::{
    fs::{read, read_dir, read_to_string},
    path::Path,
};
use walkdir::WalkDir;

/// Get a list of all files in a provided directory. Use `list_directories` to get only directories
pub(crate) fn list_files(path: &str) -> Result<Vec<String>, FileSystemError> {
    let data = list_files_directories(path)?;
    let mut files: Vec<String> = Vec::new();

    for entry in data {
        if !is_file(&entry) {
            continue;
        }
        files.push(entry);
    }
    Ok(files)
}

/// Get a list of all files and directories in a provided directory
pub(crate) fn list_files_directories(path: &str) -> Result<Vec<String>, FileSystemError> {
    let mut data: Vec<String> = Vec::new();
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }
    let dir_result = read_dir(path);
    let dir = match dir_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to get directory contents: {err:?}");
            return Err(FileSystemError::ReadDirectory);
        }
    };

    // Loop and get all entries in provided directory
    for entry_result in dir {
        let entry = match entry_result {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Failed to get directory entry: {err:?}");
                continue;
            }
        };

        let full_path = entry.path().display().to_string();
        data.push(full_path);
    }

    Ok(data)
}

/// Recursively list all files under a provided directory that end with the given extension
pub(crate) fn list_files_recursive(
    path: &str,
    extension: &str,
) -> Result<Vec<String>, FileSystemError> {
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }

    let mut files: Vec<String> = Vec::new();
    for entry in WalkDir::new(path).into_iter() {
        let entry = match entry {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Failed to walk directory entry: {err:?}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let full_path = entry.path().display().to_string();
        if full_path.to_lowercase().ends_with(extension) {
            files.push(full_path);
        }
    }
    Ok(files)
}

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file into memory
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Read a whole text file into a string
pub(crate) fn read_text_file(path: &str) -> Result<String, FileSystemError> {
    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let data = read_to_string(path);
    match data {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read text file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Get the filename without its final extension from a path
pub(crate) fn get_file_stem(path: &str) -> String {
    let entry = Path::new(path);
    if let Some(stem) = entry.file_stem() {
        return stem.to_str().unwrap_or_default().to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::{
        get_file_stem, is_file, list_files, list_files_recursive, read_file, read_text_file,
    };
    use std::path::PathBuf;

    #[test]
    fn test_list_files() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let result = list_files(&test_location.display().to_string()).unwrap();
        assert!(!result.is_empty());

        let mut found_toml = false;
        for entry in result {
            if entry.ends_with("Cargo.toml") {
                found_toml = true;
            }
        }
        assert_eq!(found_toml, true);
    }

    #[test]
    fn test_list_files_recursive() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let result = list_files_recursive(&test_location.display().to_string(), ".rs").unwrap();
        assert!(!result.is_empty());
    }

    #[test]
    fn test_is_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("Cargo.toml");
        assert_eq!(is_file(&test_location.display().to_string()), true);
    }

    #[test]
    fn test_read_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("Cargo.toml");
        let result = read_file(&test_location.display().to_string()).unwrap();
        assert!(!result.is_empty());
    }

    #[test]
    fn test_read_text_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("Cargo.toml");
        let result = read_text_file(&test_location.display().to_string()).unwrap();
        assert!(result.contains("[package]"));
    }

    #[test]
    fn test_get_file_stem() {
        let result = get_file_stem("/tmp/test/5f7b5f1e01b83767.automaticDestinations-ms");
        assert_eq!(result, "5f7b5f1e01b83767");
    }
}
