use super::{error::FileSystemError, files::list_files_directories};
use log::error;
use std::path::Path;

/// Check if path is a directory
pub(crate) fn is_directory(path: &str) -> bool {
    let dir = Path::new(path);
    if dir.is_dir() {
        return true;
    }
    false
}

/// Get a list of all directories in a provided directory. Use `list_files` to get only files
pub(crate) fn list_directories(path: &str) -> Result<Vec<String>, FileSystemError> {
    let data = list_files_directories(path)?;
    let mut dirs: Vec<String> = Vec::new();

    for entry in data {
        if !is_directory(&entry) {
            continue;
        }
        dirs.push(entry);
    }
    Ok(dirs)
}

/// Get directories associated with users on a system
pub(crate) fn get_user_paths() -> Result<Vec<String>, FileSystemError> {
    let user_path_result = home::home_dir();
    let mut user_path = if let Some(result) = user_path_result {
        result
    } else {
        error!("[core] Failed get user home paths");
        return Err(FileSystemError::UserPaths);
    };

    let user_parent = if user_path.has_root() {
        #[cfg(target_os = "windows")]
        {
            format!("{}Users", &user_path.display().to_string()[0..3])
        }

        #[cfg(target_os = "macos")]
        {
            String::from("/Users")
        }

        #[cfg(target_os = "linux")]
        {
            user_path.pop();
            user_path.display().to_string()
        }
    } else {
        error!("[core] Failed get user base paths");
        return Err(FileSystemError::NoUserParent);
    };

    if !is_directory(&user_parent) {
        return Err(FileSystemError::NoUserParent);
    }

    list_directories(&user_parent)
}

#[cfg(test)]
mod tests {
    use super::{is_directory, list_directories};
    use std::path::PathBuf;

    #[test]
    fn test_is_directory() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("src");
        let result = is_directory(&test_location.display().to_string());
        assert_eq!(result, true);
    }

    #[test]
    fn test_list_directories() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let result = list_directories(&test_location.display().to_string()).unwrap();

        let mut found_src = false;
        for entry in result {
            if entry.ends_with("src") {
                found_src = true;
            }
        }
        assert_eq!(found_src, true);
    }
}
