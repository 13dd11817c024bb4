use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct ShortcutInfo {
    pub source_path: String,
    /**Absent if the shortcut has no resolvable local base path */
    pub target_path: Option<String>,
    pub is_directory: bool,
    /**Empty when no modifier or recognized key is set */
    pub hotkey: String,
}

#[derive(Debug, Serialize)]
pub struct UserAssistEntry {
    /**ROT13 decoded path with known folder GUIDs resolved */
    pub path: String,
    /**Value name as stored in the Registry */
    pub rot_path: String,
    pub run_count: u32,
    pub focus_count: Option<u32>,
    pub focus_duration_ms: Option<u32>,
    pub last_run: Option<String>,
    pub reg_path: String,
}

#[derive(Debug, Serialize)]
pub struct RecentDocsEntry {
    pub filename: String,
    pub value_name: String,
    pub key_path: String,
}

#[derive(Debug, Serialize)]
pub struct MruList {
    pub key_path: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct JumpListApp {
    pub app_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UsbStorageDevice {
    pub serial: String,
    pub friendly_name: String,
    pub hardware_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UrlShortcut {
    pub source_path: String,
    pub url: String,
}
