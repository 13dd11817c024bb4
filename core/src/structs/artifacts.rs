use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortcutOptions {
    /**Parse a single directory of `lnk` files instead of the default user directories */
    pub alt_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlFileOptions {
    /**Parse a single directory of `url` files instead of the default user directories */
    pub alt_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JumpListOptions {
    /**Alternative `AutomaticDestinations` directory */
    pub alt_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeOptions {
    /**Alternative path to an Edge `Bookmarks` file */
    pub alt_bookmarks: Option<String>,
}
