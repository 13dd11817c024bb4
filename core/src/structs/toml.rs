use crate::structs::artifacts::{
    EdgeOptions, JumpListOptions, ShortcutOptions, UrlFileOptions,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct VestigeToml {
    pub(crate) system: String,
    pub(crate) output: Output,
    pub(crate) artifacts: Vec<Artifacts>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Output {
    /**Collection name. Output is written under `directory/name/` */
    pub(crate) name: String,
    pub(crate) directory: String,
    /**Only `json` is supported */
    pub(crate) format: String,
    pub(crate) compress: bool,
    /**Log level: error, warn, info, debug */
    pub(crate) logging: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Artifacts {
    /**Name of artifact to collect */
    pub(crate) artifact_name: String,
    pub(crate) shortcuts: Option<ShortcutOptions>,
    pub(crate) urlfiles: Option<UrlFileOptions>,
    pub(crate) jumplists: Option<JumpListOptions>,
    pub(crate) edge: Option<EdgeOptions>,
}
