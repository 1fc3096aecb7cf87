use crate::lane::Lane;
use std::path::{Path, PathBuf};

pub const WORKBOARD_DIR: &str = "workboard";
pub const TASKS_DIR: &str = "tasks";
pub const CONFIG_FILE: &str = "workboard/config.yaml";

pub fn feature_dir(root: &Path, feature: &str) -> PathBuf {
    root.join(WORKBOARD_DIR).join(feature)
}

pub fn tasks_dir(root: &Path, feature: &str) -> PathBuf {
    feature_dir(root, feature).join(TASKS_DIR)
}

pub fn lane_dir(root: &Path, feature: &str, lane: Lane) -> PathBuf {
    tasks_dir(root, feature).join(lane.as_str())
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
