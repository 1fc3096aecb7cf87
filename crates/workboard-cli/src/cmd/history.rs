use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use workboard_core::activity::resolve_actor;
use workboard_core::board;
use workboard_core::config::Config;

pub fn run(
    root: &Path,
    feature: &str,
    wp: &str,
    note: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let actor = resolve_actor(&config);

    let package = board::record_history(root, feature, wp, note, &actor)?;

    if json {
        print_json(&serde_json::json!({
            "feature": feature,
            "work_package": wp,
            "lane": package.lane,
            "path": package.relative_path,
        }))?;
    } else {
        println!("Added activity log entry to {wp}");
    }
    Ok(())
}
