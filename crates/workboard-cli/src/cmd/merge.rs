use anyhow::Context;
use std::path::Path;
use workboard_core::config::Config;
use workboard_core::git;

/// Branch-integration gate. Only the clean-working-tree precondition is
/// implemented; the command announces its plan and then fails until the
/// integration itself exists.
pub fn run(
    root: &Path,
    feature: &str,
    strategy: Option<&str>,
    target: Option<&str>,
    _json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let strategy = strategy
        .map(str::to_string)
        .or(config.merge_strategy)
        .unwrap_or_else(|| "merge".to_string());
    let target = target
        .map(str::to_string)
        .or(config.merge_target)
        .unwrap_or_else(|| "main".to_string());

    if !git::work_tree_clean(root)? {
        anyhow::bail!("working tree has uncommitted changes: commit or stash before merging");
    }

    println!("Merging feature {feature} into {target} using {strategy} strategy...");

    anyhow::bail!("full merge is not implemented: integrate the branch manually")
}
