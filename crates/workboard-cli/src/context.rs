use std::path::Path;
use workboard_core::git;
use workboard_core::paths::WORKBOARD_DIR;

/// Resolve the feature the command operates on.
///
/// Priority:
/// 1. `--feature` flag / `WORKBOARD_FEATURE` env var (passed in as `explicit`)
/// 2. Current git branch (skipped on detached HEAD, outside a repository,
///    or with no git binary)
/// 3. The path segment following a `workboard` component of the working
///    directory
///
/// No strategy succeeding is a configuration error raised before any
/// subcommand logic runs.
pub fn resolve_feature(root: &Path, explicit: Option<&str>) -> anyhow::Result<String> {
    if let Some(f) = explicit {
        return Ok(f.to_string());
    }
    if let Some(branch) = git::current_branch(root) {
        return Ok(branch);
    }
    if let Some(feature) = feature_from_path(&std::env::current_dir()?) {
        return Ok(feature);
    }
    anyhow::bail!(
        "cannot determine current feature: run from a feature branch or a \
         workboard/<feature> directory, or pass --feature"
    )
}

fn feature_from_path(path: &Path) -> Option<String> {
    let mut components = path.components();
    while let Some(c) = components.next() {
        if c.as_os_str() == WORKBOARD_DIR {
            return components
                .next()
                .map(|f| f.as_os_str().to_string_lossy().into_owned());
        }
    }
    None
}
