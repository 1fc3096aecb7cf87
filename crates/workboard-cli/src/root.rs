use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `WORKBOARD_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `workboard/`
/// 3. Walk upward from `cwd` looking for `.git/`
///
/// Neither marker found is a configuration error: the tool never silently
/// operates on an unrelated directory.
pub fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }

    let cwd = std::env::current_dir()?;

    for marker in ["workboard", ".git"] {
        let mut dir = cwd.clone();
        loop {
            if dir.join(marker).is_dir() {
                return Ok(dir);
            }
            match dir.parent() {
                Some(p) => dir = p.to_path_buf(),
                None => break,
            }
        }
    }

    anyhow::bail!(
        "not inside a workboard project or git repository (pass --root or set WORKBOARD_ROOT)"
    )
}
