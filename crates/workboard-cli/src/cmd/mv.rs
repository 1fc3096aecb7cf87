use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use workboard_core::activity::resolve_actor;
use workboard_core::board::{self, MoveOutcome};
use workboard_core::config::Config;
use workboard_core::lane::Lane;

pub fn run(
    root: &Path,
    feature: &str,
    wp: &str,
    to: &str,
    note: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    // Lane validation happens before any filesystem access.
    let target: Lane = to.parse()?;

    let config = Config::load(root).context("failed to load config")?;
    let actor = resolve_actor(&config);

    let outcome = board::move_package(root, feature, wp, target, note, &actor)?;

    if json {
        print_json(&serde_json::json!({
            "feature": feature,
            "work_package": wp,
            "result": outcome,
        }))?;
        return Ok(());
    }

    match outcome {
        MoveOutcome::AlreadyInLane { lane } => {
            println!("Work package {wp} already in {lane} lane");
        }
        MoveOutcome::Moved {
            from,
            to,
            old_path,
            new_path,
        } => {
            println!("Moved {wp} from {from} to {to}");
            println!("  {} → {}", old_path.display(), new_path.display());
        }
    }
    Ok(())
}
