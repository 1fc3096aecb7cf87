use crate::output::print_json;
use std::path::Path;
use workboard_core::board;

pub fn run(root: &Path, feature: &str, json: bool) -> anyhow::Result<()> {
    let open = board::outstanding(root, feature)?;

    if json {
        print_json(&serde_json::json!({
            "feature": feature,
            "ready": open.is_empty(),
            "outstanding": open,
        }))?;
    }

    if open.is_empty() {
        if !json {
            println!("All work packages are complete (in 'done' lane)");
            println!("Feature {feature} is ready for acceptance");
        }
        return Ok(());
    }

    for item in &open {
        eprintln!("  {}/{} - not done", item.lane, item.file);
    }
    anyhow::bail!(
        "{} work package(s) not yet complete: move all work packages to 'done' before accepting",
        open.len()
    )
}
