use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use workboard_core::board;

pub fn run(root: &Path, feature: &str, json: bool) -> anyhow::Result<()> {
    let listings = board::lane_listings(root, feature)
        .with_context(|| format!("cannot list feature '{feature}'"))?;

    if json {
        print_json(&serde_json::json!({
            "feature": feature,
            "lanes": listings,
        }))?;
        return Ok(());
    }

    for listing in &listings {
        println!("\n{}:", listing.lane.as_str().to_uppercase());
        if !listing.exists {
            println!("  (lane not created)");
        } else if listing.files.is_empty() {
            println!("  (empty)");
        } else {
            for file in &listing.files {
                println!("  - {file}");
            }
        }
    }
    Ok(())
}
