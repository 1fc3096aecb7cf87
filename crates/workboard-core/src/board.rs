use crate::activity::{ActivityEntry, Context};
use crate::error::{BoardError, Result};
use crate::io::atomic_write;
use crate::lane::Lane;
use crate::package::{self, WorkPackage};
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a move request. A request naming the lane the package already
/// occupies is a success that changed nothing, and must stay that way:
/// retried moves must not double-log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum MoveOutcome {
    AlreadyInLane { lane: Lane },
    Moved {
        from: Lane,
        to: Lane,
        old_path: PathBuf,
        new_path: PathBuf,
    },
}

/// Move a work package to `target`, keeping its file name, syncing the
/// `lane` frontmatter field, and logging the transition.
///
/// The destination is written before the source is deleted, so a crash
/// between the two steps leaves the document present at one location or
/// the other, never at neither. The leftover duplicate is surfaced by the
/// locator on the next scan; there is no automatic reconciliation.
pub fn move_package(
    root: &Path,
    feature: &str,
    id: &str,
    target: Lane,
    note: Option<&str>,
    actor: &str,
) -> Result<MoveOutcome> {
    let located = package::locate(root, feature, id)?.ok_or_else(|| {
        BoardError::PackageNotFound {
            feature: feature.to_string(),
            id: id.to_string(),
        }
    })?;
    let mut wp = located.package;

    if wp.lane == target {
        return Ok(MoveOutcome::AlreadyInLane { lane: target });
    }

    let file_name = wp.path.file_name().map(PathBuf::from).unwrap_or_default();
    let new_path = paths::lane_dir(root, feature, target).join(file_name);

    let default_note = format!("Moved to {target}");
    let entry = ActivityEntry::new(
        actor,
        Context::Transition {
            from: wp.lane,
            to: target,
        },
        note.unwrap_or(&default_note),
    );

    wp.document.set_scalar("lane", target.as_str());
    wp.document.append_activity(&entry.render());

    // Write first, delete second.
    atomic_write(&new_path, wp.document.render().as_bytes())?;
    std::fs::remove_file(&wp.path)?;

    Ok(MoveOutcome::Moved {
        from: wp.lane,
        to: target,
        old_path: wp.path,
        new_path,
    })
}

/// Append an activity entry to a work package without moving it. Repeated
/// calls append repeated entries; the log is an audit trail, not a set.
pub fn record_history(
    root: &Path,
    feature: &str,
    id: &str,
    note: Option<&str>,
    actor: &str,
) -> Result<WorkPackage> {
    let located = package::locate(root, feature, id)?.ok_or_else(|| {
        BoardError::PackageNotFound {
            feature: feature.to_string(),
            id: id.to_string(),
        }
    })?;
    let mut wp = located.package;

    let entry = ActivityEntry::new(
        actor,
        Context::InLane(wp.lane),
        note.unwrap_or("Activity recorded"),
    );
    wp.document.append_activity(&entry.render());
    atomic_write(&wp.path, wp.document.render().as_bytes())?;

    Ok(wp)
}

/// One lane's listing: whether the directory exists (distinct from
/// existing but empty) and the document file names it holds.
#[derive(Debug, Serialize)]
pub struct LaneListing {
    pub lane: Lane,
    pub exists: bool,
    pub files: Vec<String>,
}

/// Every lane in board order with its documents. Errors if the feature has
/// no tasks directory at all.
pub fn lane_listings(root: &Path, feature: &str) -> Result<Vec<LaneListing>> {
    if !paths::tasks_dir(root, feature).is_dir() {
        return Err(BoardError::TasksDirMissing(feature.to_string()));
    }
    let mut listings = Vec::with_capacity(Lane::all().len());
    for &lane in Lane::all() {
        let dir = paths::lane_dir(root, feature, lane);
        let files = package::list_documents(&dir)?
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect();
        listings.push(LaneListing {
            lane,
            exists: dir.is_dir(),
            files,
        });
    }
    Ok(listings)
}

/// A document that keeps the accept gate closed.
#[derive(Debug, Serialize)]
pub struct Outstanding {
    pub lane: Lane,
    pub file: String,
}

/// Every document in every lane except `done`, in lane order. The accept
/// gate passes iff this is empty. Read-only.
pub fn outstanding(root: &Path, feature: &str) -> Result<Vec<Outstanding>> {
    if !paths::tasks_dir(root, feature).is_dir() {
        return Err(BoardError::TasksDirMissing(feature.to_string()));
    }
    let mut open = Vec::new();
    for &lane in Lane::all() {
        if lane == Lane::Done {
            continue;
        }
        for path in package::list_documents(&paths::lane_dir(root, feature, lane))? {
            open.push(Outstanding {
                lane,
                file: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
            });
        }
    }
    Ok(open)
}
