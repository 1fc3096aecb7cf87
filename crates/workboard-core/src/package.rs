use crate::document::Document;
use crate::error::Result;
use crate::lane::Lane;
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

const ID_KEY: &str = "work_package_id";
const LEGACY_ID_KEY: &str = "id";

/// A work-package document located on the board: the parsed document plus
/// where it currently lives.
#[derive(Debug, Clone, Serialize)]
pub struct WorkPackage {
    pub feature: String,
    /// Lane implied by the containing directory.
    pub lane: Lane,
    pub path: PathBuf,
    /// Path relative to the feature directory, e.g. `tasks/doing/wp-01.md`.
    pub relative_path: String,
    #[serde(skip)]
    pub document: Document,
}

impl WorkPackage {
    /// Stable external identifier: `work_package_id`, with the legacy `id`
    /// key accepted for older documents.
    pub fn id(&self) -> Option<String> {
        self.document
            .scalar(ID_KEY)
            .or_else(|| self.document.scalar(LEGACY_ID_KEY))
    }

    pub fn title(&self) -> Option<String> {
        self.document.scalar("title")
    }

    /// The `lane` frontmatter field when present and valid, else the lane
    /// implied by the directory. The two disagreeing is the visible
    /// aftermath of a partially-completed move.
    pub fn effective_lane(&self) -> Lane {
        self.document
            .scalar("lane")
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.lane)
    }
}

/// A locate result: the first match in lane order, plus the locations of
/// any further documents claiming the same identifier.
#[derive(Debug)]
pub struct Located {
    pub package: WorkPackage,
    pub duplicates: Vec<(Lane, PathBuf)>,
}

/// Enumerate the `.md` files directly inside a lane directory, sorted by
/// file name. An absent directory is an empty lane, not an error.
pub fn list_documents(lane_dir: &Path) -> Result<Vec<PathBuf>> {
    if !lane_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(lane_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Scan every lane in board order for the document whose identifier matches
/// `id`. Returns the first match; any additional matches in other files are
/// reported as duplicates (a corruption state — typically the leftovers of
/// a move that died between writing the destination and deleting the
/// source) and logged, never silently dropped.
pub fn locate(root: &Path, feature: &str, id: &str) -> Result<Option<Located>> {
    let mut first: Option<WorkPackage> = None;
    let mut duplicates = Vec::new();

    for &lane in Lane::all() {
        for path in list_documents(&paths::lane_dir(root, feature, lane))? {
            let content = std::fs::read_to_string(&path)?;
            let document = Document::parse(&content);
            let matches = document
                .scalar(ID_KEY)
                .or_else(|| document.scalar(LEGACY_ID_KEY))
                .is_some_and(|found| found == id);
            if !matches {
                continue;
            }
            if first.is_some() {
                duplicates.push((lane, path));
                continue;
            }
            let feature_dir = paths::feature_dir(root, feature);
            let relative_path = path
                .strip_prefix(&feature_dir)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            first = Some(WorkPackage {
                feature: feature.to_string(),
                lane,
                path: path.clone(),
                relative_path,
                document,
            });
        }
    }

    let Some(package) = first else {
        return Ok(None);
    };
    for (lane, path) in &duplicates {
        tracing::warn!(
            "duplicate work package '{id}' also found in {lane} at {}",
            path.display()
        );
    }
    if package.effective_lane() != package.lane {
        tracing::warn!(
            "work package '{id}' claims lane '{}' but sits in '{}'",
            package.effective_lane(),
            package.lane
        );
    }
    Ok(Some(Located {
        package,
        duplicates,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_package(root: &Path, lane: Lane, file: &str, id: &str) {
        let dir = paths::lane_dir(root, "demo", lane);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(file),
            format!("---\nwork_package_id: {id}\nlane: {lane}\n---\n\nBody.\n"),
        )
        .unwrap();
    }

    #[test]
    fn list_documents_sorted_and_md_only() {
        let dir = TempDir::new().unwrap();
        let lane = dir.path().join("planned");
        std::fs::create_dir_all(&lane).unwrap();
        std::fs::write(lane.join("b.md"), "").unwrap();
        std::fs::write(lane.join("a.md"), "").unwrap();
        std::fs::write(lane.join("notes.txt"), "").unwrap();
        let names: Vec<_> = list_documents(&lane)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn list_documents_absent_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_documents(&dir.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn locate_finds_by_primary_and_legacy_key() {
        let dir = TempDir::new().unwrap();
        write_package(dir.path(), Lane::Doing, "wp-01.md", "WP01");
        let lane_dir = paths::lane_dir(dir.path(), "demo", Lane::Planned);
        std::fs::create_dir_all(&lane_dir).unwrap();
        std::fs::write(lane_dir.join("wp-02.md"), "---\nid: WP02\n---\nBody.\n").unwrap();

        let found = locate(dir.path(), "demo", "WP01").unwrap().unwrap();
        assert_eq!(found.package.lane, Lane::Doing);
        assert_eq!(found.package.relative_path, "tasks/doing/wp-01.md");

        let legacy = locate(dir.path(), "demo", "WP02").unwrap().unwrap();
        assert_eq!(legacy.package.lane, Lane::Planned);
    }

    #[test]
    fn locate_missing_is_none() {
        let dir = TempDir::new().unwrap();
        write_package(dir.path(), Lane::Planned, "wp-01.md", "WP01");
        assert!(locate(dir.path(), "demo", "WP99").unwrap().is_none());
    }

    #[test]
    fn locate_reports_duplicates_in_lane_order() {
        let dir = TempDir::new().unwrap();
        write_package(dir.path(), Lane::Done, "wp-01.md", "WP01");
        write_package(dir.path(), Lane::Planned, "wp-01.md", "WP01");

        let found = locate(dir.path(), "demo", "WP01").unwrap().unwrap();
        // First match by lane order, extra locations surfaced.
        assert_eq!(found.package.lane, Lane::Planned);
        assert_eq!(found.duplicates.len(), 1);
        assert_eq!(found.duplicates[0].0, Lane::Done);
    }
}
