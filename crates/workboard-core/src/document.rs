use regex::Regex;

const ACTIVITY_HEADING: &str = "## Activity Log";

/// A work-package document split into its three byte-exact parts.
///
/// The frontmatter is kept as raw text (both `---` marker lines included)
/// and only ever edited surgically, so re-rendering after a mutation
/// reproduces the original bytes everywhere except the changed field or
/// section. Parsing the YAML and re-emitting it would reorder and requote
/// keys the tool never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub frontmatter: String,
    pub padding: String,
    pub body: String,
}

impl Document {
    /// Split a document into (frontmatter, padding, body).
    ///
    /// A well-formed frontmatter block is `---\n` at the very start of the
    /// text followed by a closing `\n---\n`. The closing marker is searched
    /// after the full opening marker, so `---\n---\n` is not a block.
    /// Anything else degrades to "the whole document is body" — documents
    /// without metadata are tolerated, never rejected.
    pub fn parse(text: &str) -> Document {
        if let Some(rest) = text.strip_prefix("---\n") {
            if let Some(end) = rest.find("\n---\n") {
                let fm_end = "---\n".len() + end + "\n---\n".len();
                let after = &text[fm_end..];
                let body_start = after.len() - after.trim_start_matches('\n').len();
                return Document {
                    frontmatter: text[..fm_end].to_string(),
                    padding: after[..body_start].to_string(),
                    body: after[body_start..].to_string(),
                };
            }
        }
        Document {
            frontmatter: String::new(),
            padding: String::new(),
            body: text.to_string(),
        }
    }

    /// Inverse of `parse`: plain concatenation, no reformatting.
    pub fn render(&self) -> String {
        format!("{}{}{}", self.frontmatter, self.padding, self.body)
    }

    /// Look up a single-line `key: value` entry in the frontmatter,
    /// tolerating optional surrounding quotes.
    pub fn scalar(&self, key: &str) -> Option<String> {
        let re = Regex::new(&format!(
            r#"(?m)^{}:\s*["']?([^"'\n]+)["']?"#,
            regex::escape(key)
        ))
        .ok()?;
        re.captures(&self.frontmatter)
            .map(|c| c[1].trim().to_string())
    }

    /// Replace the value of `key`, or insert a `key: value` line directly
    /// before the closing `---` if the key is absent. Every other line keeps
    /// its exact bytes and position. No-op on a document without a
    /// frontmatter block: there is nowhere to put the key.
    pub fn set_scalar(&mut self, key: &str, value: &str) {
        if self.frontmatter.is_empty() {
            return;
        }
        let prefix = format!("{key}:");
        let replacement = format!("{key}: {value}\n");
        let mut out = String::with_capacity(self.frontmatter.len());
        let mut replaced = false;
        for line in self.frontmatter.split_inclusive('\n') {
            if line.starts_with(&prefix) {
                out.push_str(&replacement);
                replaced = true;
            } else {
                out.push_str(line);
            }
        }
        if !replaced {
            // The block always ends with its closing marker line.
            if let Some(pos) = out.rfind("---\n") {
                out.insert_str(pos, &replacement);
            }
        }
        self.frontmatter = out;
    }

    /// Insert an activity entry at the top of the `## Activity Log` section,
    /// creating the section at the end of the body if it does not exist.
    /// Newest entries sit directly under the heading, so the log reads
    /// most-recent-first.
    pub fn append_activity(&mut self, entry: &str) {
        if let Some(pos) = self.body.find(ACTIVITY_HEADING) {
            let after_heading = pos + ACTIVITY_HEADING.len();
            let rest = &self.body[after_heading..];
            // A heading missing its trailing blank line gets one rather
            // than losing the entry.
            let (offset, insertion) = if rest.starts_with("\n\n") {
                (2, format!("{entry}\n"))
            } else if rest.starts_with('\n') {
                (1, format!("\n{entry}\n"))
            } else {
                (0, format!("\n\n{entry}\n"))
            };
            self.body.insert_str(after_heading + offset, &insertion);
        } else {
            self.body
                .push_str(&format!("\n\n{ACTIVITY_HEADING}\n\n{entry}\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\nwork_package_id: WP01\ntitle: \"Wire up auth\"\nlane: planned\n---\n\n# Wire up auth\n\nSome body text.\n";

    #[test]
    fn round_trip_preserves_bytes() {
        for text in [
            DOC,
            "no frontmatter at all\n",
            "",
            "---\nkey: value\n---\nbody without padding",
            "---\nkey: value\n---\n\n\n\ntriple padding\n",
            "---\n---\n", // not a well-formed block
            "--- \nkey: value\n---\n", // space after opening dashes
        ] {
            assert_eq!(Document::parse(text).render(), text);
        }
    }

    #[test]
    fn splits_frontmatter_padding_body() {
        let doc = Document::parse(DOC);
        assert!(doc.frontmatter.starts_with("---\n"));
        assert!(doc.frontmatter.ends_with("---\n"));
        assert_eq!(doc.padding, "\n");
        assert!(doc.body.starts_with("# Wire up auth"));
    }

    #[test]
    fn malformed_block_is_all_body() {
        let doc = Document::parse("---\nnever closed\n");
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "---\nnever closed\n");
    }

    #[test]
    fn scalar_strips_quotes() {
        let doc = Document::parse(DOC);
        assert_eq!(doc.scalar("work_package_id").as_deref(), Some("WP01"));
        assert_eq!(doc.scalar("title").as_deref(), Some("Wire up auth"));
        assert_eq!(doc.scalar("missing"), None);
    }

    #[test]
    fn set_scalar_replaces_in_place() {
        let mut doc = Document::parse(DOC);
        doc.set_scalar("lane", "doing");
        assert_eq!(doc.scalar("lane").as_deref(), Some("doing"));
        // Untouched keys keep their exact bytes, quoting included.
        assert!(doc.frontmatter.contains("title: \"Wire up auth\""));
        assert!(doc.frontmatter.contains("work_package_id: WP01"));
    }

    #[test]
    fn set_scalar_inserts_before_closing_marker() {
        let mut doc = Document::parse("---\nid: X\n---\nbody");
        doc.set_scalar("lane", "done");
        assert_eq!(doc.frontmatter, "---\nid: X\nlane: done\n---\n");
    }

    #[test]
    fn set_scalar_without_frontmatter_is_noop() {
        let mut doc = Document::parse("just a body\n");
        doc.set_scalar("lane", "done");
        assert_eq!(doc.render(), "just a body\n");
    }

    #[test]
    fn activity_entries_are_most_recent_first() {
        let mut doc = Document::parse("body\n");
        doc.append_activity("- first");
        doc.append_activity("- second");
        let first = doc.body.find("- first").unwrap();
        let second = doc.body.find("- second").unwrap();
        assert!(second < first, "newest entry must come first:\n{}", doc.body);
    }

    #[test]
    fn activity_section_created_when_absent() {
        let mut doc = Document::parse("body\n");
        doc.append_activity("- entry");
        assert!(doc.body.contains("## Activity Log\n\n- entry\n"));
    }

    #[test]
    fn activity_heading_without_blank_line_keeps_entry() {
        let mut doc = Document::parse("## Activity Log\n- old\n");
        doc.append_activity("- new");
        assert!(doc.body.contains("- new"));
        assert!(doc.body.contains("- old"));
        let new = doc.body.find("- new").unwrap();
        let old = doc.body.find("- old").unwrap();
        assert!(new < old);
    }
}
