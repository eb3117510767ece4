//! Derives the requirements checklist that accompanies every generated
//! specification. Template-driven when a checklist template exists,
//! otherwise a self-contained built-in body — a specification is never
//! left without its checklist.

use crate::error::Result;
use crate::io;
use crate::paths;
use std::path::{Path, PathBuf};

const CHECKLIST_TYPE: &str = "Specification Quality";
const CHECKLIST_BLURB: &str =
    "Validate specification completeness and quality before proceeding to planning";

/// Render the checklist body from a template, or fall back to the
/// built-in one. `spec_rel` is the root-relative path of the spec file,
/// used for the markdown backlink.
pub fn synthesize(
    template: Option<&str>,
    feature_name: &str,
    spec_rel: &str,
    date: &str,
) -> String {
    let Some(template) = template else {
        return fallback_body(feature_name, spec_rel, date);
    };

    let link = format!("[spec.md]({spec_rel})");
    let replacements = [
        ("[CHECKLIST TYPE]", CHECKLIST_TYPE),
        ("[FEATURE NAME]", feature_name),
        (
            "[Brief description of what this checklist covers]",
            CHECKLIST_BLURB,
        ),
        ("[DATE]", date),
        ("[Link to spec.md or relevant documentation]", link.as_str()),
    ];
    let mut content = template.to_string();
    for (token, value) in replacements {
        content = content.replace(token, value);
    }
    content
}

/// Write the checklist next to `spec_file`, under
/// `checklists/requirements.md`, creating directories as needed.
/// Returns the checklist path.
pub fn write(
    spec_file: &Path,
    root: &Path,
    feature_name: &str,
    template: Option<&str>,
    date: &str,
) -> Result<PathBuf> {
    let spec_rel = paths::rel_display(root, spec_file);
    let checklist_dir = spec_file
        .parent()
        .unwrap_or(root)
        .join(paths::CHECKLISTS_DIR);
    io::ensure_dir(&checklist_dir)?;

    let checklist_path = checklist_dir.join(paths::CHECKLIST_FILE);
    let content = synthesize(template, feature_name, &spec_rel, date);
    io::atomic_write(&checklist_path, content.as_bytes())?;
    Ok(checklist_path)
}

fn fallback_body(feature_name: &str, spec_rel: &str, date: &str) -> String {
    format!(
        "# Specification Quality Checklist: {feature_name}\n\n\
         **Purpose**: {CHECKLIST_BLURB}\n\
         **Created**: {date}\n\
         **Feature**: [spec.md]({spec_rel})\n\n\
         ## Content Quality\n\n\
         - [ ] No implementation details (languages, frameworks, APIs)\n\
         - [ ] Focused on user value and business needs\n\
         - [ ] Written for non-technical stakeholders\n\
         - [ ] All mandatory sections completed\n\n\
         ## Requirement Completeness\n\n\
         - [ ] No [NEEDS CLARIFICATION] markers remain\n\
         - [ ] Requirements are testable and unambiguous\n\
         - [ ] Success criteria are measurable\n\
         - [ ] Success criteria are technology-agnostic (no implementation details)\n\
         - [ ] All acceptance scenarios are defined\n\
         - [ ] Edge cases are identified\n\
         - [ ] Scope is clearly bounded\n\
         - [ ] Dependencies and assumptions identified\n\n\
         ## Feature Readiness\n\n\
         - [ ] All functional requirements have clear acceptance criteria\n\
         - [ ] User scenarios cover primary flows\n\
         - [ ] Feature meets measurable outcomes defined in Success Criteria\n\
         - [ ] No implementation details leak into specification\n\n\
         ## Notes\n\n\
         - Items marked incomplete require spec updates before planning\n"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fallback_contains_required_sections_and_link() {
        let body = synthesize(None, "Photo Organizer", "specs/1-photo/spec.md", "May 01, 2026");
        assert!(body.starts_with("# Specification Quality Checklist: Photo Organizer"));
        assert!(body.contains("## Content Quality"));
        assert!(body.contains("## Requirement Completeness"));
        assert!(body.contains("## Feature Readiness"));
        assert!(body.contains("## Notes"));
        assert!(body.contains("[spec.md](specs/1-photo/spec.md)"));
        assert!(body.contains("May 01, 2026"));
    }

    #[test]
    fn template_tokens_are_substituted_literally() {
        let template = "# [CHECKLIST TYPE] Checklist: [FEATURE NAME]\n\
                        Purpose: [Brief description of what this checklist covers]\n\
                        Created: [DATE]\n\
                        Feature: [Link to spec.md or relevant documentation]\n";
        let body = synthesize(
            Some(template),
            "Photo Organizer",
            "specs/1-photo/spec.md",
            "May 01, 2026",
        );
        assert!(body.starts_with("# Specification Quality Checklist: Photo Organizer"));
        assert!(body.contains("Created: May 01, 2026"));
        assert!(body.contains("Feature: [spec.md](specs/1-photo/spec.md)"));
    }

    #[test]
    fn write_creates_checklists_directory() {
        let dir = TempDir::new().unwrap();
        let spec_file = dir.path().join("specs/1-photo/spec.md");
        std::fs::create_dir_all(spec_file.parent().unwrap()).unwrap();
        std::fs::write(&spec_file, "# Feature Specification: X\n").unwrap();

        let path = write(&spec_file, dir.path(), "Photo Organizer", None, "May 01, 2026")
            .unwrap();
        assert_eq!(
            path,
            dir.path().join("specs/1-photo/checklists/requirements.md")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Specification Quality Checklist: Photo Organizer"));
    }
}
