use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SPECKIT_DIR: &str = ".speckit";
pub const TEMPLATES_DIR: &str = ".speckit/templates";
pub const SCRIPTS_DIR: &str = ".speckit/scripts/bash";
pub const MEMORY_DIR: &str = ".speckit/memory";

pub const CONFIG_FILE: &str = ".speckit/config.yaml";
pub const SPEC_TEMPLATE: &str = ".speckit/templates/spec-template.md";
pub const CHECKLIST_TEMPLATE: &str = ".speckit/templates/checklist-template.md";
pub const CONSTITUTION_TEMPLATE: &str = ".speckit/templates/constitution-template.md";
pub const CREATE_FEATURE_SCRIPT: &str = ".speckit/scripts/bash/create-new-feature.sh";
pub const CONSTITUTION_FILE: &str = ".speckit/memory/constitution.md";

pub const SPECS_DIR: &str = "specs";
pub const CHECKLISTS_DIR: &str = "checklists";
pub const CHECKLIST_FILE: &str = "requirements.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn spec_template(root: &Path) -> PathBuf {
    root.join(SPEC_TEMPLATE)
}

pub fn checklist_template(root: &Path) -> PathBuf {
    root.join(CHECKLIST_TEMPLATE)
}

pub fn constitution_template(root: &Path) -> PathBuf {
    root.join(CONSTITUTION_TEMPLATE)
}

pub fn create_feature_script(root: &Path) -> PathBuf {
    root.join(CREATE_FEATURE_SCRIPT)
}

pub fn constitution_path(root: &Path) -> PathBuf {
    root.join(CONSTITUTION_FILE)
}

pub fn specs_dir(root: &Path) -> PathBuf {
    root.join(SPECS_DIR)
}

/// Root-relative display path with forward slashes, for diagnostics and
/// markdown links. Falls back to the full path when `path` is not under
/// `root`.
pub fn rel_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.speckit/config.yaml")
        );
        assert_eq!(
            create_feature_script(root),
            PathBuf::from("/tmp/proj/.speckit/scripts/bash/create-new-feature.sh")
        );
        assert_eq!(specs_dir(root), PathBuf::from("/tmp/proj/specs"));
    }

    #[test]
    fn rel_display_inside_root() {
        let root = Path::new("/tmp/proj");
        let spec = root.join("specs/001-photo/spec.md");
        assert_eq!(rel_display(root, &spec), "specs/001-photo/spec.md");
    }

    #[test]
    fn rel_display_outside_root_falls_back() {
        let root = Path::new("/tmp/proj");
        let other = Path::new("/elsewhere/spec.md");
        assert_eq!(rel_display(root, other), "/elsewhere/spec.md");
    }
}
