use anyhow::Context;
use speckit_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing speckit in: {}", root.display());

    // 1. Directory skeleton
    let dirs = [
        paths::SPECKIT_DIR,
        paths::TEMPLATES_DIR,
        paths::SCRIPTS_DIR,
        paths::MEMORY_DIR,
        paths::SPECS_DIR,
    ];
    for dir in dirs {
        let p = root.join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
    }

    // 2. Config if missing
    if !paths::config_path(root).exists() {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    // 3. Templates and the feature-creation script, if missing
    let assets: [(&str, &str); 4] = [
        (paths::SPEC_TEMPLATE, SPEC_TEMPLATE_CONTENT),
        (paths::CHECKLIST_TEMPLATE, CHECKLIST_TEMPLATE_CONTENT),
        (paths::CONSTITUTION_TEMPLATE, CONSTITUTION_TEMPLATE_CONTENT),
        (paths::CREATE_FEATURE_SCRIPT, CREATE_FEATURE_SCRIPT_CONTENT),
    ];
    for (rel, content) in assets {
        let path = root.join(rel);
        if io::write_if_missing(&path, content.as_bytes())? {
            println!("  created: {rel}");
        } else {
            println!("  exists:  {rel}");
        }
    }

    // 4. The creation script must be executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let script = paths::create_feature_script(root);
        let mut perms = std::fs::metadata(&script)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms)?;
    }

    println!("\nNext: speckit specify \"<feature description>\"");
    Ok(())
}

// ---------------------------------------------------------------------------
// Embedded scaffolding
// ---------------------------------------------------------------------------

const SPEC_TEMPLATE_CONTENT: &str = r#"Create a feature specification from this description:

$ARGUMENTS

Respond with only the completed markdown document, no commentary before
or after it. The document must begin with the exact line
`# Feature Specification: [FEATURE NAME]` and follow this skeleton:

# Feature Specification: [FEATURE NAME]

**Feature Branch**: `[###-feature-name]`
**Created**: [DATE]
**Status**: Draft

## User Scenarios & Testing

### Primary User Story
Describe the main journey in plain language.

### Acceptance Scenarios
1. **Given** [initial state], **When** [action], **Then** [expected outcome]

### Edge Cases
- What happens when [boundary condition]?

## Requirements

### Functional Requirements
- **FR-001**: System MUST [specific capability]

### Key Entities
- **[Entity]**: [what it represents]

## Success Criteria
- **SC-001**: [measurable, technology-agnostic outcome]

Mark any unclear requirement with [NEEDS CLARIFICATION: question].
Focus on user value; avoid implementation details.
"#;

const CHECKLIST_TEMPLATE_CONTENT: &str = r#"# [CHECKLIST TYPE] Checklist: [FEATURE NAME]

**Purpose**: [Brief description of what this checklist covers]
**Created**: [DATE]
**Feature**: [Link to spec.md or relevant documentation]

## Content Quality

- [ ] No implementation details (languages, frameworks, APIs)
- [ ] Focused on user value and business needs
- [ ] Written for non-technical stakeholders
- [ ] All mandatory sections completed

## Requirement Completeness

- [ ] No [NEEDS CLARIFICATION] markers remain
- [ ] Requirements are testable and unambiguous
- [ ] Success criteria are measurable
- [ ] All acceptance scenarios are defined
- [ ] Edge cases are identified
- [ ] Scope is clearly bounded

## Feature Readiness

- [ ] All functional requirements have clear acceptance criteria
- [ ] User scenarios cover primary flows
- [ ] No implementation details leak into specification

## Notes

- Items marked incomplete require spec updates before planning
"#;

const CONSTITUTION_TEMPLATE_CONTENT: &str = r#"Create or update the project constitution — the principles every
feature in this project must honor.

Guidance from the maintainer:

$ARGUMENTS

Respond with only the constitution document in markdown, beginning with
a top-level header. Keep principles concrete and testable; each one
gets a short name and a one-paragraph rationale.
"#;

const CREATE_FEATURE_SCRIPT_CONTENT: &str = r#"#!/usr/bin/env bash
# Create the branch and specs/ skeleton for a new feature.
# Usage: create-new-feature.sh [--json] --number N --short-name NAME <description>
set -e

JSON_MODE=false
NUMBER=""
SHORT_NAME=""
ARGS=()
while [[ $# -gt 0 ]]; do
    case "$1" in
        --json) JSON_MODE=true; shift ;;
        --number) NUMBER="$2"; shift 2 ;;
        --short-name) SHORT_NAME="$2"; shift 2 ;;
        *) ARGS+=("$1"); shift ;;
    esac
done

if [[ -z "$NUMBER" || -z "$SHORT_NAME" ]]; then
    echo "error: --number and --short-name are required" >&2
    exit 1
fi

REPO_ROOT=$(git rev-parse --show-toplevel 2>/dev/null || pwd)
FEATURE_NUM=$(printf "%03d" "$NUMBER")
BRANCH_NAME="${FEATURE_NUM}-${SHORT_NAME}"

if git -C "$REPO_ROOT" rev-parse --git-dir >/dev/null 2>&1; then
    git -C "$REPO_ROOT" checkout -b "$BRANCH_NAME" >/dev/null 2>&1 \
        || git -C "$REPO_ROOT" checkout "$BRANCH_NAME" >/dev/null 2>&1 \
        || echo "warning: could not switch to branch $BRANCH_NAME" >&2
fi

FEATURE_DIR="$REPO_ROOT/specs/$BRANCH_NAME"
mkdir -p "$FEATURE_DIR"
SPEC_FILE="$FEATURE_DIR/spec.md"
touch "$SPEC_FILE"

if $JSON_MODE; then
    printf '{"BRANCH_NAME":"%s","SPEC_FILE":"%s","FEATURE_NUM":"%s"}\n' \
        "$BRANCH_NAME" "$SPEC_FILE" "$FEATURE_NUM"
else
    echo "BRANCH_NAME: $BRANCH_NAME"
    echo "SPEC_FILE: $SPEC_FILE"
fi
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_tree_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();

        assert!(dir.path().join(".speckit/config.yaml").exists());
        assert!(dir.path().join(".speckit/templates/spec-template.md").exists());
        assert!(dir.path().join(".speckit/templates/checklist-template.md").exists());
        assert!(dir
            .path()
            .join(".speckit/scripts/bash/create-new-feature.sh")
            .exists());
        assert!(dir.path().join("specs").is_dir());

        // Second run leaves existing files alone
        std::fs::write(dir.path().join(".speckit/config.yaml"), "remote: fork\n").unwrap();
        run(dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".speckit/config.yaml")).unwrap(),
            "remote: fork\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn init_marks_script_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();
        let mode = std::fs::metadata(
            dir.path().join(".speckit/scripts/bash/create-new-feature.sh"),
        )
        .unwrap()
        .permissions()
        .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn templates_carry_their_tokens() {
        assert!(SPEC_TEMPLATE_CONTENT.contains("$ARGUMENTS"));
        assert!(SPEC_TEMPLATE_CONTENT.contains("[FEATURE NAME]"));
        assert!(SPEC_TEMPLATE_CONTENT.contains("[###-feature-name]"));
        assert!(SPEC_TEMPLATE_CONTENT.contains("[DATE]"));
        assert!(CHECKLIST_TEMPLATE_CONTENT.contains("[CHECKLIST TYPE]"));
        assert!(CHECKLIST_TEMPLATE_CONTENT
            .contains("[Link to spec.md or relevant documentation]"));
        assert!(CONSTITUTION_TEMPLATE_CONTENT.contains("$ARGUMENTS"));
    }
}
