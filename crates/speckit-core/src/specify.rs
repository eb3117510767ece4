//! The feature-specification workflow.
//!
//! description → slug → next number → provisioned workspace → prompt →
//! backend → sanitize + validate → spec file → checklist. Each stage's
//! output is a precondition for the next; the first failure aborts the
//! rest and is reported through the [`Reporter`], never propagated to
//! the caller.

use crate::backend::SpecBackend;
use crate::checklist;
use crate::error::{Result, SpeckitError};
use crate::git::BranchSource;
use crate::io;
use crate::numbering;
use crate::paths;
use crate::provision;
use crate::report::Reporter;
use crate::sanitize;
use crate::short_name;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Required first line of every generated specification.
pub const SPEC_HEADER: &str = "# Feature Specification:";

/// Everything the workflow produced, for callers that track files or
/// print their own summary.
#[derive(Debug, Clone)]
pub struct SpecifyOutcome {
    pub spec_file: PathBuf,
    pub checklist_file: PathBuf,
    pub branch_name: String,
    pub feature_name: String,
    pub feature_number: u32,
}

/// The workflow with its collaborators threaded explicitly.
pub struct SpecifyWorkflow<'a> {
    root: &'a Path,
    backend: &'a dyn SpecBackend,
    git: &'a dyn BranchSource,
    reporter: &'a dyn Reporter,
}

impl<'a> SpecifyWorkflow<'a> {
    pub fn new(
        root: &'a Path,
        backend: &'a dyn SpecBackend,
        git: &'a dyn BranchSource,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            root,
            backend,
            git,
            reporter,
        }
    }

    /// Run the workflow. Anticipated failures are reported and collapse
    /// to `None`; the filesystem is left as it was before the failing
    /// stage.
    pub fn run(&self, description: &str) -> Option<SpecifyOutcome> {
        match self.execute(description) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.report_failure(&err);
                None
            }
        }
    }

    fn execute(&self, description: &str) -> Result<SpecifyOutcome> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SpeckitError::EmptyDescription);
        }

        let template_path = paths::spec_template(self.root);
        if !template_path.exists() {
            return Err(SpeckitError::TemplateNotFound(
                paths::SPEC_TEMPLATE.to_string(),
            ));
        }
        let template = std::fs::read_to_string(&template_path)?;

        let short_name = short_name::derive(description);
        let number =
            numbering::next_feature_number(self.git, self.root, &short_name, self.reporter);

        let script = paths::create_feature_script(self.root);
        if !script.exists() {
            return Err(SpeckitError::ScriptNotFound(
                paths::CREATE_FEATURE_SCRIPT.to_string(),
            ));
        }
        let workspace = provision::run_creation_script(
            &script,
            self.root,
            description,
            &short_name,
            number,
            self.reporter,
        )?;

        let date = Local::now().format("%B %d, %Y").to_string();
        let prompt = build_prompt(&template, description, &workspace.branch_name, &date);

        let raw = self.backend.run(&prompt)?;
        if raw.trim().is_empty() {
            return Err(SpeckitError::EmptyGeneration);
        }

        let body = sanitize::clean(&raw);
        let body = format!("{}\n", body.trim_end());
        if !body.trim_start().starts_with(SPEC_HEADER) {
            return Err(SpeckitError::MalformedGeneration { raw });
        }

        io::atomic_write(&workspace.spec_file, body.as_bytes())?;

        let feature_name = extract_feature_name(&body, &workspace.branch_name);
        let checklist_template = read_optional(&paths::checklist_template(self.root));
        let checklist_file = checklist::write(
            &workspace.spec_file,
            self.root,
            &feature_name,
            checklist_template.as_deref(),
            &date,
        )?;

        let spec_rel = paths::rel_display(self.root, &workspace.spec_file);
        let checklist_rel = paths::rel_display(self.root, &checklist_file);
        self.reporter
            .output(&format!("Specification written to {spec_rel}"));
        self.reporter
            .output(&format!("Checklist created at {checklist_rel}"));
        self.reporter.output(&format!(
            "Branch created: {} ({})",
            workspace.branch_name, feature_name
        ));
        self.reporter
            .output("Specification ready for review and planning.");

        Ok(SpecifyOutcome {
            spec_file: workspace.spec_file,
            checklist_file,
            branch_name: workspace.branch_name,
            feature_name,
            feature_number: number,
        })
    }

    /// Every anticipated failure becomes a fatal diagnostic; the
    /// variants that carry captured output echo it for operator
    /// inspection.
    fn report_failure(&self, err: &SpeckitError) {
        self.reporter.error(&err.to_string());
        match err {
            SpeckitError::ProvisionFailed { stderr, stdout } => {
                if !stderr.is_empty() {
                    self.reporter.output(stderr);
                }
                if !stdout.is_empty() {
                    self.reporter.output(stdout);
                }
            }
            SpeckitError::ProvisionBadJson { stdout } => {
                if !stdout.is_empty() {
                    self.reporter.output(stdout);
                }
            }
            SpeckitError::MalformedGeneration { raw } => {
                self.reporter.output("Assistant response:");
                self.reporter.output(raw);
            }
            _ => {}
        }
    }
}

/// Substitute the description placeholder first, then the metadata
/// tokens — metadata values can never be mistaken for unresolved
/// placeholders.
fn build_prompt(template: &str, description: &str, branch_name: &str, date: &str) -> String {
    let headline = description.trim().trim_end_matches('.');
    let headline = if headline.is_empty() {
        "Feature"
    } else {
        headline
    };

    let mut prompt = template.replace("$ARGUMENTS", description);
    for (token, value) in [
        ("[FEATURE NAME]", headline),
        ("[###-feature-name]", branch_name),
        ("[DATE]", date),
    ] {
        prompt = prompt.replace(token, value);
    }
    prompt
}

/// Feature title for the checklist: first markdown header of the spec
/// body, with a leading `Feature Specification:` label stripped. Falls
/// back to the branch identifier.
fn extract_feature_name(spec_body: &str, fallback: &str) -> String {
    for line in spec_body.lines() {
        let stripped = line.trim();
        if !stripped.starts_with('#') {
            continue;
        }
        let header = stripped.trim_start_matches('#').trim();
        if header.is_empty() {
            continue;
        }
        let header = if header.to_lowercase().starts_with("feature specification:") {
            header
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or("")
        } else {
            header
        };
        if !header.is_empty() {
            return header.to_string();
        }
    }
    fallback.to_string()
}

fn read_optional(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
