//! Populates the project constitution from a template through the
//! generation backend, feeding any existing constitution back into the
//! prompt so revisions build on what is already there.

use crate::backend::SpecBackend;
use crate::error::{Result, SpeckitError};
use crate::io;
use crate::paths;
use crate::report::Reporter;
use crate::sanitize;
use std::path::{Path, PathBuf};

pub struct ConstitutionWorkflow<'a> {
    root: &'a Path,
    backend: &'a dyn SpecBackend,
    reporter: &'a dyn Reporter,
}

impl<'a> ConstitutionWorkflow<'a> {
    pub fn new(root: &'a Path, backend: &'a dyn SpecBackend, reporter: &'a dyn Reporter) -> Self {
        Self {
            root,
            backend,
            reporter,
        }
    }

    /// Run the workflow. Failures are reported and collapse to `None`.
    pub fn run(&self, guidance: &str) -> Option<PathBuf> {
        match self.execute(guidance) {
            Ok(path) => Some(path),
            Err(err) => {
                self.reporter.error(&err.to_string());
                None
            }
        }
    }

    fn execute(&self, guidance: &str) -> Result<PathBuf> {
        let template_path = paths::constitution_template(self.root);
        if !template_path.exists() {
            return Err(SpeckitError::TemplateNotFound(
                paths::CONSTITUTION_TEMPLATE.to_string(),
            ));
        }
        let template = std::fs::read_to_string(&template_path)?;

        let mut prompt = template.replace("$ARGUMENTS", guidance.trim());

        let constitution_path = paths::constitution_path(self.root);
        if constitution_path.exists() {
            let existing = std::fs::read_to_string(&constitution_path)?;
            prompt.push_str(&format!(
                "\n\nExisting constitution content:\n\n{existing}"
            ));
        }

        let response = self.backend.run(&prompt)?;
        if response.trim().is_empty() {
            return Err(SpeckitError::EmptyGeneration);
        }

        let sanitized = sanitize::clean(&response);
        io::atomic_write(&constitution_path, sanitized.as_bytes())?;

        self.reporter.output(&format!(
            "Updated {} with the assistant response.",
            paths::CONSTITUTION_FILE
        ));
        Ok(constitution_path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
