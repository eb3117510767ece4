//! Invokes the feature-creation script and parses its JSON result.
//!
//! The script owns branch creation and the `specs/<N>-<slug>/` skeleton;
//! this module only runs it and validates the contract: a single JSON
//! object on stdout carrying at least `SPEC_FILE` and `BRANCH_NAME`.

use crate::error::{Result, SpeckitError};
use crate::paths;
use crate::report::Reporter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of a successful provisioning run.
#[derive(Debug, Clone)]
pub struct WorkspaceDescriptor {
    pub spec_file: PathBuf,
    pub branch_name: String,
}

/// Wire shape of the script's stdout. Field names are fixed by the
/// script contract; both are validated separately so each absence gets
/// its own diagnostic.
#[derive(Debug, Deserialize)]
struct ScriptOutput {
    #[serde(rename = "SPEC_FILE")]
    spec_file: Option<String>,
    #[serde(rename = "BRANCH_NAME")]
    branch_name: Option<String>,
}

/// Run `bash <script> --json --number <N> --short-name <slug> <description>`
/// with the project root as working directory.
///
/// Non-zero exit, a missing interpreter, empty stdout, unparsable JSON,
/// or a missing required field each map to their own error variant. On
/// success any stderr content is surfaced as a warning — tools may emit
/// informational diagnostics without failing.
pub fn run_creation_script(
    script: &Path,
    root: &Path,
    description: &str,
    short_name: &str,
    number: u32,
    reporter: &dyn Reporter,
) -> Result<WorkspaceDescriptor> {
    let output = Command::new("bash")
        .arg(script)
        .arg("--json")
        .arg("--number")
        .arg(number.to_string())
        .arg("--short-name")
        .arg(short_name)
        .arg(description)
        .current_dir(root)
        .output()
        .map_err(|_| SpeckitError::BashUnavailable(paths::rel_display(root, script)))?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        return Err(SpeckitError::ProvisionFailed { stderr, stdout });
    }

    if !stderr.is_empty() {
        reporter.warning(&stderr);
    }

    if stdout.is_empty() {
        return Err(SpeckitError::ProvisionEmptyOutput);
    }

    let parsed: ScriptOutput = serde_json::from_str(&stdout)
        .map_err(|_| SpeckitError::ProvisionBadJson { stdout: stdout.clone() })?;

    let spec_file = parsed
        .spec_file
        .filter(|s| !s.is_empty())
        .ok_or(SpeckitError::ProvisionMissingSpecFile)?;
    let branch_name = parsed
        .branch_name
        .filter(|s| !s.is_empty())
        .ok_or(SpeckitError::ProvisionMissingBranchName)?;

    let spec_file = PathBuf::from(spec_file);
    let spec_file = if spec_file.is_absolute() {
        spec_file
    } else {
        root.join(spec_file)
    };

    Ok(WorkspaceDescriptor {
        spec_file,
        branch_name,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
