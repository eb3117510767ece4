use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn speckit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("speckit").unwrap();
    cmd.current_dir(dir.path()).env("SPECKIT_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    speckit(dir).arg("init").assert().success();
}

/// Point the configured backend at a stub that swallows the prompt and
/// prints a canned response.
#[cfg(unix)]
fn install_stub_backend(dir: &TempDir, response: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(dir.path().join("response.txt"), response).unwrap();
    let script = dir.path().join("fake-claude.sh");
    std::fs::write(
        &script,
        "#!/usr/bin/env bash\ncat >/dev/null\ncat \"$(dirname \"$0\")/response.txt\"\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();

    std::fs::write(
        dir.path().join(".speckit/config.yaml"),
        "remote: origin\nbackend:\n  command: ./fake-claude.sh\n",
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// speckit init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    speckit(&dir).arg("init").assert().success();

    assert!(dir.path().join(".speckit").is_dir());
    assert!(dir.path().join(".speckit/config.yaml").exists());
    assert!(dir.path().join(".speckit/templates/spec-template.md").exists());
    assert!(dir
        .path()
        .join(".speckit/templates/checklist-template.md")
        .exists());
    assert!(dir
        .path()
        .join(".speckit/templates/constitution-template.md")
        .exists());
    assert!(dir
        .path()
        .join(".speckit/scripts/bash/create-new-feature.sh")
        .exists());
    assert!(dir.path().join(".speckit/memory").is_dir());
    assert!(dir.path().join("specs").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    speckit(&dir).arg("init").assert().success();
    speckit(&dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// speckit specify
// ---------------------------------------------------------------------------

#[test]
fn specify_requires_a_description() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    speckit(&dir).arg("specify").assert().failure();
}

#[test]
fn specify_without_template_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    speckit(&dir)
        .args(["specify", "Create photo albums"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spec-template.md"));
    assert!(!dir.path().join("specs").exists());
}

#[cfg(unix)]
#[test]
fn specify_end_to_end() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    install_stub_backend(&dir, "# Feature Specification: Photo Organizer\n\n## Content\n");

    speckit(&dir)
        .args(["specify", "Create photo albums"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Specification written to"))
        .stdout(predicate::str::contains("Checklist created at"));

    let spec = dir.path().join("specs/001-create-photo-albums/spec.md");
    assert_eq!(
        std::fs::read_to_string(&spec).unwrap(),
        "# Feature Specification: Photo Organizer\n\n## Content\n"
    );

    let checklist = dir
        .path()
        .join("specs/001-create-photo-albums/checklists/requirements.md");
    let checklist_body = std::fs::read_to_string(&checklist).unwrap();
    assert!(
        checklist_body.contains("# Specification Quality Checklist: Photo Organizer")
    );
    assert!(checklist_body.contains("spec.md"));
}

#[cfg(unix)]
#[test]
fn specify_rejects_malformed_backend_response() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    install_stub_backend(
        &dir,
        "I'll create a feature specification based on your description.",
    );

    speckit(&dir)
        .args(["specify", "Create photo albums"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Specification generation failed"))
        .stdout(predicate::str::contains("Assistant response:"));

    // The script touches an empty spec file; the malformed response must
    // not be written into it.
    let spec = dir.path().join("specs/001-create-photo-albums/spec.md");
    assert_eq!(std::fs::read_to_string(&spec).unwrap(), "");
}

// ---------------------------------------------------------------------------
// speckit constitution
// ---------------------------------------------------------------------------

#[test]
fn constitution_without_template_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    speckit(&dir)
        .args(["constitution", "Focus on testing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("constitution-template.md"));
}

#[cfg(unix)]
#[test]
fn constitution_end_to_end() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    install_stub_backend(&dir, "# Constitution\n\nTest everything.\n");

    speckit(&dir)
        .args(["constitution", "Emphasise testing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("constitution.md"));

    let body =
        std::fs::read_to_string(dir.path().join(".speckit/memory/constitution.md")).unwrap();
    assert_eq!(body, "# Constitution\n\nTest everything.");
}
