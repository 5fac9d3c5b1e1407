use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which wire payload an artifact holds; names the sidecar and tags the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    PointSet,
    Triangulation,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::PointSet => "pointset",
            ArtifactKind::Triangulation => "triangulation",
        }
    }
}

/// Metadata recorded next to a written payload.
pub struct Payload {
    pub kind: ArtifactKind,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(kind: ArtifactKind, params: Value) -> Self {
        Self {
            kind,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// Write `<stem>.<kind>.provenance.json` beside `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact, payload.kind);
    if let Some(dir) = sidecar.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?;
    }

    let callsite = Location::caller();
    let doc = json!({
        "kind": payload.kind.as_str(),
        "code_rev": code_rev(),
        "triangulator_version": triangulator::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": payload.params,
        "inputs": payload.inputs,
        "payload": {
            "path": artifact.to_string_lossy(),
            "bytes": fs::metadata(artifact).map(|m| m.len()).ok(),
        },
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), kind = payload.kind.as_str(), "provenance sidecar written");
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path, kind: ArtifactKind) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| kind.as_str().to_string());
    artifact.with_file_name(format!("{stem}.{}.provenance.json", kind.as_str()))
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run time,
/// then `git rev-parse HEAD`; `"unknown"` when none is available.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty());
    from_env
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
