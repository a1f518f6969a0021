//! `<stem>.provenance.json` sidecars for clip results and fixture renders.
//!
//! A sidecar names the command and input that produced the artifact and
//! summarizes the clip behind it, so a render or result file can be checked
//! without rerunning anything.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use shclip::api::is_convex;
use shclip::{polygon_area, Point2};

/// Shape summary of one `intersect_polygons` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipRecord {
    /// 1-based built-in fixture number, for renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<usize>,
    pub subject_vertices: usize,
    pub clip_vertices: usize,
    pub clip_convex: bool,
    pub result_vertices: usize,
    pub result_area: f64,
}

impl ClipRecord {
    pub fn new(subject: &[Point2], clip: &[Point2], result: &[Point2]) -> Self {
        Self {
            fixture: None,
            subject_vertices: subject.len(),
            clip_vertices: clip.len(),
            clip_convex: is_convex(clip),
            result_vertices: result.len(),
            result_area: polygon_area(result),
        }
    }

    pub fn with_fixture(mut self, k: usize) -> Self {
        self.fixture = Some(k);
        self
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    command: &'a str,
    shclip_version: &'static str,
    code_rev: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    output: String,
    clip: &'a ClipRecord,
}

/// Write the sidecar of `artifact` and return its path.
pub fn write_sidecar(
    artifact: &Path,
    command: &str,
    input: Option<&Path>,
    record: &ClipRecord,
) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        command,
        shclip_version: shclip::VERSION,
        code_rev: current_git_rev(),
        input: input.map(|p| p.display().to_string()),
        output: artifact.display().to_string(),
        clip: record,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/test3.bmp` → `dir/test3.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `git rev-parse --short HEAD`, or `"unknown"` outside a checkout.
pub fn current_git_rev() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
