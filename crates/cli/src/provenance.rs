//! Run record written next to a hull output file.
//!
//! `faces.txt` gets `faces.provenance.json`: the preprocessing knobs, where
//! the points came from, and V/E/F/χ of every batch, so an output file can be
//! checked against a rerun without re-reading the input.

use anyhow::{Context, Result};
use kinhull::api::{HullCfg, HullStats};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Preprocessing knobs as they were applied.
#[derive(Debug, Serialize)]
pub struct CfgRecord {
    pub angle: f64,
    pub jitter: f64,
    pub seed: u64,
}

impl From<&HullCfg> for CfgRecord {
    fn from(cfg: &HullCfg) -> Self {
        Self {
            angle: cfg.angle,
            jitter: cfg.jitter,
            seed: cfg.seed,
        }
    }
}

/// Surface counts of one batch.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub batch: usize,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub euler: i64,
}

#[derive(Debug, Serialize)]
pub struct HullProvenance {
    pub tool: &'static str,
    pub version: &'static str,
    pub code_rev: String,
    /// Input file, `None` for stdin.
    pub input: Option<String>,
    pub output: String,
    pub format: String,
    pub cfg: CfgRecord,
    pub batches: Vec<BatchSummary>,
}

impl HullProvenance {
    pub fn new(
        input: Option<&Path>,
        output: &Path,
        format: &str,
        cfg: &HullCfg,
        stats: &[HullStats],
    ) -> Self {
        let batches = stats
            .iter()
            .enumerate()
            .map(|(batch, s)| BatchSummary {
                batch,
                vertices: s.vertices,
                edges: s.edges,
                faces: s.faces,
                euler: s.euler_characteristic(),
            })
            .collect();
        Self {
            tool: "kinhull",
            version: kinhull::VERSION,
            code_rev: current_git_rev(),
            input: input.map(|p| p.display().to_string()),
            output: output.display().to_string(),
            format: format.to_string(),
            cfg: cfg.into(),
            batches,
        }
    }
}

/// Write the record for `output` and return the sidecar path.
pub fn write_sidecar(output: &Path, record: &HullProvenance) -> Result<PathBuf> {
    let path = provenance_path(output);
    let body = serde_json::to_vec_pretty(record).context("serializing provenance")?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/faces.txt` -> `dir/faces.provenance.json`.
fn provenance_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
