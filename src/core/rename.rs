//! Tab-bar asset renaming.
//!
//! Holds the static localized-to-English filename mapping and performs a
//! one-shot rename pass over a single directory. Missing sources are
//! skipped; a pre-existing destination or a failed rename aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Localized tab-bar icon filenames and their English replacements.
/// Iteration order drives output order.
pub const TABBAR_MAPPING: [(&str, &str); 10] = [
    ("首页.png", "home.png"),
    ("首页-选中.png", "home-active.png"),
    ("名医.png", "doctor.png"),
    ("名医-选中.png", "doctor-active.png"),
    ("买药.png", "medicine.png"),
    ("买药-选中.png", "medicine-active.png"),
    ("医说.png", "yishuo.png"),
    ("医说-选中.png", "yishuo-active.png"),
    ("我的.png", "mine.png"),
    ("我的-选中.png", "mine-active.png"),
];

/// Per-entry result of a rename pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenameOutcome {
    #[serde(rename_all = "camelCase")]
    Renamed { original: String, renamed_to: String },
    Skipped { original: String },
}

/// Summary of a completed rename pass.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenameSummary {
    pub renamed: u32,
    pub skipped: u32,
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RenameOutcome) {
        match &outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }
}

/// Renames files inside a single directory according to a fixed mapping.
pub struct Renamer {
    dir: PathBuf,
    entries: Vec<(String, String)>,
}

impl Renamer {
    pub fn new(dir: impl Into<PathBuf>, mapping: &[(&str, &str)]) -> Self {
        Self {
            dir: dir.into(),
            entries: mapping
                .iter()
                .map(|(original, target)| (original.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Renamer over the stock tab-bar icon mapping.
    pub fn tabbar(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, &TABBAR_MAPPING)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run the rename pass, surfacing each outcome to `observe` as it
    /// happens so callers can report in mapping order.
    ///
    /// A missing source is skipped, not an error. A pre-existing
    /// destination or a failed rename aborts the remaining entries;
    /// renames already applied stand.
    pub fn run(&self, mut observe: impl FnMut(&RenameOutcome)) -> Result<RenameSummary> {
        let mut summary = RenameSummary::new();

        for (original, target) in &self.entries {
            let src = self.dir.join(original);
            if !src.exists() {
                let outcome = RenameOutcome::Skipped {
                    original: original.clone(),
                };
                observe(&outcome);
                summary.record(outcome);
                continue;
            }

            let dst = self.dir.join(target);
            if dst.exists() {
                return Err(Error::DestinationExists {
                    original: original.clone(),
                    target: target.clone(),
                });
            }

            fs::rename(&src, &dst)?;
            let outcome = RenameOutcome::Renamed {
                original: original.clone(),
                renamed_to: target.clone(),
            };
            observe(&outcome);
            summary.record(outcome);
        }

        Ok(summary)
    }
}
