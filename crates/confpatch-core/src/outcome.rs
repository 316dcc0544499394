use serde::Serialize;

/// The result of processing a single target file.
///
/// Every failure mode is folded into a variant here; the rewrite engine
/// never propagates per-file errors, so a run always covers the full target
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileOutcome {
    /// The declaration was found and the replacement written (or would be,
    /// under a dry run).
    Updated,
    /// The declaration was found and already matches the replacement.
    Current,
    /// The file exists but contains no matching declaration.
    NoMatch,
    /// The file does not exist.
    Missing,
    /// The file could not be read or written.
    Failed(String),
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Current => "current",
            Self::NoMatch => "no-match",
            Self::Missing => "missing",
            Self::Failed(_) => "failed",
        }
    }
}

/// One processed target, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub outcome: FileOutcome,
}

/// Aggregated counts over one run. Every outcome has its own bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub updated: usize,
    pub current: usize,
    pub no_match: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::Current => self.current += 1,
            FileOutcome::NoMatch => self.no_match += 1,
            FileOutcome::Missing => self.missing += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.current + self.no_match + self.missing + self.failed
    }

    /// True when some target would be rewritten by `apply` or could not be
    /// processed. `current` and `no-match` files are clean.
    pub fn has_drift(&self) -> bool {
        self.updated > 0 || self.missing > 0 || self.failed > 0
    }
}
