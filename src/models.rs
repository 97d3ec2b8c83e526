//! Core data models for pagefix
//!
//! A run produces one `PatchOutcome` per listed file, collected in order into
//! a `PatchReport`.

use std::fmt;
use std::path::PathBuf;

use strum::Display;

/// Coarse status of a single file, used for logging and report counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PatchStatus {
    Fixed,
    PatternNotFound,
    FileNotFound,
}

/// Result of processing one file from the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The script block was found and the file was rewritten.
    ///
    /// `category` and `gender` come from the first match only, even when
    /// several blocks were replaced.
    Fixed {
        file: String,
        category: String,
        gender: String,
    },
    /// The file exists but contains no matching block; it was left untouched
    PatternNotFound { file: String },
    /// Nothing exists at the expected path
    FileNotFound { path: PathBuf },
}

impl PatchOutcome {
    pub fn status(&self) -> PatchStatus {
        match self {
            PatchOutcome::Fixed { .. } => PatchStatus::Fixed,
            PatchOutcome::PatternNotFound { .. } => PatchStatus::PatternNotFound,
            PatchOutcome::FileNotFound { .. } => PatchStatus::FileNotFound,
        }
    }
}

/// Renders the status line printed for this file
impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Fixed { file, .. } => write!(f, "Fixed {}", file),
            PatchOutcome::PatternNotFound { file } => write!(f, "Pattern not found in {}", file),
            PatchOutcome::FileNotFound { path } => write!(f, "File not found: {}", path.display()),
        }
    }
}

/// Ordered outcomes of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    outcomes: Vec<PatchOutcome>,
}

impl PatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: PatchOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outcomes in the same order as the configured file list
    pub fn outcomes(&self) -> &[PatchOutcome] {
        &self.outcomes
    }

    /// Number of files that ended with the given status
    pub fn count(&self, status: PatchStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status() == status).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        let fixed = PatchOutcome::Fixed {
            file: "glasses-homme.html".to_string(),
            category: "glasses".to_string(),
            gender: "homme".to_string(),
        };
        assert_eq!(fixed.to_string(), "Fixed glasses-homme.html");

        let missing_pattern = PatchOutcome::PatternNotFound {
            file: "packs-homme.html".to_string(),
        };
        assert_eq!(missing_pattern.to_string(), "Pattern not found in packs-homme.html");

        let missing_file = PatchOutcome::FileNotFound {
            path: PathBuf::from("/site/wallets-femme.html"),
        };
        assert_eq!(missing_file.to_string(), "File not found: /site/wallets-femme.html");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PatchStatus::Fixed.to_string(), "fixed");
        assert_eq!(PatchStatus::PatternNotFound.to_string(), "pattern_not_found");
        assert_eq!(PatchStatus::FileNotFound.to_string(), "file_not_found");
    }

    #[test]
    fn test_report_counts() {
        let mut report = PatchReport::new();
        assert!(report.is_empty());

        report.push(PatchOutcome::PatternNotFound { file: "a.html".to_string() });
        report.push(PatchOutcome::FileNotFound { path: PathBuf::from("b.html") });
        report.push(PatchOutcome::PatternNotFound { file: "c.html".to_string() });

        assert_eq!(report.len(), 3);
        assert_eq!(report.count(PatchStatus::PatternNotFound), 2);
        assert_eq!(report.count(PatchStatus::FileNotFound), 1);
        assert_eq!(report.count(PatchStatus::Fixed), 0);
        assert_eq!(report.outcomes()[1].status(), PatchStatus::FileNotFound);
    }
}
