//! Ranked audit report: JSON artifact plus console summary.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::AuditError;
use crate::heuristics::ScenarioScore;

#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub name: String,
    pub title: String,
    pub overall: u32,
    pub recommendation: String,
    pub scenarios: Vec<ScenarioScore>,
    /// Scenarios that could not be scored, with the reason.
    pub failures: Vec<String>,
}

impl StrategyReport {
    pub fn issue_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.issues.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub strategy_count: usize,
    /// Sorted by overall score, best first.
    pub strategies: Vec<StrategyReport>,
}

impl Report {
    pub fn has_failures(&self) -> bool {
        self.strategies.iter().any(|s| !s.failures.is_empty())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), AuditError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| AuditError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Human summary for the console: ranking, the winner, and issue
    /// counts per strategy.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("Validation summary\n");
        out.push_str("==================\n\n");
        out.push_str("Ranking by overall score:\n");
        for (rank, s) in self.strategies.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}. {:<28} {:>3}/100  ({} issues)\n",
                rank + 1,
                s.title,
                s.overall,
                s.issue_count(),
            ));
        }

        if let Some(best) = self.strategies.first() {
            out.push_str(&format!(
                "\nTop recommendation: {} - {}\n",
                best.title, best.recommendation
            ));
        }

        for s in self.strategies.iter().filter(|s| !s.failures.is_empty()) {
            out.push_str(&format!("\n{} failed to score:\n", s.name));
            for failure in &s.failures {
                out.push_str(&format!("  - {failure}\n"));
            }
        }

        out
    }
}

pub fn recommendation(overall: u32) -> String {
    let text = if overall >= 90 {
        "Excellent - recommended for production use"
    } else if overall >= 75 {
        "Good - suitable for most grids with minor considerations"
    } else if overall >= 60 {
        "Fair - consider for specific use cases, address the issues"
    } else if overall >= 40 {
        "Poor - significant issues, needs major modifications"
    } else {
        "Unsuitable - does not meet minimum requirements"
    };
    text.to_string()
}
