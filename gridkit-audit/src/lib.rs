//! Offline scoring of column-width strategy descriptions.
//!
//! The auditor never starts a terminal: it loads the strategy description
//! files, resolves each described strategy against generated scenario data
//! through the real gridkit resolver, and ranks the results. A scenario
//! that fails to score is isolated and reported; the run always produces a
//! ranked report.

use std::path::Path;

use log::{info, warn};

pub mod error;
pub mod heuristics;
pub mod report;
pub mod scenario;
pub mod strategy;

pub use error::AuditError;
pub use report::{Report, StrategyReport};
pub use strategy::StrategyDoc;

pub fn run_audit(dir: &Path) -> Result<Report, AuditError> {
    let docs = StrategyDoc::load_dir(dir)?;
    info!("auditing {} strategy descriptions from {}", docs.len(), dir.display());

    let mut strategies = Vec::with_capacity(docs.len());
    for doc in &docs {
        let mut scores = Vec::new();
        let mut failures = Vec::new();

        for scenario in scenario::scenarios() {
            match heuristics::score_scenario(doc, &scenario) {
                Ok(score) => scores.push(score),
                Err(err) => {
                    warn!("{}: scenario {} not scored: {err}", doc.name, scenario.name);
                    failures.push(format!("{}: {err}", scenario.name));
                }
            }
        }

        let overall = if scores.is_empty() {
            0
        } else {
            let sum: u32 = scores.iter().map(|s| s.score).sum();
            (sum as f32 / scores.len() as f32).round() as u32
        };

        strategies.push(StrategyReport {
            name: doc.name.clone(),
            title: doc.title.clone(),
            overall,
            recommendation: report::recommendation(overall),
            scenarios: scores,
            failures,
        });
    }

    strategies.sort_by(|a, b| b.overall.cmp(&a.overall).then_with(|| a.name.cmp(&b.name)));

    Ok(Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        strategy_count: strategies.len(),
        strategies,
    })
}
