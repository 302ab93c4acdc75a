//! The five weighted scoring heuristics.
//!
//! Width and frozen-offset checks exercise the real resolver against
//! generated scenario data; responsive maturity, render-time estimation and
//! compatibility remain vocabulary- and constant-based linting of the
//! description text. Weights: 25 + 25 + 20 + 15 + 15 = 100.

use serde::Serialize;

use gridkit::FrozenColumns;

use crate::error::AuditError;
use crate::scenario::{self, Scenario};
use crate::strategy::StrategyDoc;

/// Pinned column must stay within this share of the container.
pub const MAX_PINNED_PERCENT: f32 = 25.0;
/// Acceptable estimated render time in milliseconds.
pub const MAX_RENDER_MS: u32 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioMetrics {
    pub pinned_percent: f32,
    pub estimated_render_ms: u32,
    pub frozen_exact: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioScore {
    pub name: String,
    pub score: u32,
    pub issues: Vec<String>,
    pub metrics: ScenarioMetrics,
}

/// Score one strategy description against one scenario.
pub fn score_scenario(
    doc: &StrategyDoc,
    scenario: &Scenario,
) -> Result<ScenarioScore, AuditError> {
    let strategy = doc
        .width_strategy()
        .ok_or_else(|| AuditError::UnknownStrategy {
            name: doc.name.clone(),
        })?;

    let metrics = scenario::content_metrics(scenario);
    let plan = strategy.resolve(&metrics, scenario.container, scenario.column_count);

    let mut issues = Vec::new();
    let mut score = 0;

    let pinned_percent = if scenario.container == 0 {
        0.0
    } else {
        plan.width(0) as f32 * 100.0 / scenario.container as f32
    };
    score += width_score(pinned_percent, &mut issues);

    let frozen = FrozenColumns::normalize(&[0, 1], scenario.column_count);
    let frozen_exact = frozen.offset(&plan, 0) == Some(0)
        && frozen.offset(&plan, 1) == Some(plan.width(0));
    score += frozen_score(doc, frozen_exact, &mut issues);

    score += responsive_score(doc, &mut issues);

    let estimated_render_ms =
        estimate_render_ms(doc, scenario.column_count, scenario.row_count);
    score += performance_score(estimated_render_ms, &mut issues);

    score += compatibility_score(doc, &mut issues);

    Ok(ScenarioScore {
        name: scenario.name.to_string(),
        score,
        issues,
        metrics: ScenarioMetrics {
            pinned_percent,
            estimated_render_ms,
            frozen_exact,
        },
    })
}

/// Weight 25: the resolved pinned-column share of the container.
pub fn width_score(pinned_percent: f32, issues: &mut Vec<String>) -> u32 {
    if pinned_percent <= MAX_PINNED_PERCENT {
        25
    } else if pinned_percent <= MAX_PINNED_PERCENT + 5.0 {
        issues.push(format!(
            "pinned column width {pinned_percent:.1}% exceeds target {MAX_PINNED_PERCENT}%"
        ));
        15
    } else {
        issues.push(format!(
            "pinned column width {pinned_percent:.1}% significantly exceeds target \
             {MAX_PINNED_PERCENT}%"
        ));
        5
    }
}

/// Weight 25: declared frozen-column support plus exactness of the actual
/// offset arithmetic under the resolved plan.
pub fn frozen_score(doc: &StrategyDoc, frozen_exact: bool, issues: &mut Vec<String>) -> u32 {
    if !doc.mentions(r"sticky|frozen|fixed") {
        issues.push("no explicit frozen column handling described".to_string());
        return 0;
    }
    if doc.mentions("table-auto") && doc.mentions("sticky") {
        issues.push("table-auto with sticky positioning conflicts under scroll".to_string());
        return 10;
    }
    if frozen_exact {
        25
    } else {
        issues.push("frozen offsets are not exact under this plan".to_string());
        15
    }
}

/// Weight 20: responsive-design maturity by vocabulary tier.
pub fn responsive_score(doc: &StrategyDoc, issues: &mut Vec<String>) -> u32 {
    if doc.mentions(r"responsive|mobile|breakpoint") {
        if doc.mentions("container quer") {
            20
        } else if doc.mentions(r"adaptive|observer") {
            18
        } else if doc.mentions(r"media quer|@media") {
            14
        } else {
            12
        }
    } else {
        issues.push("limited responsive design consideration".to_string());
        4
    }
}

/// Heuristic render-time estimate: a base cost per approach plus linear
/// terms in the data size.
pub fn estimate_render_ms(doc: &StrategyDoc, columns: usize, rows: usize) -> u32 {
    let base = if doc.mentions("virtual") {
        30
    } else if doc.mentions(r"css grid|intrinsic") {
        40
    } else if doc.mentions(r"observer|dynamic") {
        60
    } else if doc.mentions(r"hybrid|adaptive") {
        80
    } else {
        50
    };
    base + columns as u32 + rows as u32 / 2
}

/// Weight 15: estimated render time against the budget.
pub fn performance_score(estimated_ms: u32, issues: &mut Vec<String>) -> u32 {
    if estimated_ms <= MAX_RENDER_MS {
        15
    } else if estimated_ms <= MAX_RENDER_MS * 3 / 2 {
        issues.push(format!(
            "estimated render time {estimated_ms}ms exceeds target {MAX_RENDER_MS}ms"
        ));
        9
    } else {
        issues.push(format!(
            "estimated render time {estimated_ms}ms significantly exceeds target"
        ));
        3
    }
}

/// Weight 15: penalty per bleeding-edge feature the description leans on.
pub fn compatibility_score(doc: &StrategyDoc, issues: &mut Vec<String>) -> u32 {
    // (pattern, penalty, support note)
    const FEATURES: [(&str, u32, &str); 4] = [
        ("subgrid", 5, "limited support (2022+)"),
        ("container quer", 5, "limited support (2022+)"),
        ("fit-content", 2, "good support (2020+)"),
        ("resizeobserver", 2, "good support (2019+)"),
    ];

    let mut score: u32 = 15;
    for (pattern, penalty, support) in FEATURES {
        if doc.mentions(pattern) {
            score = score.saturating_sub(penalty);
            if penalty >= 5 {
                issues.push(format!("relies on {pattern}, which has {support}"));
            }
        }
    }
    score.max(3)
}
