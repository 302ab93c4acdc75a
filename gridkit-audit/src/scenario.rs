//! Test scenarios and deterministic volunteer data.
//!
//! The original dashboards this audit models: a 20+ column assignment grid,
//! a seven-column t-shirt issuance table, and a three-column requirements
//! view. Names are generated deterministically so scores are reproducible
//! run to run.

use gridkit::measure::ContentMetrics;
use gridkit::{collect_metrics, CellContent, Column, Density, TableRow, UnicodeMeasure};

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub column_count: usize,
    pub row_count: usize,
    /// Viewport width in display cells.
    pub container: u16,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "assignments-heavy",
            column_count: 22,
            row_count: 50,
            container: 240,
        },
        Scenario {
            name: "tshirts-standard",
            column_count: 7,
            row_count: 30,
            container: 200,
        },
        Scenario {
            name: "requirements-minimal",
            column_count: 3,
            row_count: 20,
            container: 160,
        },
    ]
}

const FIRST_NAMES: [&str; 8] = [
    "Li",
    "Sam",
    "Maria-Aleksandra",
    "Ngozi",
    "Ada",
    "Jo",
    "Priya",
    "Christopher",
];

const LAST_NAMES: [&str; 8] = [
    "Wu",
    "Smith",
    "Jones",
    "Rodriguez",
    "Thompson",
    "Anderson",
    "Wolfeschlegelsteinhausenbergerdorff",
    "Constantinopolous",
];

/// Deterministic volunteer name for row `i`, with realistic length spread.
pub fn volunteer_name(i: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[i % FIRST_NAMES.len()],
        LAST_NAMES[(i / 3) % LAST_NAMES.len()]
    )
}

/// A generated assignment row: the volunteer name in the pinned column,
/// short slot values everywhere else.
pub struct AuditRow {
    pub name: String,
}

impl TableRow for AuditRow {
    fn cell(&self, column_id: &str) -> CellContent {
        match column_id {
            "volunteer" => CellContent::text(&self.name),
            _ => CellContent::text("3/4"),
        }
    }
}

pub fn build_columns(scenario: &Scenario) -> Vec<Column> {
    let mut columns = Vec::with_capacity(scenario.column_count);
    columns.push(Column::new("volunteer", "Volunteer"));
    for i in 1..scenario.column_count {
        columns.push(Column::new(format!("slot-{i}"), format!("Slot {i}")));
    }
    columns
}

pub fn build_rows(scenario: &Scenario) -> Vec<AuditRow> {
    (0..scenario.row_count)
        .map(|i| AuditRow {
            name: volunteer_name(i),
        })
        .collect()
}

/// Measured content for the scenario, through the real measurement path.
pub fn content_metrics(scenario: &Scenario) -> ContentMetrics {
    let columns = build_columns(scenario);
    let rows = build_rows(scenario);
    collect_metrics(
        &columns,
        &rows,
        Density::Default.padding(),
        &UnicodeMeasure,
    )
}
