//! Interactive demo: a volunteer assignment grid with a frozen name column,
//! measured column widths, badges, and tooltips.
//!
//! Run with `cargo run --example volunteers`. Press `q` to quit, scroll with
//! the mouse wheel or arrow keys, hover a name for the full text.

use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};

use gridkit::{
    from_crossterm, BadgeTone, Buffer, CellContent, CellSpec, Column, CompoundCell, DataTable,
    Event, Key, Measured, OverflowPolicy, Rect, StatusBadge, TableConfig, TableRow, TableState,
    Terminal, Theme, WidthStrategy,
};

struct Assignment {
    volunteer: String,
    email: String,
    slot: String,
    location: String,
    tshirt: String,
    checked_in: bool,
}

impl TableRow for Assignment {
    fn cell(&self, column_id: &str) -> CellContent {
        match column_id {
            "volunteer" => CellContent::Compound(CompoundCell::new(
                self.volunteer.clone(),
                self.email.clone(),
            )),
            "slot" => CellContent::text(&self.slot),
            "location" => CellContent::text(&self.location),
            "tshirt" => CellContent::text(&self.tshirt),
            "status" => {
                let badge = if self.checked_in {
                    StatusBadge::new("checked in", BadgeTone::Success)
                } else {
                    StatusBadge::new("pending", BadgeTone::Warning)
                };
                CellContent::Badge(badge)
            }
            _ => CellContent::Empty,
        }
    }

    fn spec(&self, column_id: &str) -> Option<CellSpec> {
        match column_id {
            "volunteer" => {
                let tip = format!("{} <{}>", self.volunteer, self.email);
                Some(CellSpec::new().tooltip(tip))
            }
            _ => None,
        }
    }
}

fn sample_rows() -> Vec<Assignment> {
    let volunteers = [
        ("Li Wu", "li.wu@example.com"),
        ("Maria Constantinopolous", "maria.c@example.com"),
        ("Sam Wolfeschlegelstein", "sam.w@example.com"),
        ("Ada Thompson", "ada.t@example.com"),
        ("Ngozi Anderson", "ngozi.a@example.com"),
    ];
    let slots = ["Morning", "Midday", "Evening", "Night"];
    let locations = ["Main Hall", "Kitchen", "Registration", "Parking"];
    let sizes = ["S", "M", "L", "XL"];

    (0..60)
        .map(|i| {
            let (name, email) = volunteers[i % volunteers.len()];
            Assignment {
                volunteer: name.to_string(),
                email: email.to_string(),
                slot: slots[i % slots.len()].to_string(),
                location: locations[i % locations.len()].to_string(),
                tshirt: sizes[i % sizes.len()].to_string(),
                checked_in: i % 3 != 0,
            }
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("volunteers.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("volunteer", "Volunteer").overflow(OverflowPolicy::Tooltip),
        Column::new("slot", "Slot"),
        Column::new("location", "Location"),
        Column::new("tshirt", "T-Shirt"),
        Column::new("status", "Status"),
    ];
    let config = TableConfig::new()
        .frozen_columns(vec![0])
        .strategy(WidthStrategy::Measured(Measured::default()));
    let theme = Theme::default();

    let mut state = TableState::new(sample_rows());
    let mut terminal = Terminal::new()?;

    loop {
        let (width, height) = terminal.size()?;
        let mut buf = Buffer::new(width, height);
        let table = DataTable::new(&config, &columns, &theme);
        table.render(&mut state, Rect::from_size(width, height), &mut buf);
        terminal.draw(&buf)?;

        for raw in terminal.poll(Some(Duration::from_millis(250)))? {
            let Some(event) = from_crossterm(&raw) else {
                continue;
            };
            if event == Event::Key(Key::Char('q')) {
                return Ok(());
            }
            state.handle_event(&event);
        }
    }
}
