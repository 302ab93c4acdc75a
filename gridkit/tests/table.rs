use gridkit::{
    Align, BadgeTone, Buffer, CellContent, CellSpec, Column, CompoundCell, DataTable, Density,
    EdgeOverrides, Event, IconCell, Key, Measured, OverflowPolicy, Rect, StatusBadge, TableConfig,
    TableRow, TableState, Theme, WidthStrategy, TOOLTIP_PLACEHOLDER,
};

#[derive(Clone)]
struct Volunteer {
    name: &'static str,
    shift: &'static str,
    status: &'static str,
    name_spec: Option<CellSpec>,
}

impl Volunteer {
    fn new(name: &'static str, shift: &'static str, status: &'static str) -> Self {
        Self {
            name,
            shift,
            status,
            name_spec: None,
        }
    }

    fn with_name_spec(mut self, spec: CellSpec) -> Self {
        self.name_spec = Some(spec);
        self
    }
}

impl TableRow for Volunteer {
    fn cell(&self, column_id: &str) -> CellContent {
        match column_id {
            "name" => CellContent::text(self.name),
            "shift" => CellContent::text(self.shift),
            "status" => CellContent::text(self.status),
            _ => CellContent::Empty,
        }
    }

    fn spec(&self, column_id: &str) -> Option<CellSpec> {
        match column_id {
            "name" => self.name_spec.clone(),
            _ => None,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("shift", "Shift"),
        Column::new("status", "Status"),
    ]
}

fn render(
    config: &TableConfig,
    columns: &[Column],
    state: &mut TableState<Volunteer>,
    width: u16,
    height: u16,
) -> Buffer {
    let theme = Theme::default();
    let mut buf = Buffer::new(width, height);
    DataTable::new(config, columns, &theme).render(state, Rect::from_size(width, height), &mut buf);
    buf
}

// ============================================================================
// Density and padding
// ============================================================================

#[test]
fn density_presets_map_to_exact_padding() {
    use gridkit::Edges;
    assert_eq!(Density::Compact.padding(), Edges::symmetric(0, 1));
    assert_eq!(Density::Default.padding(), Edges::symmetric(0, 2));
    assert_eq!(Density::Spacious.padding(), Edges::symmetric(1, 3));
}

#[test]
fn density_presets_drive_row_height() {
    for (density, expected) in [
        (Density::Compact, 1),
        (Density::Default, 1),
        (Density::Spacious, 3),
    ] {
        let config = TableConfig::new()
            .density(density)
            .strategy(WidthStrategy::NativeAuto);
        let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
        render(&config, &columns(), &mut state, 40, 20);
        assert_eq!(
            state.row_heights().unwrap(),
            &[expected],
            "density {density:?}"
        );
    }
}

#[test]
fn cell_padding_override_wins_per_side() {
    // Overriding padding-top alone must leave the density's other sides
    // untouched: the row grows by exactly the top padding.
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let row = Volunteer::new("Alice", "morning", "ok")
        .with_name_spec(CellSpec::new().padding(EdgeOverrides::none().top(2)));
    let mut state = TableState::new(vec![row]);
    render(&config, &columns(), &mut state, 40, 20);
    assert_eq!(state.row_heights().unwrap(), &[3]);
}

#[test]
fn cell_padding_left_override_moves_content_only() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);

    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    let buf = render(&config, &columns(), &mut state, 40, 20);
    // Default density pads two cells left of the text, inside the border.
    assert!(buf.row_string(3).starts_with("│  Alice"));

    let row = Volunteer::new("Alice", "morning", "ok")
        .with_name_spec(CellSpec::new().padding(EdgeOverrides::none().left(0)));
    let mut state = TableState::new(vec![row]);
    let buf = render(&config, &columns(), &mut state, 40, 20);
    assert!(buf.row_string(3).starts_with("│Alice"));
}

// ============================================================================
// Striping and hover
// ============================================================================

#[test]
fn stripe_marker_is_present_on_every_row() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let mut state = TableState::new(vec![
        Volunteer::new("Alice", "morning", "ok"),
        Volunteer::new("Bob", "evening", "ok"),
        Volunteer::new("Cara", "night", "ok"),
    ]);
    let buf = render(&config, &columns(), &mut state, 40, 20);

    // The marker rides on every row; parity is a paint-time decision.
    assert_eq!(state.visible_rows().len(), 3);
    assert!(state.visible_rows().iter().all(|r| r.stripe_marker));

    let theme = Theme::default();
    let base = theme.background.to_rgb();
    let stripe = theme.stripe_bg.to_rgb();
    assert_eq!(buf.get(5, 3).unwrap().bg, base);
    assert_eq!(buf.get(5, 4).unwrap().bg, stripe);
    assert_eq!(buf.get(5, 5).unwrap().bg, base);
}

#[test]
fn striping_disabled_clears_marker_and_tint() {
    let config = TableConfig::new()
        .strategy(WidthStrategy::NativeAuto)
        .striping(false);
    let mut state = TableState::new(vec![
        Volunteer::new("Alice", "morning", "ok"),
        Volunteer::new("Bob", "evening", "ok"),
    ]);
    let buf = render(&config, &columns(), &mut state, 40, 20);

    assert!(state.visible_rows().iter().all(|r| !r.stripe_marker));
    let base = Theme::default().background.to_rgb();
    assert_eq!(buf.get(5, 4).unwrap().bg, base);
}

#[test]
fn pointer_move_hovers_the_row_under_it() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let mut state = TableState::new(vec![
        Volunteer::new("Alice", "morning", "ok"),
        Volunteer::new("Bob", "evening", "ok"),
    ]);
    render(&config, &columns(), &mut state, 40, 20);

    let rect = state.visible_rows()[1].rect;
    let changed = state.handle_event(&Event::PointerMove {
        x: rect.x + 2,
        y: rect.y,
    });
    assert!(changed);
    assert_eq!(state.hovered(), Some(1));

    let buf = render(&config, &columns(), &mut state, 40, 20);
    let hover = Theme::default().hover_bg.to_rgb();
    assert_eq!(buf.get(5, rect.y).unwrap().bg, hover);

    assert!(state.handle_event(&Event::PointerLeave));
    assert_eq!(state.hovered(), None);
}

// ============================================================================
// Frozen columns
// ============================================================================

#[test]
fn frozen_prefix_pins_at_cumulative_offsets() {
    let config = TableConfig::new()
        .strategy(WidthStrategy::NativeAuto)
        .frozen_columns(vec![0, 1]);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    render(&config, &columns(), &mut state, 60, 20);

    let frozen = state.frozen_columns().unwrap();
    assert_eq!(frozen.len(), 2);

    let plan = state.width_plan().unwrap().clone();
    assert_eq!(frozen.offset(&plan, 0), Some(0));
    assert_eq!(frozen.offset(&plan, 1), Some(plan.width(0)));
    assert_eq!(frozen.offset(&plan, 2), None);

    // Screen positions: inner edge, then cumulative widths.
    let cell = |col: usize| {
        state
            .visible_cells()
            .iter()
            .find(|c| c.cell.row == 0 && c.cell.col == col)
            .unwrap()
            .rect
    };
    assert_eq!(cell(0).x, 1);
    assert_eq!(cell(1).x, 1 + plan.width(0));
    assert_eq!(cell(2).x, 1 + plan.width(0) + plan.width(1));
}

#[test]
fn out_of_range_frozen_index_is_harmless() {
    let config = TableConfig::new()
        .strategy(WidthStrategy::NativeAuto)
        .frozen_columns(vec![5]);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    render(&config, &columns(), &mut state, 40, 20);
    assert_eq!(state.frozen_columns().unwrap().len(), 0);
    assert_eq!(state.visible_rows().len(), 1);
}

// ============================================================================
// Overflow policies
// ============================================================================

const LONG_NAME: &str =
    "Wolfeschlegelsteinhausenbergerdorff Constantinopolous Schwarzenegger Amadeus III";

#[test]
fn truncate_keeps_single_row_height() {
    let config = TableConfig::new()
        .density(Density::Compact)
        .frozen_columns(vec![0])
        .strategy(WidthStrategy::Measured(Measured::default()));
    let mut state = TableState::new(vec![Volunteer::new(LONG_NAME, "morning", "ok")]);
    let buf = render(&config, &columns(), &mut state, 60, 20);

    assert_eq!(state.row_heights().unwrap(), &[1]);
    // Compact header band is two rows inside the border; the data row sits
    // right below it, visibly clipped.
    assert!(buf.row_string(3).contains('…'));
}

#[test]
fn wrap_grows_row_height_for_the_same_data() {
    let cols = vec![
        Column::new("name", "Name").overflow(OverflowPolicy::Wrap),
        Column::new("shift", "Shift"),
        Column::new("status", "Status"),
    ];
    let config = TableConfig::new()
        .density(Density::Compact)
        .frozen_columns(vec![0])
        .strategy(WidthStrategy::Measured(Measured::default()));
    let mut state = TableState::new(vec![Volunteer::new(LONG_NAME, "morning", "ok")]);
    render(&config, &cols, &mut state, 60, 20);

    assert!(state.row_heights().unwrap()[0] > 1);
}

// ============================================================================
// Tooltip affordance
// ============================================================================

#[test]
fn tooltip_shows_full_text_and_escape_dismisses() {
    let cols = vec![
        Column::new("name", "Name").overflow(OverflowPolicy::Tooltip),
        Column::new("shift", "Shift"),
        Column::new("status", "Status"),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::Measured(Measured::default()));
    let name = "Wolfeschlegelstein Amadeus";
    let mut state = TableState::new(vec![Volunteer::new(name, "morning", "ok")]);
    let buf = render(&config, &cols, &mut state, 60, 20);
    // The trigger renders the truncated text even before any hover.
    assert!(buf.row_string(3).contains('…'));

    let hit = state
        .visible_cells()
        .iter()
        .find(|c| c.cell.col == 0)
        .unwrap()
        .clone();
    assert_eq!(hit.overflow, OverflowPolicy::Tooltip);

    state.handle_event(&Event::PointerMove {
        x: hit.rect.x + 1,
        y: hit.rect.y,
    });
    assert!(state.tooltip.is_showing());
    assert_eq!(state.tooltip.content(), name);

    // The popover paints the full name somewhere below the trigger.
    let buf = render(&config, &cols, &mut state, 60, 20);
    let full = (0..20).any(|y| buf.row_string(y).contains(name));
    assert!(full, "popover should contain the untruncated name");

    state.handle_event(&Event::Key(Key::Escape));
    assert!(!state.tooltip.is_showing());
    let buf = render(&config, &cols, &mut state, 60, 20);
    assert!(!(0..20).any(|y| buf.row_string(y).contains(name)));
}

#[test]
fn tooltip_override_wins_over_cell_text() {
    let cols = vec![
        Column::new("name", "Name").overflow(OverflowPolicy::Tooltip),
        Column::new("shift", "Shift"),
        Column::new("status", "Status"),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::Measured(Measured::default()));
    let row = Volunteer::new("Alice", "morning", "ok")
        .with_name_spec(CellSpec::new().tooltip("Shift lead for the morning crew"));
    let mut state = TableState::new(vec![row]);
    render(&config, &cols, &mut state, 60, 20);

    let rect = state
        .visible_cells()
        .iter()
        .find(|c| c.cell.col == 0)
        .unwrap()
        .rect;
    state.handle_event(&Event::PointerMove {
        x: rect.x + 1,
        y: rect.y,
    });
    assert_eq!(state.tooltip.content(), "Shift lead for the morning crew");
}

#[test]
fn tooltip_on_rich_content_uses_placeholder() {
    #[derive(Clone)]
    struct BadgeRow;
    impl TableRow for BadgeRow {
        fn cell(&self, column_id: &str) -> CellContent {
            match column_id {
                "status" => CellContent::Badge(StatusBadge::new("OK", BadgeTone::Success)),
                _ => CellContent::text("x"),
            }
        }
    }

    let cols = vec![
        Column::new("name", "Name"),
        Column::new("status", "Status").overflow(OverflowPolicy::Tooltip),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let theme = Theme::default();
    let mut state = TableState::new(vec![BadgeRow]);
    let mut buf = Buffer::new(40, 12);
    DataTable::new(&config, &cols, &theme).render(&mut state, Rect::from_size(40, 12), &mut buf);

    let rect = state
        .visible_cells()
        .iter()
        .find(|c| c.cell.col == 1)
        .unwrap()
        .rect;
    state.handle_event(&Event::PointerMove {
        x: rect.x,
        y: rect.y,
    });
    assert_eq!(state.tooltip.content(), TOOLTIP_PLACEHOLDER);
}

#[test]
fn focus_and_blur_drive_the_tooltip() {
    let cols = vec![
        Column::new("name", "Name").overflow(OverflowPolicy::Tooltip),
        Column::new("shift", "Shift"),
        Column::new("status", "Status"),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::Measured(Measured::default()));
    let mut state = TableState::new(vec![Volunteer::new(LONG_NAME, "morning", "ok")]);
    render(&config, &cols, &mut state, 60, 20);

    state.handle_event(&Event::FocusCell { row: 0, col: 0 });
    assert!(state.tooltip.is_showing());

    state.handle_event(&Event::Blur);
    assert!(!state.tooltip.is_showing());
}

// ============================================================================
// Leaf cells
// ============================================================================

#[test]
fn badge_icon_and_compound_cells_render() {
    #[derive(Clone)]
    struct Mixed;
    impl TableRow for Mixed {
        fn cell(&self, column_id: &str) -> CellContent {
            match column_id {
                "status" => CellContent::Badge(StatusBadge::new("OK", BadgeTone::Success)),
                "seva" => CellContent::Icon(IconCell::labeled('*', "Kitchen")),
                "who" => CellContent::Compound(CompoundCell::new(
                    "Ada Thompson",
                    "ada@example.com",
                )),
                _ => CellContent::Empty,
            }
        }
    }

    let cols = vec![
        Column::new("status", "Status"),
        Column::new("seva", "Seva"),
        Column::new("who", "Who"),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let theme = Theme::default();
    let mut state = TableState::new(vec![Mixed]);
    let mut buf = Buffer::new(60, 12);
    DataTable::new(&config, &cols, &theme).render(&mut state, Rect::from_size(60, 12), &mut buf);

    // Compound cells occupy two lines under default density.
    assert_eq!(state.row_heights().unwrap(), &[2]);
    assert!(buf.row_string(3).contains(" OK "));
    assert!(buf.row_string(3).contains("* Kitchen"));
    assert!(buf.row_string(3).contains("Ada Thompson"));
    assert!(buf.row_string(4).contains("ada@example.com"));

    // The badge pill carries its tone background.
    let badge_bg = theme.badge_tone(BadgeTone::Success).to_rgb();
    assert_eq!(buf.get(4, 3).unwrap().bg, badge_bg);
}

#[test]
fn compound_cell_collapses_under_compact_density() {
    #[derive(Clone)]
    struct Who;
    impl TableRow for Who {
        fn cell(&self, column_id: &str) -> CellContent {
            match column_id {
                "who" => CellContent::Compound(CompoundCell::new("Ada", "ada@example.com")),
                _ => CellContent::Empty,
            }
        }
    }

    let cols = vec![Column::new("who", "Who"), Column::new("x", "X")];
    // Give the pinned column half the container so the collapsed line fits.
    let config = TableConfig::new()
        .density(Density::Compact)
        .strategy(WidthStrategy::FixedPercentage(gridkit::FixedPercentage {
            percent: 50.0,
            min_width: 15,
            other_min: 8,
        }));
    let theme = Theme::default();
    let mut state = TableState::new(vec![Who]);
    let mut buf = Buffer::new(50, 10);
    DataTable::new(&config, &cols, &theme).render(&mut state, Rect::from_size(50, 10), &mut buf);

    assert_eq!(state.row_heights().unwrap(), &[1]);
    assert!(buf.row_string(3).contains("Ada · ada@example.com"));
}

// ============================================================================
// Shell behavior
// ============================================================================

#[test]
fn header_is_uppercase_and_sticky_under_scroll() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let rows: Vec<Volunteer> = (0..40)
        .map(|_| Volunteer::new("Alice", "morning", "ok"))
        .collect();
    let mut state = TableState::new(rows);
    let buf = render(&config, &columns(), &mut state, 40, 12);
    assert!(buf.row_string(1).contains("NAME"));

    state.scroll.end();
    let buf = render(&config, &columns(), &mut state, 40, 12);
    assert!(buf.row_string(1).contains("NAME"), "header must not scroll");
    assert!(state.visible_rows()[0].index > 0);
}

#[test]
fn max_height_caps_the_viewport() {
    let config = TableConfig::new()
        .strategy(WidthStrategy::NativeAuto)
        .max_height(10);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    let buf = render(&config, &columns(), &mut state, 40, 30);

    // Nothing below the capped viewport is painted.
    let untouched = buf.get(0, 15).unwrap();
    assert_eq!(untouched.ch, ' ');
    assert_eq!(untouched.bg, gridkit::Rgb::new(0, 0, 0));
}

#[test]
fn horizontal_scroll_clamps_to_the_overflow() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    // Total column width is 30 against a 28-cell container: 2 cells of
    // horizontal overflow.
    render(&config, &columns(), &mut state, 30, 20);

    assert!(state.handle_event(&Event::Scroll { dx: 50, dy: 0 }));
    assert_eq!(state.h_offset(), 2);

    state.handle_event(&Event::Scroll { dx: -50, dy: 0 });
    assert_eq!(state.h_offset(), 0);
}

#[test]
fn resize_invalidates_the_width_plan() {
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    render(&config, &columns(), &mut state, 40, 20);
    assert_eq!(state.width_plan().unwrap().container(), 38);

    assert!(state.handle_event(&Event::Resize {
        width: 50,
        height: 20
    }));
    assert!(state.width_plan().is_none());

    render(&config, &columns(), &mut state, 50, 20);
    assert_eq!(state.width_plan().unwrap().container(), 48);
}

#[test]
fn align_right_pads_from_the_left() {
    let cols = vec![
        Column::new("name", "Name"),
        Column::new("shift", "Shift"),
        Column::new("status", "Status").align(Align::Right),
    ];
    let config = TableConfig::new().strategy(WidthStrategy::NativeAuto);
    let mut state = TableState::new(vec![Volunteer::new("Alice", "morning", "ok")]);
    let buf = render(&config, &cols, &mut state, 40, 20);

    let rect = state
        .visible_cells()
        .iter()
        .find(|c| c.cell.col == 2)
        .unwrap()
        .rect;
    let row = buf.row_string(rect.y);
    let cell_text: String = row
        .chars()
        .skip(rect.x as usize)
        .take(rect.width as usize)
        .collect();
    // Right-aligned inside the padded content box.
    assert!(cell_text.trim_end().ends_with("ok") || cell_text.contains("ok"));
    assert!(!cell_text.starts_with("ok"));
}
