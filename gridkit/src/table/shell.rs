//! The table shell: a bounded viewport with a sticky header band, a frozen
//! column band, and a vertically virtualized body.
//!
//! Layout is best-effort throughout: misconfiguration (frozen index out of
//! range, zero columns, zero rows) degrades to an imperfect but non-crashing
//! render, never an error.

use log::{debug, warn};

use crate::buffer::{Buffer, ResolvedStyle};
use crate::event::{Event, Key};
use crate::layout::{FrozenColumns, Rect, WidthPlan};
use crate::measure::{collect_metrics, UnicodeMeasure};
use crate::scroll::{ScrollRequest, ScrollState};
use crate::text::{align_offset, display_width, truncate_to_width, wrap_words};
use crate::types::{
    BadgeTone, Border, Density, Edges, OverflowPolicy, Style, TextStyle, Theme, VAlign,
};

use super::config::TableConfig;
use super::row::{CellContent, Column, TableRow};
use super::tooltip::{CellRef, TooltipState, TOOLTIP_PLACEHOLDER};

/// Hit-test record for a rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellHit {
    pub cell: CellRef,
    pub rect: Rect,
    pub overflow: OverflowPolicy,
    /// Resolved popover content, present only for tooltip cells.
    pub tooltip: Option<String>,
}

/// Hit-test record for a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub index: usize,
    pub rect: Rect,
    /// Present on every row whenever striping is enabled; the even-position
    /// tint is a paint-time decision, not a marker decision.
    pub stripe_marker: bool,
}

#[derive(Debug, Clone, Default)]
struct Geometry {
    viewport: Rect,
    rows: Vec<RowHit>,
    cells: Vec<CellHit>,
    max_h_offset: u16,
}

#[derive(Debug, Clone)]
struct PlanCache {
    container: u16,
    revision: u64,
    plan: WidthPlan,
    frozen: FrozenColumns,
    row_heights: Vec<u16>,
    cumulative: Vec<u16>,
}

/// Per-table state that survives across renders.
#[derive(Debug)]
pub struct TableState<R: TableRow> {
    rows: Vec<R>,
    pub scroll: ScrollState,
    pub tooltip: TooltipState,
    h_offset: u16,
    hovered: Option<usize>,
    focused: Option<CellRef>,
    revision: u64,
    plan: Option<PlanCache>,
    geometry: Geometry,
}

impl<R: TableRow> Default for TableState<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: TableRow> TableState<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            scroll: ScrollState::new(),
            tooltip: TooltipState::new(),
            h_offset: 0,
            hovered: None,
            focused: None,
            revision: 0,
            plan: None,
            geometry: Geometry::default(),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the rows. Invalidates the cached width plan.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn focused(&self) -> Option<CellRef> {
        self.focused
    }

    pub fn h_offset(&self) -> u16 {
        self.h_offset
    }

    /// Drop the cached width plan; the next render recomputes it. The
    /// resize-notification path ends up here, so a frame rendered between
    /// the resize and the next build may carry stale widths.
    pub fn invalidate_plan(&mut self) {
        self.plan = None;
    }

    /// The width plan from the last completed plan pass.
    pub fn width_plan(&self) -> Option<&WidthPlan> {
        self.plan.as_ref().map(|c| &c.plan)
    }

    pub fn frozen_columns(&self) -> Option<FrozenColumns> {
        self.plan.as_ref().map(|c| c.frozen)
    }

    pub fn row_heights(&self) -> Option<&[u16]> {
        self.plan.as_ref().map(|c| c.row_heights.as_slice())
    }

    /// Rows rendered by the last pass, in order.
    pub fn visible_rows(&self) -> &[RowHit] {
        &self.geometry.rows
    }

    /// Cells rendered by the last pass.
    pub fn visible_cells(&self) -> &[CellHit] {
        &self.geometry.cells
    }

    /// Feed one event through the table. Returns true when the visible
    /// state changed and a re-render is worthwhile.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::PointerMove { x, y } => {
                let mut hover = None;
                let mut tip: Option<(CellRef, String)> = None;
                if self.geometry.viewport.contains(x, y) {
                    hover = self
                        .geometry
                        .rows
                        .iter()
                        .find(|r| r.rect.contains(x, y))
                        .map(|r| r.index);
                    if let Some(hit) = self.geometry.cells.iter().find(|c| c.rect.contains(x, y))
                    {
                        if hit.overflow == OverflowPolicy::Tooltip {
                            let content = hit
                                .tooltip
                                .clone()
                                .unwrap_or_else(|| TOOLTIP_PLACEHOLDER.to_string());
                            tip = Some((hit.cell, content));
                        }
                    }
                }

                let before = (self.tooltip.is_showing(), self.tooltip.anchor());
                match tip {
                    Some((anchor, content)) => self.tooltip.pointer_enter(anchor, content),
                    None => self.tooltip.pointer_leave(),
                }
                let after = (self.tooltip.is_showing(), self.tooltip.anchor());
                let changed = hover != self.hovered || before != after;
                self.hovered = hover;
                changed
            }
            Event::PointerLeave => {
                let changed = self.hovered.is_some() || self.tooltip.is_showing();
                self.hovered = None;
                self.tooltip.pointer_leave();
                changed
            }
            Event::Scroll { dx, dy } => {
                if dy != 0 {
                    self.scroll.scroll_by(dy);
                }
                if dx != 0 {
                    self.h_offset = (self.h_offset as i32 + dx as i32)
                        .clamp(0, self.geometry.max_h_offset as i32)
                        as u16;
                }
                true
            }
            Event::Key(key) => match key {
                Key::Escape => {
                    let was_showing = self.tooltip.is_showing();
                    self.tooltip.escape();
                    was_showing
                }
                Key::Up => {
                    self.scroll.scroll_by(-1);
                    true
                }
                Key::Down => {
                    self.scroll.scroll_by(1);
                    true
                }
                Key::PageUp => {
                    self.scroll.page_up();
                    true
                }
                Key::PageDown => {
                    self.scroll.page_down();
                    true
                }
                Key::Home => {
                    self.scroll.home();
                    true
                }
                Key::End => {
                    self.scroll.end();
                    true
                }
                Key::Char(_) => false,
            },
            Event::FocusCell { row, col } => {
                let cell = CellRef { row, col };
                self.focused = Some(cell);
                if let Some(hit) = self.geometry.cells.iter().find(|c| c.cell == cell) {
                    if hit.overflow == OverflowPolicy::Tooltip {
                        let content = hit
                            .tooltip
                            .clone()
                            .unwrap_or_else(|| TOOLTIP_PLACEHOLDER.to_string());
                        self.tooltip.focus(cell, content);
                    }
                }
                true
            }
            Event::Blur => {
                self.focused = None;
                self.tooltip.blur();
                true
            }
            Event::Resize { .. } => {
                self.invalidate_plan();
                true
            }
        }
    }
}

/// One line of rendered cell content.
enum CellLine {
    Plain(String),
    Dim(String),
    Badge(String, BadgeTone),
}

/// The data table widget. Configuration, columns and theme are borrowed for
/// the duration of one render pass.
pub struct DataTable<'a> {
    config: &'a TableConfig,
    columns: &'a [Column],
    theme: &'a Theme,
    header_style: Option<Style>,
    row_style: Option<Style>,
}

impl<'a> DataTable<'a> {
    pub fn new(config: &'a TableConfig, columns: &'a [Column], theme: &'a Theme) -> Self {
        Self {
            config,
            columns,
            theme,
            header_style: None,
            row_style: None,
        }
    }

    /// Override the themed header style. Set properties win per property.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Override the themed style for data-cell text.
    pub fn row_style(mut self, style: Style) -> Self {
        self.row_style = Some(style);
        self
    }

    fn effective_header_style(&self) -> Style {
        let base = Style::new().foreground(self.theme.header_fg).bold();
        match &self.header_style {
            Some(over) => base.overlay(over),
            None => base,
        }
    }

    fn effective_row_style(&self) -> Style {
        let base = Style::new().foreground(self.theme.foreground);
        match &self.row_style {
            Some(over) => base.overlay(over),
            None => base,
        }
    }

    /// Render into `buf`, constrained to `area`.
    pub fn render<R: TableRow>(&self, state: &mut TableState<R>, area: Rect, buf: &mut Buffer) {
        let mut geometry = Geometry::default();

        if area.is_empty() {
            state.geometry = geometry;
            return;
        }

        let height = self
            .config
            .max_height
            .map(|h| h.min(area.height))
            .unwrap_or(area.height);
        let outer = Rect::new(area.x, area.y, area.width, height);

        let inner = match self.config.border {
            Border::None => outer,
            border => {
                self.draw_box(buf, outer, border);
                outer.shrink(1, 1, 1, 1)
            }
        };

        if inner.is_empty() || self.columns.is_empty() {
            if self.columns.is_empty() && !self.config.frozen_columns.is_empty() {
                warn!("frozen columns configured but the table has no columns");
            }
            state.geometry = geometry;
            return;
        }

        buf.fill_bg(inner, self.theme.background.to_rgb());
        geometry.viewport = inner;

        self.ensure_plan(state, inner.width);
        let Some(cache) = state.plan.clone() else {
            state.geometry = geometry;
            return;
        };

        let pad = self.config.density.padding();
        let header_h = 1 + pad.vertical_total() + 1;

        let sticky = self.config.sticky_header;
        let prefix: u16 = if sticky { 0 } else { header_h };
        let body = if sticky {
            Rect::new(
                inner.x,
                inner.y + header_h.min(inner.height),
                inner.width,
                inner.height.saturating_sub(header_h),
            )
        } else {
            inner
        };
        if body.is_empty() {
            state.geometry = geometry;
            return;
        }

        // Scroll bookkeeping happens against content coordinates; when the
        // header scrolls with the content it contributes to the height.
        let rows_total = cache.cumulative.last().copied().unwrap_or(0);
        state.scroll.set_viewport(body.height);
        state.scroll.set_content_height(rows_total.saturating_add(prefix));
        if let Some(ScrollRequest::IntoView(index)) = state.scroll.process_request() {
            if index < cache.row_heights.len() {
                let y = prefix + cache.cumulative[index];
                let row_h = cache.row_heights[index];
                if y < state.scroll.offset {
                    state.scroll.offset = y;
                } else if y + row_h > state.scroll.offset + state.scroll.viewport {
                    state.scroll.offset = (y + row_h).saturating_sub(state.scroll.viewport);
                }
            }
        }
        let scroll_offset = state.scroll.offset;

        let plan = &cache.plan;
        let frozen = cache.frozen;
        let band_w = frozen.band_width(plan).min(inner.width);
        let region_w = inner.width - band_w;
        let max_h_offset = plan
            .total()
            .saturating_sub(band_w as u32 + region_w as u32)
            .min(u16::MAX as u32) as u16;
        state.h_offset = state.h_offset.min(max_h_offset);
        let h_offset = state.h_offset;
        geometry.max_h_offset = max_h_offset;

        let mut col_x: Vec<u32> = Vec::with_capacity(self.columns.len());
        let mut acc: u32 = 0;
        for j in 0..self.columns.len() {
            col_x.push(acc);
            acc += plan.width(j) as u32;
        }

        // Header band.
        if sticky {
            let band = Rect::new(inner.x, inner.y, inner.width, header_h.min(inner.height));
            self.draw_header(buf, plan, &col_x, frozen, band.y as i32, band, band_w, h_offset, pad, header_h);
        } else {
            let top_y = body.y as i32 - scroll_offset as i32;
            self.draw_header(buf, plan, &col_x, frozen, top_y, body, band_w, h_offset, pad, header_h);
        }

        // Body rows.
        let (clip_frozen, clip_scroll) = split_clips(body, band_w);
        let target = scroll_offset.saturating_sub(prefix);
        let first = cache
            .cumulative
            .partition_point(|&h| h <= target)
            .saturating_sub(1);

        for i in first..state.rows.len() {
            let content_y = prefix + cache.cumulative[i];
            let row_h = cache.row_heights[i];
            let screen_y = body.y as i32 + content_y as i32 - scroll_offset as i32;
            if screen_y >= body.bottom() as i32 {
                break;
            }
            if screen_y + row_h as i32 <= body.y as i32 {
                continue;
            }

            let row_rect = clamp_rect(inner.x as i32, screen_y, inner.width, row_h, body);
            let striped = self.config.striping;
            if striped && i % 2 == 1 {
                buf.fill_bg(row_rect, self.theme.stripe_bg.to_rgb());
            }
            if band_w > 0 {
                let band_rect = clamp_rect(inner.x as i32, screen_y, band_w, row_h, body);
                buf.fill_bg(band_rect, self.theme.frozen_bg.to_rgb());
            }
            if self.config.hover && state.hovered == Some(i) {
                buf.fill_bg(row_rect, self.theme.hover_bg.to_rgb());
            }
            geometry.rows.push(RowHit {
                index: i,
                rect: row_rect,
                stripe_marker: striped,
            });

            let row = &state.rows[i];
            for (j, col) in self.columns.iter().enumerate() {
                let w = plan.width(j);
                if w == 0 {
                    continue;
                }
                let is_frozen = frozen.contains(j);
                let clip = if is_frozen { clip_frozen } else { clip_scroll };
                if clip.is_empty() {
                    continue;
                }
                let x = inner.x as i32 + col_x[j] as i32
                    - if is_frozen { 0 } else { h_offset as i32 };
                if x + w as i32 <= clip.x as i32 || x >= clip.right() as i32 {
                    continue;
                }
                self.draw_cell(
                    buf,
                    &mut geometry,
                    row,
                    i,
                    j,
                    col,
                    x,
                    screen_y,
                    w,
                    row_h,
                    clip,
                    pad,
                );
            }
        }

        self.draw_tooltip(buf, &state.tooltip, &geometry, inner);

        state.geometry = geometry;
    }

    fn ensure_plan<R: TableRow>(&self, state: &mut TableState<R>, container: u16) {
        let valid = state
            .plan
            .as_ref()
            .map_or(false, |c| c.container == container && c.revision == state.revision);
        if valid {
            return;
        }

        let pad = self.config.density.padding();
        let metrics = collect_metrics(self.columns, &state.rows, pad, &UnicodeMeasure);
        let plan = self
            .config
            .strategy
            .resolve(&metrics, container, self.columns.len());
        let frozen = FrozenColumns::normalize(&self.config.frozen_columns, self.columns.len());

        let last = self.columns.len().saturating_sub(1);
        let mut row_heights = Vec::with_capacity(state.rows.len());
        let mut cumulative = Vec::with_capacity(state.rows.len() + 1);
        cumulative.push(0u16);
        let mut total = 0u16;

        for row in &state.rows {
            let mut height = 1 + pad.vertical_total();
            for (j, col) in self.columns.iter().enumerate() {
                let spec = row.spec(&col.id).unwrap_or_default();
                let overflow = spec.overflow.unwrap_or(col.overflow);
                let border = spec.border.unwrap_or(col.border);
                let cell_pad = spec.padding.apply_to(pad);
                let content_w = content_width(plan.width(j), cell_pad, border && j != last);
                let lines = cell_line_count(
                    &row.cell(&col.id),
                    overflow,
                    self.config.density,
                    content_w,
                );
                height = height.max(lines + cell_pad.vertical_total());
            }
            row_heights.push(height);
            total = total.saturating_add(height);
            cumulative.push(total);
        }

        debug!(
            "table plan: strategy={} container={} columns={} frozen={} density={:?} rows={}",
            self.config.strategy.name(),
            container,
            self.columns.len(),
            frozen.len(),
            self.config.density,
            state.rows.len(),
        );

        state.plan = Some(PlanCache {
            container,
            revision: state.revision,
            plan,
            frozen,
            row_heights,
            cumulative,
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_header(
        &self,
        buf: &mut Buffer,
        plan: &WidthPlan,
        col_x: &[u32],
        frozen: FrozenColumns,
        top_y: i32,
        region: Rect,
        band_w: u16,
        h_offset: u16,
        pad: Edges,
        header_h: u16,
    ) {
        let (clip_frozen, clip_scroll) = split_clips(region, band_w);
        let header_style = self.effective_header_style();
        let header_bg = header_style
            .background
            .unwrap_or(self.theme.header_bg)
            .to_rgb();
        let grid = self.theme.grid_line.to_rgb();

        let band_vis = clamp_rect(region.x as i32, top_y, region.width, header_h, region);
        if band_vis.is_empty() {
            return;
        }
        buf.fill_bg(band_vis, header_bg);

        let text_y = top_y + pad.top as i32;
        let last = self.columns.len().saturating_sub(1);

        for (j, col) in self.columns.iter().enumerate() {
            let w = plan.width(j);
            if w == 0 {
                continue;
            }
            let is_frozen = frozen.contains(j);
            let clip = if is_frozen { clip_frozen } else { clip_scroll };
            if clip.is_empty() {
                continue;
            }
            let x = region.x as i32 + col_x[j] as i32 - if is_frozen { 0 } else { h_offset as i32 };
            if x + w as i32 <= clip.x as i32 || x >= clip.right() as i32 {
                continue;
            }
            let cell_clip = clip_to_cell(clip, x, w);
            if cell_clip.is_empty() {
                continue;
            }

            let content_w = content_width(w, pad, col.border && j != last);
            let text = truncate_to_width(&col.header.to_uppercase(), content_w as usize);
            let style = ResolvedStyle::from_style(&header_style, self.theme.header_fg.to_rgb());
            let lx = x
                + pad.left as i32
                + align_offset(display_width(&text), content_w as usize, col.align) as i32;
            if text_y >= 0 {
                buf.draw_text(lx, text_y as u16, &text, &style, cell_clip);
            }

            if col.border && j != last {
                let sep_x = x + w as i32 - 1;
                let vis = clamp_rect(x, top_y, w, header_h.saturating_sub(1), cell_clip);
                if sep_x >= cell_clip.x as i32 && sep_x < cell_clip.right() as i32 {
                    for yy in vis.y..vis.bottom() {
                        if let Some(cell) = buf.get_mut(sep_x as u16, yy) {
                            cell.ch = '│';
                            cell.fg = grid;
                            cell.wide_tail = false;
                        }
                    }
                }
            }
        }

        // Bottom border of the header band.
        let sep_y = top_y + header_h as i32 - 1;
        if sep_y >= region.y as i32 && sep_y < region.bottom() as i32 {
            for x in region.x..region.right() {
                if let Some(cell) = buf.get_mut(x, sep_y as u16) {
                    cell.ch = '─';
                    cell.fg = grid;
                    cell.bg = header_bg;
                    cell.wide_tail = false;
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell<R: TableRow>(
        &self,
        buf: &mut Buffer,
        geometry: &mut Geometry,
        row: &R,
        row_index: usize,
        col_index: usize,
        col: &Column,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        clip: Rect,
        pad_base: Edges,
    ) {
        let content = row.cell(&col.id);
        let spec = row.spec(&col.id).unwrap_or_default();
        let align = spec.align.unwrap_or(col.align);
        let v_align = spec.v_align.unwrap_or(col.v_align);
        let overflow = spec.overflow.unwrap_or(col.overflow);
        let border = spec.border.unwrap_or(col.border);
        let pad = spec.padding.apply_to(pad_base);
        let last = col_index + 1 == self.columns.len();

        let cell_clip = clip_to_cell(clip, x, width);
        if cell_clip.is_empty() {
            return;
        }
        let vis = clamp_rect(x, y, width, height, cell_clip);
        if vis.is_empty() {
            return;
        }

        let tooltip = (overflow == OverflowPolicy::Tooltip).then(|| {
            spec.tooltip
                .clone()
                .or_else(|| content.as_plain_text().map(str::to_string))
                .unwrap_or_else(|| TOOLTIP_PLACEHOLDER.to_string())
        });
        geometry.cells.push(CellHit {
            cell: CellRef {
                row: row_index,
                col: col_index,
            },
            rect: vis,
            overflow,
            tooltip,
        });

        let content_w = content_width(width, pad, border && !last);
        let lines = self.cell_lines(&content, overflow, content_w);

        let content_h = height.saturating_sub(pad.vertical_total()).max(1);
        let shown = lines.len().min(content_h as usize);
        let y_base = y
            + pad.top as i32
            + match v_align {
                VAlign::Top => 0,
                VAlign::Middle => ((content_h as usize - shown) / 2) as i32,
                VAlign::Bottom => (content_h as usize - shown) as i32,
            };

        let row_style = self.effective_row_style();
        let plain = ResolvedStyle::from_style(&row_style, self.theme.foreground.to_rgb());
        for (k, line) in lines.iter().take(shown).enumerate() {
            let ly = y_base + k as i32;
            if ly < cell_clip.y as i32 || ly >= cell_clip.bottom() as i32 {
                continue;
            }
            let (text, style) = match line {
                CellLine::Plain(t) => (t, plain),
                CellLine::Dim(t) => (
                    t,
                    ResolvedStyle {
                        text_style: plain.text_style.dim(),
                        ..plain
                    },
                ),
                CellLine::Badge(t, tone) => (
                    t,
                    ResolvedStyle {
                        fg: self.theme.badge_fg.to_rgb(),
                        bg: Some(self.theme.badge_tone(*tone).to_rgb()),
                        text_style: TextStyle::new().bold(),
                    },
                ),
            };
            let lx = x
                + pad.left as i32
                + align_offset(display_width(text), content_w as usize, align) as i32;
            buf.draw_text(lx, ly as u16, text, &style, cell_clip);
        }

        if border && !last {
            let sep_x = x + width as i32 - 1;
            if sep_x >= cell_clip.x as i32 && sep_x < cell_clip.right() as i32 {
                let grid = self.theme.grid_line.to_rgb();
                for yy in vis.y..vis.bottom() {
                    if let Some(cell) = buf.get_mut(sep_x as u16, yy) {
                        cell.ch = '│';
                        cell.fg = grid;
                        cell.wide_tail = false;
                    }
                }
            }
        }
    }

    fn cell_lines(&self, content: &CellContent, overflow: OverflowPolicy, width: u16) -> Vec<CellLine> {
        let w = width as usize;
        match content {
            CellContent::Empty => Vec::new(),
            CellContent::Text(s) => match overflow {
                OverflowPolicy::Wrap => {
                    wrap_words(s, w).into_iter().map(CellLine::Plain).collect()
                }
                OverflowPolicy::Truncate | OverflowPolicy::Tooltip => {
                    vec![CellLine::Plain(truncate_to_width(s, w))]
                }
            },
            CellContent::Badge(b) => {
                vec![CellLine::Badge(truncate_to_width(&b.display_text(), w), b.tone)]
            }
            CellContent::Icon(i) => vec![CellLine::Plain(truncate_to_width(&i.display_text(), w))],
            CellContent::Compound(c) => {
                if self.config.density == Density::Compact {
                    vec![CellLine::Plain(truncate_to_width(&c.collapsed_text(), w))]
                } else {
                    vec![
                        CellLine::Plain(truncate_to_width(&c.primary, w)),
                        CellLine::Dim(truncate_to_width(&c.secondary, w)),
                    ]
                }
            }
        }
    }

    fn draw_tooltip(
        &self,
        buf: &mut Buffer,
        tooltip: &TooltipState,
        geometry: &Geometry,
        inner: Rect,
    ) {
        if !tooltip.is_showing() {
            return;
        }
        let Some(anchor) = tooltip.anchor() else {
            return;
        };
        let Some(hit) = geometry.cells.iter().find(|c| c.cell == anchor) else {
            return;
        };

        let content = tooltip.content();
        let max_text_w = inner.width.saturating_sub(4).max(1) as usize;
        let lines = wrap_words(content, max_text_w);
        let shown = lines.len().min(3);
        let box_w = (lines
            .iter()
            .take(shown)
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1) as u16)
            .saturating_add(2)
            .min(inner.width);
        let box_h = shown as u16;
        if box_h == 0 || box_w == 0 {
            return;
        }

        // Below the anchor when it fits, above otherwise.
        let y = if hit.rect.bottom() + box_h <= inner.bottom() {
            hit.rect.bottom()
        } else {
            hit.rect.y.saturating_sub(box_h).max(inner.y)
        };
        let x = hit.rect.x.min(inner.right().saturating_sub(box_w));
        let rect = Rect::new(x, y, box_w, box_h).intersect(inner);
        if rect.is_empty() {
            return;
        }

        let bg = self.theme.tooltip_bg.to_rgb();
        buf.fill_bg(rect, bg);
        let style = ResolvedStyle {
            fg: self.theme.tooltip_fg.to_rgb(),
            bg: Some(bg),
            text_style: TextStyle::new(),
        };
        for (k, line) in lines.iter().take(shown).enumerate() {
            buf.draw_text(rect.x as i32 + 1, rect.y + k as u16, line, &style, rect);
        }
    }

    fn draw_box(&self, buf: &mut Buffer, rect: Rect, border: Border) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (tl, tr, bl, br) = match border {
            Border::Rounded => ('╭', '╮', '╰', '╯'),
            _ => ('┌', '┐', '└', '┘'),
        };
        let fg = self.theme.grid_line.to_rgb();
        let bg = self.theme.background.to_rgb();

        let mut put = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.ch = ch;
                cell.fg = fg;
                cell.bg = bg;
                cell.wide_tail = false;
            }
        };

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        put(buf, rect.x, rect.y, tl);
        put(buf, right, rect.y, tr);
        put(buf, rect.x, bottom, bl);
        put(buf, right, bottom, br);
        for x in rect.x + 1..right {
            put(buf, x, rect.y, '─');
            put(buf, x, bottom, '─');
        }
        for y in rect.y + 1..bottom {
            put(buf, rect.x, y, '│');
            put(buf, right, y, '│');
        }
    }
}

/// Inner content width of a cell after padding and, when the padding leaves
/// no room for it, the grid line.
fn content_width(width: u16, pad: Edges, border: bool) -> u16 {
    let sep = u16::from(border && pad.right == 0);
    width
        .saturating_sub(pad.horizontal_total() + sep)
        .max(1)
}

fn cell_line_count(
    content: &CellContent,
    overflow: OverflowPolicy,
    density: Density,
    width: u16,
) -> u16 {
    match content {
        CellContent::Text(s) => match overflow {
            OverflowPolicy::Wrap => wrap_words(s, width.max(1) as usize).len().max(1) as u16,
            _ => 1,
        },
        CellContent::Compound(_) => {
            if density == Density::Compact {
                1
            } else {
                2
            }
        }
        _ => 1,
    }
}

fn split_clips(region: Rect, band_w: u16) -> (Rect, Rect) {
    let band = band_w.min(region.width);
    let frozen = Rect::new(region.x, region.y, band, region.height);
    let scroll = Rect::new(
        region.x + band,
        region.y,
        region.width - band,
        region.height,
    );
    (frozen, scroll)
}

fn clamp_rect(x: i32, y: i32, width: u16, height: u16, clip: Rect) -> Rect {
    let left = x.max(clip.x as i32);
    let top = y.max(clip.y as i32);
    let right = (x + width as i32).min(clip.right() as i32);
    let bottom = (y + height as i32).min(clip.bottom() as i32);
    if right <= left || bottom <= top {
        Rect::default()
    } else {
        Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    }
}

/// Clip narrowed to one cell's horizontal extent.
fn clip_to_cell(clip: Rect, x: i32, width: u16) -> Rect {
    let left = x.max(clip.x as i32);
    let right = (x + width as i32).min(clip.right() as i32);
    if right <= left {
        Rect::default()
    } else {
        Rect::new(left as u16, clip.y, (right - left) as u16, clip.height)
    }
}
