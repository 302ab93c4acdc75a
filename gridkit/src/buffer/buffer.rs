use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, Style, TextStyle};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.index(x, y)])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Paint the background of every cell inside `rect`.
    pub fn fill_bg(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                let idx = self.index(x, y);
                self.cells[idx].bg = bg;
            }
        }
    }

    /// Write a single line of text starting at column `x` (which may sit
    /// left of the clip under horizontal scrolling), clipped to `clip`.
    /// Wide characters that would straddle the clip edge are dropped.
    pub fn draw_text(&mut self, x: i32, y: u16, text: &str, style: &ResolvedStyle, clip: Rect) {
        if y < clip.y || y >= clip.bottom() || y >= self.height {
            return;
        }

        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as i32;
            if w == 0 {
                continue;
            }
            if cx < clip.x as i32 {
                cx += w;
                continue;
            }
            if cx + w > clip.right() as i32 || cx + w > self.width as i32 {
                break;
            }

            let col = cx as u16;
            let idx = self.index(col, y);
            let bg = style.bg.unwrap_or(self.cells[idx].bg);
            self.cells[idx] = Cell {
                ch,
                fg: style.fg,
                bg,
                style: style.text_style,
                wide_tail: false,
            };
            for tail in 1..w as u16 {
                let idx = self.index(col + tail, y);
                self.cells[idx] = Cell {
                    ch: ' ',
                    fg: style.fg,
                    bg,
                    style: style.text_style,
                    wide_tail: true,
                };
            }
            cx += w;
        }
    }

    /// Cells that differ from `other`, in row-major order.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// The characters of row `y` as a string. Test and debug helper.
    pub fn row_string(&self, y: u16) -> String {
        let mut out = String::new();
        if y >= self.height {
            return out;
        }
        for x in 0..self.width {
            let cell = &self.cells[self.index(x, y)];
            if !cell.wide_tail {
                out.push(cell.ch);
            }
        }
        out
    }
}

/// A style with colors already resolved to terminal RGB.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStyle {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub text_style: TextStyle,
}

impl ResolvedStyle {
    pub fn from_style(style: &Style, default_fg: Rgb) -> Self {
        Self {
            fg: style.foreground.map(|c| c.to_rgb()).unwrap_or(default_fg),
            bg: style.background.map(|c| c.to_rgb()),
            text_style: style.text_style,
        }
    }
}
