use super::{Color, TextStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Merge another style on top of this one. Set fields of `over` win.
    pub fn overlay(mut self, over: &Style) -> Self {
        if over.background.is_some() {
            self.background = over.background;
        }
        if over.foreground.is_some() {
            self.foreground = over.foreground;
        }
        self.text_style = TextStyle {
            bold: self.text_style.bold || over.text_style.bold,
            italic: self.text_style.italic || over.text_style.italic,
            underline: self.text_style.underline || over.text_style.underline,
            dim: self.text_style.dim || over.text_style.dim,
        };
        self
    }
}
