//! Presentational leaf cells layered on the cell renderer.

use crate::types::BadgeTone;

/// A status pill: short label on a tone-colored background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// The pill text as drawn, with its breathing space.
    pub fn display_text(&self) -> String {
        format!(" {} ", self.label)
    }
}

/// A glyph with an optional trailing label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCell {
    pub glyph: char,
    pub label: Option<String>,
}

impl IconCell {
    pub fn new(glyph: char) -> Self {
        Self { glyph, label: None }
    }

    pub fn labeled(glyph: char, label: impl Into<String>) -> Self {
        Self {
            glyph,
            label: Some(label.into()),
        }
    }

    pub fn display_text(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}", self.glyph, label),
            None => self.glyph.to_string(),
        }
    }
}

/// A two-line cell: primary text with a dimmed secondary line. Collapses to
/// a single separated line under compact density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundCell {
    pub primary: String,
    pub secondary: String,
}

impl CompoundCell {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn collapsed_text(&self) -> String {
        format!("{} · {}", self.primary, self.secondary)
    }
}
