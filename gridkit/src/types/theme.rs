use super::Color;

/// Badge tone, mapped to a theme color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
}

/// Named colors for the grid chrome.
///
/// Like bare HTML defaults - the built-in theme just ensures every surface
/// is readable on a dark terminal.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub grid_line: Color,
    pub stripe_bg: Color,
    pub hover_bg: Color,
    pub frozen_bg: Color,
    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
    pub badge_success: Color,
    pub badge_warning: Color,
    pub badge_danger: Color,
    pub badge_info: Color,
    pub badge_neutral: Color,
    pub badge_fg: Color,
}

impl Theme {
    pub fn badge_tone(&self, tone: BadgeTone) -> Color {
        match tone {
            BadgeTone::Success => self.badge_success,
            BadgeTone::Warning => self.badge_warning,
            BadgeTone::Danger => self.badge_danger,
            BadgeTone::Info => self.badge_info,
            BadgeTone::Neutral => self.badge_neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let background = Color::oklch(0.13, 0.01, 260.0);
        Self {
            background,
            foreground: Color::oklch(0.95, 0.0, 0.0),
            header_bg: Color::oklch(0.25, 0.02, 260.0),
            header_fg: Color::oklch(0.9, 0.02, 260.0),
            grid_line: Color::oklch(0.35, 0.01, 260.0),
            stripe_bg: background.lighten(0.04),
            hover_bg: background.lighten(0.1),
            frozen_bg: background.lighten(0.06),
            tooltip_bg: Color::oklch(0.3, 0.03, 260.0),
            tooltip_fg: Color::oklch(0.97, 0.0, 0.0),
            badge_success: Color::oklch(0.55, 0.12, 150.0),
            badge_warning: Color::oklch(0.65, 0.13, 85.0),
            badge_danger: Color::oklch(0.55, 0.16, 25.0),
            badge_info: Color::oklch(0.55, 0.12, 240.0),
            badge_neutral: Color::oklch(0.45, 0.02, 260.0),
            badge_fg: Color::oklch(0.98, 0.0, 0.0),
        }
    }
}
