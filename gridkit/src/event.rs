//! Input events, decoupled from the terminal backend.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerMove { x: u16, y: u16 },
    PointerLeave,
    Scroll { dx: i16, dy: i16 },
    Key(Key),
    FocusCell { row: usize, col: usize },
    Blur,
    Resize { width: u16, height: u16 },
}

/// Map a backend event onto a grid event. Events the grid has no use for
/// map to `None`.
pub fn from_crossterm(event: &CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            let key = match key.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::Esc => Key::Escape,
                KeyCode::Char(c) => Key::Char(c),
                _ => return None,
            };
            Some(Event::Key(key))
        }
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => Some(Event::PointerMove {
                x: mouse.column,
                y: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Event::Scroll { dx: 0, dy: -1 }),
            MouseEventKind::ScrollDown => Some(Event::Scroll { dx: 0, dy: 1 }),
            MouseEventKind::ScrollLeft => Some(Event::Scroll { dx: -2, dy: 0 }),
            MouseEventKind::ScrollRight => Some(Event::Scroll { dx: 2, dy: 0 }),
            _ => None,
        },
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
