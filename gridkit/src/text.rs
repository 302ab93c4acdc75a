//! Terminal text metrics - the measurement capability behind column sizing
//! and overflow handling. Widths are display cells, not bytes or chars.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::Align;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Clip `s` to at most `max_width` cells, ending in an ellipsis when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis.
    let target = max_width - 1;
    let mut out = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push('…');
    out
}

/// Word-wrap `s` into lines of at most `max_width` cells. Words wider than
/// the line are broken mid-word.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut pieces = break_word(word, max_width);
                if let Some(last) = pieces.pop() {
                    lines.extend(pieces);
                    current_width = display_width(&last);
                    current = last;
                }
                continue;
            }

            let sep = usize::from(!current.is_empty());
            if current_width + sep + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_width = word_width;
            } else {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        } else if input_line.chars().all(char::is_whitespace) {
            lines.push(String::new());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Break a single word into cell-width-bounded pieces.
fn break_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in word.chars() {
        let w = char_width(ch);
        if w == 0 {
            // Combining characters ride along with the previous cell.
            current.push(ch);
            continue;
        }
        if current_width + w > max_width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Horizontal offset that places text of `text_width` cells inside
/// `available_width` cells under the given alignment.
pub fn align_offset(text_width: usize, available_width: usize, align: Align) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Align::Left => 0,
        Align::Center => (available_width - text_width) / 2,
        Align::Right => available_width - text_width,
    }
}
