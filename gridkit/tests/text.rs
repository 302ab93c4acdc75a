use gridkit::text::{align_offset, char_width, display_width, truncate_to_width, wrap_words};
use gridkit::Align;

#[test]
fn display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn display_width_cjk_is_double() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn char_width_basics() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn truncate_fits_untouched() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn truncate_clips_with_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn truncate_degenerate_widths() {
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn truncate_never_splits_a_wide_char() {
    // "日本" is 4 cells; width 5 leaves room for two chars plus ellipsis.
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn wrap_keeps_short_text_on_one_line() {
    assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
}

#[test]
fn wrap_breaks_at_word_boundaries() {
    assert_eq!(
        wrap_words("hello world foo bar", 11),
        vec!["hello world", "foo bar"]
    );
}

#[test]
fn wrap_breaks_overlong_words() {
    let lines = wrap_words("Wolfeschlegelstein", 8);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| display_width(l) <= 8));
}

#[test]
fn wrap_empty_input_yields_one_empty_line() {
    assert_eq!(wrap_words("", 10), vec![""]);
}

#[test]
fn wrap_zero_width_yields_nothing() {
    assert!(wrap_words("hello", 0).is_empty());
}

#[test]
fn align_offsets() {
    assert_eq!(align_offset(4, 10, Align::Left), 0);
    assert_eq!(align_offset(4, 10, Align::Center), 3);
    assert_eq!(align_offset(4, 10, Align::Right), 6);
    // Overflowing content pins to the left edge.
    assert_eq!(align_offset(12, 10, Align::Right), 0);
}
