use super::*;
use proptest::prelude::*;

#[test]
fn test_window_in_middle_of_long_text() {
    let text: String = ('a'..='z').chain('A'..='X').collect();
    assert_eq!(text.chars().count(), 50);

    let window = render_context(&text, 25);

    assert_eq!(window.excerpt, "…pqrstuvwxyzABCDEFGHI…");
    assert_eq!(window.underline, format!("{}^{}", " ".repeat(11), "~".repeat(10)));

    // Caret sits under the character at index 25 of the original text
    let caret = window.underline.find('^').unwrap();
    assert_eq!(window.excerpt.chars().nth(caret), Some('z'));
}

#[test]
fn test_window_clamped_at_start() {
    let window = render_context("fix: something went wrong", 3);

    assert_eq!(window.excerpt, "fix: somethin…");
    assert_eq!(window.underline, "   ^~~~~~~~~~");
}

#[test]
fn test_window_clamped_at_end() {
    let window = render_context("feat(parser): ok", 14);

    assert_eq!(window.excerpt, "…(parser): ok");
    assert_eq!(window.underline, format!("{}^~~", " ".repeat(11)));
}

#[test]
fn test_window_at_end_of_text() {
    let window = render_context("fix:", 4);

    assert_eq!(window.excerpt, "fix:");
    assert_eq!(window.underline, "    ^");
}

#[test]
fn test_window_at_start_of_text() {
    let window = render_context("nope", 0);

    assert_eq!(window.excerpt, "nope");
    assert_eq!(window.underline, "^~~~~");
}

#[test]
fn test_offset_past_end_is_clamped() {
    let window = render_context("abc", 40);
    assert_eq!(window, render_context("abc", 3));
}

#[test]
fn test_line_feeds_are_made_visible() {
    let window = render_context("fix: a\n\nbody", 6);

    assert_eq!(window.excerpt, "fix: a␤␤body");
    assert_eq!(window.underline, "      ^~~~~~");
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    let window = render_context("fix: übung", 6);

    assert_eq!(window.excerpt, "fix: übung");
    let caret = window.underline.find('^').unwrap();
    assert_eq!(window.excerpt.chars().nth(caret), Some('b'));
}

#[test]
fn test_display_aligns_underline_with_excerpt() {
    let rendered = render_context("fix: bug", 5).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Context: \"fix: bug\"");
    assert_eq!(lines[1], "               ^~~~");
    assert_eq!(lines[0].find('b'), lines[1].find('^'));
}

proptest! {
    #[test]
    fn test_caret_aligns_with_matched_offset(text in "[a-zü日é \n]{0,60}", offset in 0usize..70) {
        let chars: Vec<char> = text.chars().collect();
        let window = render_context(&text, offset);
        let clamped = offset.min(chars.len());

        let caret = window.underline.chars().position(|c| c == '^');
        prop_assert!(caret.is_some());
        let caret = caret.unwrap();

        if let Some(&expected) = chars.get(clamped) {
            let expected = if expected == '\n' { NEWLINE_PLACEHOLDER } else { expected };
            prop_assert_eq!(window.excerpt.chars().nth(caret), Some(expected));
        }
        prop_assert_eq!(window.underline.chars().filter(|&c| c == '^').count(), 1);
    }

    #[test]
    fn test_render_arbitrary_text_does_not_panic(text in any::<String>(), offset in 0usize..200) {
        let window = render_context(&text, offset);
        prop_assert!(window.excerpt.chars().count() <= 2 * CONTEXT_WINDOW + 2);
    }
}
