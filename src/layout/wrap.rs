// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed-width greedy text wrapping with hyphenation and ellipsis truncation.
//!
//! Widths count `char`s, not bytes.

pub const ELLIPSIS: &str = "...";
pub const LINE_BREAK: char = '\n';

/// Wraps `text` into lines of at most `width` chars.
///
/// - Lines break at the last space inside the width window; the space is consumed.
/// - A word with no break opportunity is hyphenated after `width - 2` chars.
/// - With `max_lines = Some(n)`, wrapping stops after `n` lines; if text remains, the last line
///   is cut to `width - 4` chars plus `"..."`, or gets `"..."` appended when it is short enough.
pub fn wrap_lines(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let mut lines = Vec::<String>::new();
    if width == 0 || max_lines == Some(0) {
        return lines;
    }

    // Never take zero chars when hyphenating, otherwise tiny widths would not make progress.
    let hyphen_take = width.saturating_sub(2).max(1);
    let mut remaining = text;

    while !remaining.is_empty() && max_lines.map_or(true, |max| lines.len() < max) {
        let window_end = match byte_offset_of_char(remaining, width) {
            None => {
                lines.push(remaining.to_owned());
                remaining = "";
                continue;
            }
            Some(end) => end,
        };

        // `' '` is ASCII, so a byte search inside the window cannot split a code point.
        match memchr::memrchr(b' ', &remaining.as_bytes()[..window_end]) {
            Some(space) => {
                lines.push(remaining[..space].to_owned());
                remaining = &remaining[space + 1..];
            }
            None => {
                let cut = byte_offset_of_char(remaining, hyphen_take).unwrap_or(remaining.len());
                let mut line = remaining[..cut].to_owned();
                line.push('-');
                lines.push(line);
                remaining = &remaining[cut..];
            }
        }
    }

    if let Some(max) = max_lines {
        if lines.len() == max && !remaining.is_empty() {
            if let Some(last) = lines.last_mut() {
                if char_len(last) > width.saturating_sub(3) {
                    let keep = width.saturating_sub(4);
                    let cut = byte_offset_of_char(last, keep).unwrap_or(last.len());
                    last.truncate(cut);
                }
                last.push_str(ELLIPSIS);
            }
        }
    }

    lines
}

/// [`wrap_lines`] joined with [`LINE_BREAK`].
pub fn wrap_text(text: &str, width: usize, max_lines: Option<usize>) -> String {
    let lines = wrap_lines(text, width, max_lines);
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push(LINE_BREAK);
        }
        out.push_str(line);
    }
    out
}

/// Wrappable text of a loosely-typed value; anything that is not a string is empty.
pub fn text_value(value: &serde_json::Value) -> &str {
    value.as_str().map_or("", str::trim)
}

/// True when wrapping at `width` with `max_lines` hits the cap and truncates with an ellipsis.
pub fn is_overflowing(text: &str, width: usize, max_lines: usize) -> bool {
    let lines = wrap_lines(text, width, Some(max_lines));
    lines.len() >= max_lines && lines.last().is_some_and(|line| line.ends_with(ELLIPSIS))
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `n`-th char, or `None` when `text` has at most `n` chars.
fn byte_offset_of_char(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{char_len, is_overflowing, text_value, wrap_lines, wrap_text};

    #[test]
    fn short_text_is_a_single_line() {
        assert_eq!(wrap_lines("hello", 16, None), vec!["hello"]);
        assert_eq!(wrap_lines("", 16, None), Vec::<String>::new());
    }

    #[test]
    fn breaks_at_last_space_in_window() {
        assert_eq!(
            wrap_lines("the quick brown fox jumps", 10, None),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn hyphenates_words_without_break_opportunity() {
        assert_eq!(wrap_lines("abcdefghijkl", 6, None), vec!["abcd-", "efgh-", "ijkl"]);
    }

    #[test]
    fn caps_lines_and_appends_ellipsis_to_short_last_line() {
        let lines = wrap_lines("aaa bbb ccc ddd eee", 4, Some(2));
        // "bbb" is longer than width - 3, so it is cut to width - 4 = 0 chars.
        assert_eq!(lines, vec!["aaa", "..."]);

        let lines = wrap_lines("one two three four five six", 10, Some(2));
        assert_eq!(lines, vec!["one two", "three..."]);
    }

    #[test]
    fn caps_lines_and_truncates_long_last_line() {
        let lines = wrap_lines("abcdefgh ijklmnop qrstuvwx", 9, Some(2));
        assert_eq!(lines, vec!["abcdefgh", "ijklm..."]);
    }

    #[test]
    fn exact_fit_at_cap_has_no_ellipsis() {
        assert_eq!(wrap_lines("aaa bbb", 4, Some(2)), vec!["aaa", "bbb"]);
    }

    #[test]
    fn joins_with_line_breaks() {
        assert_eq!(wrap_text("the quick brown fox", 10, None), "the quick\nbrown fox");
    }

    #[test]
    fn non_string_values_wrap_to_empty() {
        assert_eq!(wrap_text(text_value(&serde_json::Value::Null), 10, None), "");
        assert_eq!(wrap_text(text_value(&serde_json::json!(12.5)), 10, Some(3)), "");
        assert_eq!(wrap_text(text_value(&serde_json::json!(" a b ")), 10, None), "a b");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let lines = wrap_lines("äöü äöü äöü", 7, None);
        assert_eq!(lines, vec!["äöü", "äöü äöü"]);
    }

    #[test]
    fn zero_width_or_zero_lines_yield_nothing() {
        assert!(wrap_lines("text", 0, None).is_empty());
        assert!(wrap_lines("text", 5, Some(0)).is_empty());
    }

    #[test]
    fn tiny_widths_still_make_progress() {
        let lines = wrap_lines("abc", 1, None);
        assert_eq!(lines, vec!["a-", "b-", "c"]);
    }

    #[rstest]
    #[case("the quick brown fox jumps over the lazy dog", 10)]
    #[case("a  double  spaced   line of gaps", 8)]
    #[case("one", 3)]
    #[case("words of varying lengths appear here in a longer sentence", 16)]
    fn rejoining_unhyphenated_lines_restores_text(#[case] text: &str, #[case] width: usize) {
        let lines = wrap_lines(text, width, None);
        assert!(lines.iter().all(|line| !line.ends_with('-')));
        assert_eq!(lines.join(" "), text);
        assert!(lines.iter().all(|line| char_len(line) <= width));
    }

    #[rstest]
    #[case(16, 3)]
    #[case(18, 4)]
    #[case(18, 8)]
    #[case(6, 2)]
    fn capped_lines_respect_width(#[case] width: usize, #[case] max_lines: usize) {
        let text = "Jonas follows the trail into the caves and finds the passage back";
        let lines = wrap_lines(text, width, Some(max_lines));
        assert!(lines.len() <= max_lines);
        for line in &lines[..lines.len().saturating_sub(1)] {
            assert!(char_len(line) <= width, "line {line:?} exceeds {width}");
        }
    }

    #[test]
    fn overflow_probe_requires_cap_and_ellipsis() {
        assert!(is_overflowing(crate::model::fixtures::LONG_TEXT, 16, 3));
        assert!(!is_overflowing("Short text", 16, 3));
        // Three lines that fit exactly are not overflowing.
        assert!(!is_overflowing("aaa bbb ccc", 4, 3));
        // An ellipsis inside the source text alone does not count.
        assert!(!is_overflowing("wait...", 16, 3));
    }
}
