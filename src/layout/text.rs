//! Text metrics estimation and flattened-text extraction.
//!
//! There is no shaping engine here: heights come from a fixed average glyph
//! width and a fixed line-height multiplier. The estimate is deterministic and
//! never decreases when text grows.

use super::constants::*;
use crate::models::node::{Child, Node, Tag};

/// Single-line height for a font size (points), floored at [`MIN_LINE_HEIGHT`].
pub fn line_height(font_size: f64) -> f64 {
    (font_size * LINE_HEIGHT_FACTOR / PT_PER_UNIT).max(MIN_LINE_HEIGHT)
}

/// Approximate glyphs per line for a font size in a given width.
pub fn chars_per_line(font_size: f64, width: f64) -> usize {
    let effective_width = width.max(MIN_TEXT_WIDTH);
    let per_line = (effective_width * PT_PER_UNIT / (font_size * AVG_CHAR_WIDTH_RATIO)).floor();
    if per_line.is_finite() && per_line >= 1.0 {
        per_line as usize
    } else {
        1
    }
}

/// Estimates the rendered height of `text`.
///
/// Explicit `\n` breaks split the text first; every non-empty segment then
/// wraps to `ceil(len / chars_per_line)` lines (at least one). The result is
/// never below one line height, even for empty text.
pub fn estimate_text_height(
    text: &str,
    font_size: f64,
    available_width: f64,
    explicit_line_height: Option<f64>,
) -> f64 {
    let line_h = explicit_line_height
        .filter(|h| *h > 0.0)
        .unwrap_or_else(|| line_height(font_size));
    if text.is_empty() {
        return line_h;
    }

    let per_line = chars_per_line(font_size, available_width);
    let lines: usize = text
        .split('\n')
        .map(|segment| segment.chars().count())
        .filter(|len| *len > 0)
        .map(|len| len.div_ceil(per_line).max(1))
        .sum();

    (lines as f64 * line_h).max(line_h)
}

/// Normalises a raw text leaf: strips carriage returns, turns tabs and
/// non-breaking spaces into spaces, collapses whitespace runs, and drops blank lines.
pub fn normalize_text(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\t' || c == '\u{a0}' { ' ' } else { c })
        .collect();
    tidy_lines(&cleaned)
}

/// Collapses whitespace within each line and removes empty lines.
fn tidy_lines(value: &str) -> String {
    value
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flattens the text of a subtree.
///
/// Text leaves are concatenated depth-first. Block tags join their children
/// with a newline and inline tags with a space; a line break contributes a newline.
pub fn extract_text(node: &Node) -> String {
    if node.tag == Tag::LineBreak {
        return "\n".to_string();
    }

    let parts: Vec<String> = node
        .children
        .iter()
        .map(|child| match child {
            Child::Text(text) => normalize_text(text),
            Child::Node(inner) => extract_text(inner),
        })
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return String::new();
    }

    let separator = if node.tag.is_block() { "\n" } else { " " };
    tidy_lines(&parts.join(separator))
}

/// True for text leaves that normalise to nothing.
pub fn is_blank_text(child: &Child) -> bool {
    matches!(child, Child::Text(text) if normalize_text(text).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_floor() {
        assert!((line_height(8.0) - MIN_LINE_HEIGHT).abs() < 1e-9);
        assert!((line_height(16.0) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let h = estimate_text_height("", 12.0, 4.0, None);
        assert!((h - line_height(12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_wrapping_and_explicit_breaks() {
        // 2.0 units at 12pt: floor(144 / 6.6) = 21 chars per line.
        assert_eq!(chars_per_line(12.0, 2.0), 21);
        let lh = line_height(12.0);
        let one = estimate_text_height("short", 12.0, 2.0, None);
        let wrapped = estimate_text_height(&"x".repeat(43), 12.0, 2.0, None);
        let broken = estimate_text_height("first\nsecond", 12.0, 2.0, None);
        assert!((one - lh).abs() < 1e-9);
        assert!((wrapped - 3.0 * lh).abs() < 1e-9);
        assert!((broken - 2.0 * lh).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_line_height_wins() {
        let h = estimate_text_height("one\ntwo", 12.0, 5.0, Some(0.3));
        assert!((h - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_height_is_monotonic_in_length() {
        let mut text = String::new();
        let mut previous = 0.0;
        for i in 0..400 {
            text.push(if i % 37 == 0 { '\n' } else { 'a' });
            let h = estimate_text_height(&text, 11.0, 1.7, None);
            assert!(h >= previous, "height shrank at length {}", i + 1);
            previous = h;
        }
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  Hello \t  world\r\n   again  "), "Hello world\nagain");
        assert_eq!(normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_extract_text_joins_block_and_inline() {
        let node = Node::new("div", "")
            .child(Node::new("p", "").text("First").child(Node::new("strong", "").text("bold")))
            .child(Node::new("span", "").text("a").child(Node::new("br", "")).text("b"))
            .text("   tail   ");
        assert_eq!(extract_text(&node), "First\nbold\na\nb\ntail");
    }

    #[test]
    fn test_extract_text_of_empty_subtree() {
        let node = Node::new("div", "").text("   ").child(Node::new("span", ""));
        assert_eq!(extract_text(&node), "");
    }
}
