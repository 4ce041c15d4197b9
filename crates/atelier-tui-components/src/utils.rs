//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within a given width, adding ellipsis if needed.
pub fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        return text.chars().take(max_width).collect();
    }

    let mut width = 0;
    let mut result = String::new();

    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str("...");
    result
}

/// Flow tags into rows no wider than `width`.
///
/// Each tag occupies its text plus two padding cells, with one cell between
/// neighbours. A tag wider than the row is truncated onto its own row.
pub fn layout_tags(tags: &[String], width: usize) -> Vec<Vec<String>> {
    if width < 3 {
        return Vec::new();
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let tag = truncate(tag, width - 2);
        let tag_width = UnicodeWidthStr::width(tag.as_str()) + 2;
        let needed = if current.is_empty() {
            tag_width
        } else {
            tag_width + 1
        };

        if used + needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }

        used += if current.is_empty() {
            tag_width
        } else {
            tag_width + 1
        };
        current.push(tag);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello world", 8), "Hello...");
        assert_eq!(truncate("Hi", 10), "Hi");
        assert_eq!(truncate("Hello", 5), "Hello");
    }

    #[test]
    fn test_layout_tags_wraps() {
        let tags: Vec<String> = ["wood", "metal", "glass"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        // " wood " (6) + gap (1) + " metal " (7) = 14
        let rows = layout_tags(&tags, 14);
        assert_eq!(rows, vec![vec!["wood", "metal"], vec!["glass"]]);
    }

    #[test]
    fn test_layout_tags_empty() {
        assert!(layout_tags(&[], 20).is_empty());
    }

    #[test]
    fn test_layout_tags_truncates_long_tag() {
        let tags = vec!["upholstery".to_string()];
        let rows = layout_tags(&tags, 8);
        assert_eq!(rows, vec![vec!["uph...".to_string()]]);
    }
}
