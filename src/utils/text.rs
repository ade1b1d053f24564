//! Small text helpers shared by widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Case-insensitive substring test; an empty needle matches everything
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Truncate to `max` terminal cells, ending with an ellipsis when cut
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cells = c.width().unwrap_or(0);
        if used + cells > max - 1 {
            break;
        }
        used += cells;
        out.push(c);
    }
    out.push('…');
    out
}

/// Up to two uppercase initials taken from the first two words
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Display width in terminal cells; wide glyphs such as emoji take two
#[must_use]
pub fn width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Rows `text` takes when word-wrapped into `width` columns, following the
/// greedy wrapping `Paragraph` does. Empty text still takes one row.
#[must_use]
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;
    for line in text.lines() {
        let mut line_rows = 1;
        let mut current = 0usize;
        for word in line.split_whitespace() {
            let len = word.width().max(1);
            if current > 0 && current + 1 + len <= width {
                current += 1 + len;
                continue;
            }
            if current > 0 {
                line_rows += 1;
            }
            // Words longer than the line are broken across rows
            let broken = (len - 1) / width;
            line_rows += broken;
            current = len - broken * width;
        }
        rows += line_rows;
    }
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Alpha", "a"));
        assert!(contains_ignore_case("Alpha", "ALP"));
        assert!(!contains_ignore_case("Beta", "x"));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Orthodontics", 20), "Orthodontics");
        assert_eq!(truncate("Orthodontics", 6), "Ortho…");
        assert_eq!(truncate("abc", 0), "");
        // Wide glyphs never get split across the cut
        assert_eq!(truncate("🕐🕐🕐", 4), "🕐…");
        assert_eq!(truncate("🕐🕐", 4), "🕐🕐");
    }

    #[test]
    fn test_width_counts_cells() {
        assert_eq!(width("Alpha"), 5);
        assert_eq!(width("❌"), 2);
        assert_eq!(width("🕐 Agenda"), 9);
        assert_eq!(width("ção"), 3);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana costa"), "AC");
        assert_eq!(initials("Carla Maria Souza"), "CM");
        assert_eq!(initials("Bruno"), "B");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("one two three", 7), 2);
        assert_eq!(wrapped_height("one\ntwo", 20), 2);
        assert_eq!(wrapped_height("abcdefghijkl", 5), 3);
    }
}
