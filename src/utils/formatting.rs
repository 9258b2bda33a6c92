//! Formatting utilities used for the grid, tooltips and exports.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Two-decimal display of an hour total; empty when it rounds to zero.
pub fn format_hours(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    if s == "0.00" || s == "-0.00" {
        String::new()
    } else {
        s
    }
}

/// Like [`format_hours`] with a unit appended: `"3.00 h"`.
pub fn format_hours_with_suffix(hours: f64, suffix: &str) -> String {
    let s = format_hours(hours);
    if s.is_empty() || suffix.is_empty() {
        s
    } else {
        format!("{s} {suffix}")
    }
}

pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// Display width in terminal columns, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Cut `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{s}", " ".repeat(pad))
}

pub fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    let left = pad / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(pad - left))
}
