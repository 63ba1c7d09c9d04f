//! Formatting utilities for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money with the configured currency symbol, two decimals: `$90.00`.
pub fn currency(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

pub fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Join a tag list for a table cell: `Marriage, Anxiety, Depression`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Truncate to `max` display columns, appending an ellipsis when cut.
/// Width-aware so wide glyphs don't break column alignment.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Wrap a counselor bio to the configured width with a two-space indent.
pub fn wrap_bio(bio: &str, width: usize) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent("  ")
        .subsequent_indent("  ");
    textwrap::fill(bio, options)
}
