//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths sized to the widest cell (width-aware, so emoji and
    /// CJK in names don't skew the grid).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let used = UnicodeWidthStr::width(cell);
        format!("{}{}", cell, " ".repeat(width.saturating_sub(used)))
    }

    pub fn render(&self, separator_char: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&Self::pad(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len() * 2;
        out.push_str(&separator_char.repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = widths.get(i).copied().unwrap_or(0);
                out.push_str(&Self::pad(cell, width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }

    pub fn print(&self, separator_char: &str) {
        print!("{}", self.render(separator_char));
    }
}
