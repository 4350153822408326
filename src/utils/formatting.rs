//! Padding helpers for fixed-width output.
//!
//! Widths are counted in UTF-8 code units (bytes), not display cells, so the
//! `{:<width$}` formatter (which counts chars) is not used here.

/// Length of a cell as the table measures it.
pub fn cell_width(s: &str) -> usize {
    s.len()
}

/// Left-justify `s` within `width` units, padding with spaces.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = cell_width(s);
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    out.push_str(s);
    out.push_str(&" ".repeat(width - len));
    out
}

/// Separator made of `-` spanning `width` units.
pub fn split_line(width: usize) -> String {
    "-".repeat(width)
}
