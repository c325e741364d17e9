//! Output formatting for entry listings
//!
//! Renders entries either as an aligned plain-text table
//! (`group key chr utf_name alias`) or as a JSON array. Columns are padded
//! to terminal display width.

use unicode_width::UnicodeWidthStr;

use crate::registry::Entry;

const HEADERS: [&str; 5] = ["group", "key", "chr", "utf_name", "alias"];
const COLUMN_GAP: &str = "  ";

/// Terminal columns occupied by `text`
fn display_width(text: &str) -> usize {
    text.width()
}

fn row(entry: &Entry) -> [String; 5] {
    [
        entry.category().to_string(),
        entry.key().to_string(),
        entry.character().to_string(),
        entry.canonical_name().to_string(),
        entry.aliases().join(", "),
    ]
}

/// Render entries as an aligned table with a header row
pub fn format_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows: Vec<[String; 5]> = entries.into_iter().map(row).collect();

    let mut widths = HEADERS.map(display_width);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = width.saturating_sub(display_width(cell));
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render entries as a pretty-printed JSON array
pub fn format_json<'a, I>(entries: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries: Vec<&Entry> = entries.into_iter().collect();
    serde_json::to_string_pretty(&entries)
}
