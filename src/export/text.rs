use std::fmt::Write;
use std::path::Path;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::file_record::human_readable_size;
use crate::models::view::{ReportView, ScanResponse};

const NAME_WIDTH: usize = 40;
const PATH_WIDTH: usize = 60;

/// Plain terminal table. Columns are padded by display width so wide
/// characters in file names keep rows aligned.
pub fn render_text(response: &ScanResponse, top: Option<usize>) -> anyhow::Result<String> {
    let mut out = String::new();
    match response {
        ScanResponse::Report(view) => write_report(&mut out, view, top)?,
        ScanResponse::Failed { error } => writeln!(out, "error: {error}")?,
    }
    Ok(out)
}

pub fn export_text(
    response: &ScanResponse,
    top: Option<usize>,
    output_path: &Path,
) -> anyhow::Result<()> {
    let text = render_text(response, top)?;
    std::fs::write(output_path, text)?;
    Ok(())
}

fn write_report(out: &mut String, view: &ReportView, top: Option<usize>) -> std::fmt::Result {
    writeln!(out, "Path:       {}", view.scanned_path)?;
    writeln!(out, "Files:      {}", format_number(view.total_files))?;
    writeln!(
        out,
        "Total size: {} MB ({})",
        view.total_size_mb,
        human_readable_size(view.total_size_bytes)
    )?;
    if view.limit_reached {
        writeln!(out, "Note:       file limit reached, results are partial")?;
    }
    writeln!(out)?;

    writeln!(out, "{:<10} {:>8} {:>12} {:>8}", "Category", "Files", "Size (MB)", "%")?;
    for row in &view.overview {
        writeln!(
            out,
            "{:<10} {:>8} {:>12.2} {:>7.2}%",
            row.category.label(),
            row.count,
            row.size_mb,
            row.percent
        )?;
    }
    writeln!(out)?;

    let shown = top.unwrap_or(view.files.len()).min(view.files.len());
    writeln!(
        out,
        "{} {:>12}  {:<19}  {}",
        pad_to_width("Name", NAME_WIDTH),
        "Size (KB)",
        "Modified",
        "Path"
    )?;
    for file in view.files.iter().take(shown) {
        writeln!(
            out,
            "{} {:>12}  {:<19}  {}",
            pad_to_width(&truncate_to_width(&file.name, NAME_WIDTH), NAME_WIDTH),
            file.size_kb,
            file.modified,
            truncate_to_width(&file.path, PATH_WIDTH),
        )?;
    }
    if shown < view.files.len() {
        writeln!(out, "... {} more", view.files.len() - shown)?;
    }

    Ok(())
}

/// Cut `s` so it occupies at most `max_width` columns, marking the cut with `...`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut w = 0;
    let boundary = s
        .char_indices()
        .find(|&(_, c)| {
            w += c.width().unwrap_or(0);
            w > target
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    format!("{}...", &s[..boundary])
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{:pad$}", s, "", pad = padding)
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short.txt", 20), "short.txt");
        assert_eq!(truncate_to_width("abcdefghij", 8), "abcde...");
        // Each CJK character is two columns wide.
        let cut = truncate_to_width("写真写真写真.jpg", 9);
        assert!(cut.width() <= 9, "{cut}");
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("写", 4).width(), 4);
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(5000), "5,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
