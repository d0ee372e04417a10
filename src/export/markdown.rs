use std::fmt::Write;
use std::path::Path;

use crate::models::file_record::human_readable_size;
use crate::models::view::{ReportView, ScanResponse};

/// Render as Markdown. `top` caps the number of file rows; `None` lists all.
pub fn render_markdown(response: &ScanResponse, top: Option<usize>) -> anyhow::Result<String> {
    let mut md = String::new();

    writeln!(md, "# Folder Report")?;
    writeln!(md)?;

    match response {
        ScanResponse::Report(view) => write_report(&mut md, view, top)?,
        ScanResponse::Failed { error } => writeln!(md, "> **Error:** {error}")?,
    }

    Ok(md)
}

pub fn export_markdown(
    response: &ScanResponse,
    top: Option<usize>,
    output_path: &Path,
) -> anyhow::Result<()> {
    let md = render_markdown(response, top)?;
    std::fs::write(output_path, md)?;
    Ok(())
}

fn write_report(md: &mut String, view: &ReportView, top: Option<usize>) -> std::fmt::Result {
    writeln!(md, "- **Path:** {}", view.scanned_path)?;
    writeln!(md, "- **Files:** {}", view.total_files)?;
    writeln!(
        md,
        "- **Total Size:** {} MB ({})",
        view.total_size_mb,
        human_readable_size(view.total_size_bytes)
    )?;
    if view.limit_reached {
        writeln!(md, "- **Limit reached:** results are partial")?;
    }
    writeln!(md)?;

    writeln!(md, "## Overview")?;
    writeln!(md)?;
    writeln!(md, "| Category | Files | Size (MB) | % |")?;
    writeln!(md, "|----------|------:|----------:|--:|")?;
    for row in &view.overview {
        writeln!(
            md,
            "| {} | {} | {:.2} | {:.2}% |",
            row.category, row.count, row.size_mb, row.percent
        )?;
    }
    writeln!(md)?;

    let shown = top.unwrap_or(view.files.len()).min(view.files.len());
    writeln!(md, "## Files ({} of {})", shown, view.files.len())?;
    writeln!(md)?;
    writeln!(md, "| Name | Size (KB) | Modified | Path |")?;
    writeln!(md, "|------|----------:|----------|------|")?;
    for file in view.files.iter().take(shown) {
        writeln!(
            md,
            "| {} | {} | {} | {} |",
            escape_cell(&file.name),
            file.size_kb,
            file.modified,
            escape_cell(&file.path),
        )?;
    }

    Ok(())
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
