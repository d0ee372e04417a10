use std::fmt::Write;
use std::path::Path;

use crate::models::file_record::human_readable_size;
use crate::models::view::{ReportView, ScanResponse};

pub fn render_html(response: &ScanResponse) -> anyhow::Result<String> {
    let mut html = String::new();

    write!(html, r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Folder Report</title>
<style>
    body {{ font-family: -apple-system, system-ui, sans-serif; margin: 20px; background: #1a1a2e; color: #e0e0e0; }}
    h1 {{ color: #00d4ff; }}
    h2 {{ color: #5dade2; margin-top: 30px; }}
    .summary {{ background: #16213e; padding: 15px; border-radius: 8px; margin-bottom: 20px; }}
    .summary p {{ margin: 6px 0; }}
    .summary strong {{ color: #00d4ff; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ padding: 4px 10px; text-align: left; border-bottom: 1px solid #16213e; }}
    th {{ color: #5dade2; }}
    td.num {{ text-align: right; color: #aaa; }}
    .bar {{ display: inline-block; width: 200px; height: 16px; background: #0f3460; border-radius: 3px; overflow: hidden; vertical-align: middle; }}
    .bar-fill {{ display: block; height: 100%; border-radius: 3px; background: linear-gradient(90deg, #00d4ff, #0f3460); }}
    .notice {{ background: #2c2a1a; padding: 10px 15px; border-radius: 8px; border-left: 3px solid #f1c40f; }}
    .error {{ background: #2c1a1a; padding: 15px; border-radius: 8px; border-left: 3px solid #e74c3c; color: #e74c3c; }}
</style>
</head>
<body>
<h1>Folder Report</h1>
"#)?;

    match response {
        ScanResponse::Report(view) => write_report(&mut html, view)?,
        ScanResponse::Failed { error } => {
            writeln!(html, "<div class=\"error\">{}</div>", escape_html(error))?;
        }
    }

    write!(html, "</body>\n</html>")?;
    Ok(html)
}

pub fn export_html(response: &ScanResponse, output_path: &Path) -> anyhow::Result<()> {
    let html = render_html(response)?;
    std::fs::write(output_path, html)?;
    Ok(())
}

fn write_report(html: &mut String, view: &ReportView) -> std::fmt::Result {
    writeln!(html, "<div class=\"summary\">")?;
    writeln!(html, "<p><strong>Path:</strong> {}</p>", escape_html(&view.scanned_path))?;
    writeln!(html, "<p><strong>Files:</strong> {}</p>", view.total_files)?;
    writeln!(
        html,
        "<p><strong>Total Size:</strong> {} MB ({})</p>",
        view.total_size_mb,
        human_readable_size(view.total_size_bytes)
    )?;
    writeln!(html, "</div>")?;

    if view.limit_reached {
        writeln!(
            html,
            "<p class=\"notice\">File limit reached: only the first {} files were scanned.</p>",
            view.total_files
        )?;
    }

    writeln!(html, "<h2>Overview</h2>")?;
    writeln!(html, "<table>")?;
    writeln!(html, "<tr><th>Category</th><th>Files</th><th>Size (MB)</th><th>%</th><th></th></tr>")?;
    for row in &view.overview {
        let bar_width = (row.percent * 2.0).min(200.0);
        writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{:.2}</td><td class=\"num\">{:.2}%</td>\
             <td><span class=\"bar\"><span class=\"bar-fill\" style=\"width:{bar_width:.0}px\"></span></span></td></tr>",
            row.category, row.count, row.size_mb, row.percent,
        )?;
    }
    writeln!(html, "</table>")?;

    writeln!(html, "<h2>Files ({})</h2>", view.files.len())?;
    writeln!(html, "<table>")?;
    writeln!(html, "<tr><th>Name</th><th>Size (KB)</th><th>Modified</th><th>Path</th></tr>")?;
    for file in &view.files {
        writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&file.name),
            file.size_kb,
            file.modified,
            escape_html(&file.path),
        )?;
    }
    writeln!(html, "</table>")?;

    Ok(())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
