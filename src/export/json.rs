use std::path::Path;

use crate::models::view::ScanResponse;

pub fn render_json(response: &ScanResponse) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

pub fn export_json(response: &ScanResponse, output_path: &Path) -> anyhow::Result<()> {
    let json = render_json(response)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

