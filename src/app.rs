use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::core::events::{self, Event, EventReceiver};
use crate::core::paths::PathStyle;
use crate::core::scanner::Scanner;
use crate::export;
use crate::models::view::ScanResponse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
    Markdown,
}

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub path_style: PathStyle,
    /// `None` writes to stdout.
    pub destination: Option<PathBuf>,
    pub top: Option<usize>,
}

/// One scan-and-render run of the command-line tool.
pub struct App {
    root: PathBuf,
    settings: Settings,
    output: OutputOptions,
}

impl App {
    pub fn new(root: PathBuf, settings: Settings, output: OutputOptions) -> Self {
        Self {
            root,
            settings,
            output,
        }
    }

    /// Scan, render and write the result. Returns `false` when the root was
    /// not found; the error shape has still been written in that case.
    pub async fn run(self) -> anyhow::Result<bool> {
        let response = self.scan().await?;

        match &self.output.destination {
            Some(path) => {
                export_to(&response, self.output.format, self.output.top, path)?;
                tracing::info!("Exported to: {}", path.display());
            }
            None => {
                let rendered = render(&response, self.output.format, self.output.top)?;
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(response.error().is_none())
    }

    /// Run the blocking walk off the async threads while a second task logs
    /// its progress events.
    pub async fn scan(&self) -> anyhow::Result<ScanResponse> {
        let (event_tx, event_rx) = events::create_event_channel();
        let scanner = Scanner::new(self.settings.clone()).with_events(event_tx);
        let root = self.root.clone();

        let log_handle = tokio::spawn(log_events(event_rx));
        let (result, progress) = tokio::task::spawn_blocking(move || {
            let result = scanner.scan(root);
            (result, scanner.progress())
        })
        .await?;
        // The scanner (and its sender) is dropped once the blocking task ends,
        // which closes the channel and lets the logger finish.
        log_handle.await?;

        let snapshot = progress.snapshot();
        tracing::debug!(
            dirs = snapshot.dirs_scanned,
            skipped = snapshot.skipped,
            files_per_second = snapshot.files_per_second,
            "scan statistics"
        );

        Ok(ScanResponse::from_result(result, self.output.path_style))
    }
}

pub fn render(
    response: &ScanResponse,
    format: OutputFormat,
    top: Option<usize>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => export::text::render_text(response, top),
        OutputFormat::Json => export::json::render_json(response),
        OutputFormat::Html => export::html::render_html(response),
        OutputFormat::Markdown => export::markdown::render_markdown(response, top),
    }
}

/// Render straight to `output_path`.
pub fn export_to(
    response: &ScanResponse,
    format: OutputFormat,
    top: Option<usize>,
    output_path: &Path,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => export::text::export_text(response, top, output_path),
        OutputFormat::Json => export::json::export_json(response, output_path),
        OutputFormat::Html => export::html::export_html(response, output_path),
        OutputFormat::Markdown => export::markdown::export_markdown(response, top, output_path),
    }
}

async fn log_events(mut event_rx: EventReceiver) {
    while let Some(event) = event_rx.recv().await {
        match event {
            Event::ScanStarted { path } => {
                tracing::debug!("Scanning {}", path.display());
            }
            Event::Progress {
                scanned,
                total_size,
                current_path,
            } => {
                tracing::info!(
                    scanned,
                    total_size,
                    current = %current_path.display(),
                    "scanning"
                );
            }
            Event::EntrySkipped { path, reason } => {
                tracing::trace!(path = %path.display(), ?reason, "skipped");
            }
            Event::ScanCompleted {
                total_files,
                limit_reached,
                skipped,
                duration_ms,
                ..
            } => {
                if skipped > 0 {
                    tracing::info!("{} unreadable entries were left out", skipped);
                }
                if limit_reached {
                    tracing::warn!("File limit reached after {} files", total_files);
                }
                tracing::debug!("Scan finished in {} ms", duration_ms);
            }
        }
    }
}
