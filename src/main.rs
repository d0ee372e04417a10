use std::path::PathBuf;

use clap::Parser;

use folderlens::app::{App, OutputFormat, OutputOptions};
use folderlens::config::settings::{Settings, DEFAULT_LIMIT, DEFAULT_MAX_DEPTH};
use folderlens::core::paths::{self, PathStyle};

#[derive(Parser, Debug)]
#[command(name = "folderlens", version, about = "Categorize a folder's files and summarize their sizes")]
struct Cli {
    /// Folder to scan (default: current directory)
    #[arg(default_value = ".")]
    path: String,

    /// Deepest directory level to descend into (0 = only the folder itself)
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Stop after collecting this many files
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Treat PATH as a Windows path (C:\...) and scan its /mnt/<drive> mount
    #[arg(long)]
    windows_path: bool,

    /// Convention used for paths in the output
    #[arg(long, value_enum, default_value_t = PathStyle::Native)]
    path_style: PathStyle,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only list the N largest files (text and markdown output)
    #[arg(long)]
    top: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (logs to stderr)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::default()
        .with_max_depth(cli.max_depth)
        .with_limit(cli.limit);

    let root = if cli.windows_path {
        let converted = paths::windows_to_wsl(&cli.path);
        tracing::info!(input = %cli.path, converted = %converted, "translated windows path");
        PathBuf::from(converted)
    } else {
        PathBuf::from(&cli.path)
    };

    let output = OutputOptions {
        format: cli.format,
        path_style: cli.path_style,
        destination: cli.output,
        top: cli.top,
    };

    let found = App::new(root, settings, output).run().await?;
    if !found {
        std::process::exit(1);
    }
    Ok(())
}
