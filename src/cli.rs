use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use anyhow::{Context, Result};
use clap::Parser;
use crate::config::DiffDeskConfig;
use crate::core::ViewMode;
use crate::diff::{DiffAlgorithmType, Granularity};

#[derive(Parser, Debug)]
#[command(name = "diffdesk")]
#[command(version)]
#[command(about = "Compare two texts side by side in the terminal")]
#[command(long_about = "DiffDesk shows two editable text panes and renders their differences live, as an inline character or line diff, a side-by-side split, or a split with removed and added lines paired row by row.")]
pub struct Cli {
    /// File whose contents seed the Original pane
    #[arg(value_name = "LEFT", help = "Seed the Original pane from this file")]
    pub left: Option<PathBuf>,

    /// File whose contents seed the Modified pane
    #[arg(value_name = "RIGHT", help = "Seed the Modified pane from this file")]
    pub right: Option<PathBuf>,

    /// Initial view mode
    #[arg(long, help = "Initial view mode")]
    pub view: Option<ViewMode>,

    /// Initial inline granularity
    #[arg(short, long, help = "Initial granularity of the inline view")]
    pub granularity: Option<Granularity>,

    /// Diff algorithm
    #[arg(short, long, help = "Diff algorithm")]
    pub algorithm: Option<DiffAlgorithmType>,

    /// Configuration file
    #[arg(short, long, value_name = "PATH", help = "Read configuration from this TOML file")]
    pub config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn setup_logging(&self) -> Result<()> {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        match &self.log_file {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create log file {}", path.display()))?;
                tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .init();
            }
            // The terminal belongs to the UI, keep stderr quiet
            None => {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::WARN)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .init();
            }
        }

        Ok(())
    }

    /// Layer command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut DiffDeskConfig) {
        if let Some(view) = self.view {
            config.ui.view_mode = view;
        }
        if let Some(granularity) = self.granularity {
            config.diff.granularity = granularity;
        }
        if let Some(algorithm) = self.algorithm {
            config.diff.algorithm = algorithm;
        }
    }

    /// Read the seed texts for both panes; a missing path yields ""
    pub fn read_inputs(&self) -> Result<(String, String)> {
        Ok((read_seed(self.left.as_deref())?, read_seed(self.right.as_deref())?))
    }

    pub fn validate(&self) -> Result<(), String> {
        for path in [&self.left, &self.right].into_iter().flatten() {
            if !path.exists() {
                return Err(format!("Path does not exist: {}", path.display()));
            }

            if !path.is_file() {
                return Err(format!("Path is not a file: {}", path.display()));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("Config file not found: {}", config.display()));
            }
        }

        Ok(())
    }
}

fn read_seed(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}
