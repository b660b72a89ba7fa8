use clap::Parser;
use anyhow::Result;

use diffdesk::{
    cli::Cli,
    config::DiffDeskConfig,
    core::AppState,
    ui::{restore_terminal, setup_terminal, TuiApp},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    cli.setup_logging()?;

    let mut config = DiffDeskConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env();
    cli.apply_overrides(&mut config);

    if let Err(err) = config.validate() {
        eprintln!("Error: invalid configuration: {}", err);
        std::process::exit(1);
    }

    let (original, modified) = cli.read_inputs()?;
    tracing::info!(
        algorithm = %config.diff.algorithm,
        view = %config.ui.view_mode,
        granularity = %config.diff.granularity,
        "Starting DiffDesk"
    );

    let state = AppState::with_config(&config).with_texts(&original, &modified);
    run_tui(state, &config)
}

fn run_tui(state: AppState, config: &DiffDeskConfig) -> Result<()> {
    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Create TUI app
    let app = TuiApp::new(state, config);

    // Run the application
    let res = app.run(&mut terminal);

    // Restore terminal
    if let Err(err) = restore_terminal(&mut terminal) {
        eprintln!("Failed to restore terminal: {}", err);
    }

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
