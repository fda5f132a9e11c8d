mod api;
mod app;
mod cli;
mod config;
mod domain;
mod event;
mod stats;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    init_tracing(args.headless, args.debug);

    // Initialize application state
    let config = config::init_app_config();
    let actions = app::actions::AppActions::new(config);
    let mut app = App::new(actions);

    // Run in headless mode when asked to, or when stdout is not a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

fn init_tracing(headless: bool, debug: bool) {
    use tracing_subscriber::EnvFilter;

    // TUI frames and stderr logs fight over the same screen, so the
    // interactive default stays quiet
    let default_level = if debug {
        "debug"
    } else if headless {
        "info"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
