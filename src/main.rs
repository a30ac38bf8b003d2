use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rally_pong::{app, config, logging};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    debug: bool,
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    // Before the config so parse warnings end up in the log
    if let Some(path) = logging::init(options.debug)? {
        eprintln!("Debug log: {}", path.display());
    }

    let config = config::load_config(options.config_path.as_deref())
        .context("failed to load configuration")?;
    tracing::info!(difficulty = %config.ai.difficulty, "configuration loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run_app(&mut terminal, &config);

    // Restore terminal even if the game loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> Options {
    let program = args.first().map(String::as_str).unwrap_or("rally-pong");
    let mut options = Options::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--config" | "-c" => match rest.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config requires a path");
                    print_usage(program);
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(program);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(program);
                std::process::exit(1);
            }
        }
    }

    options
}

fn print_usage(program: &str) {
    println!("Rally Pong - terminal Pong against the computer");
    println!();
    println!("Usage:");
    println!("  {} [--debug] [--config <path>]", program);
    println!();
    println!("Options:");
    println!("  -d, --debug          Write a debug log to the temp directory");
    println!("  -c, --config <path>  Use this config file instead of the default");
    println!("  -h, --help           Show this message");
    println!();
    println!("Default config: {}", config::get_config_path().display());
    println!();
    println!("Controls:");
    println!("  Mouse or W/S, arrow keys  Move your paddle");
    println!("  R                         Restart after a match");
    println!("  M                         Back to the menu");
    println!("  Q / Esc                   Quit");
}
