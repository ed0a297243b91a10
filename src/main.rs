mod config;
mod todo;
mod tui;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "todo-reactive")]
#[command(about = "A terminal to-do list with live remaining-item stats")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key ('title' or 'log_level')")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, value)?;
            let path = config.save()?;
            println!("Configuration saved to {}.", path.display());
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load().context("Configuration error")?;
    let logging_problems = init_tracing(&config);

    info!(title = %config.title, "starting todo list");
    let mut app = App::new(config.title);

    let result = run_tui(&mut app);

    // The TUI owns the screen until here, so report logging problems now.
    for problem in &logging_problems {
        eprintln!("Warning: {}", problem);
    }
    result?;

    info!(
        total = app.total_items(),
        completed = app.completed_items(),
        remaining = app.todo_list.remaining(),
        "exiting"
    );
    Ok(())
}

/// Installs the file logger. Returns the problems that could not be logged
/// because no log file was available.
fn init_tracing(config: &Config) -> Vec<String> {
    let mut init_warnings = Vec::new();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config.env_filter().unwrap_or_else(|e| {
            init_warnings.push(e.to_string());
            EnvFilter::new("info")
        })
    });

    match open_log_file() {
        Ok((log_path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();

            info!(path = %log_path.display(), "logging initialized");
            for warning in init_warnings {
                warn!("{warning}");
            }
            Vec::new()
        }
        // Writing to stderr would corrupt the TUI, so go without logs.
        Err(e) => {
            tracing_subscriber::registry().with(env_filter).init();
            init_warnings.insert(0, format!("logging disabled: {:#}", e));
            init_warnings
        }
    }
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let log_dir = dirs::data_local_dir()
        .context("Could not find local data directory")?
        .join("todo-reactive");
    open_log_file_in(&log_dir)
}

fn open_log_file_in(log_dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;

    let log_path = log_dir.join("todo.log");
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    Ok((log_path, file))
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_or_restore(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Runs `setup`, undoing earlier terminal changes with `restore` if it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
