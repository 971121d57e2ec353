use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, bail};
use crossterm::event::{self, Event};

mod commands;
mod constants;
mod domain;
mod format;
mod memo;
mod pricing;
mod render;
mod selector;
mod source;
mod state;
mod telemetry;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    constants::TICK_RATE,
    domain::WalletError,
    state::{App, AppConfig, DataState, PageRows, StartupOptions},
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// wallet-page - filter, rank and display wallet balances in the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Balance file (JSON array of {currency, blockchain, amount})
    #[arg(long, global = true, value_name = "PATH")]
    balances: Option<PathBuf>,

    /// Price file (JSON object or array of {currency, price})
    #[arg(long, global = true, value_name = "PATH")]
    prices: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the balance table as plain text
    Print,
    /// Print the balance rows as JSON
    Rows,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Display version information
    Version,
}

impl Cli {
    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            balances_path: self.balances.clone(),
            prices_path: self.prices.clone(),
            config_path: self.config.clone(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        telemetry::init_file_logging(path)?;
    }

    match &cli.command {
        Some(command) => run_command(&cli, command),
        None => run_tui(cli.startup_options()),
    }
}

fn run_command(cli: &Cli, command: &Commands) -> Result<()> {
    match command {
        Commands::Print => {
            let page = load_page(&cli.startup_options())?;
            if page.rendered.is_empty() {
                println!("No balances to display");
            } else {
                println!("{}", render::plain_table(&page.rendered));
            }
        }
        Commands::Rows => {
            let page = load_page(&cli.startup_options())?;
            println!("{}", serde_json::to_string_pretty(&page.rows)?);
        }
        Commands::InitConfig { force } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => AppConfig::config_path()?,
            };
            if path.exists() && !force {
                bail!(
                    "{} already exists, pass --force to overwrite",
                    path.display()
                );
            }
            AppConfig::default().save_to(&path)?;
            println!("Wrote {}", path.display());
        }
        Commands::Version => {
            println!("wallet-page v{VERSION}");
            println!("Filter, rank and display wallet balances in the terminal");
        }
    }
    Ok(())
}

/// Loads inputs strictly: a missing balances path or any unreadable file is
/// an error.
fn load_page(options: &StartupOptions) -> Result<PageRows> {
    let config = AppConfig::load(options.config_path.as_deref());
    let sources = options.sources(&config);
    if sources.balances_path.is_none() {
        return Err(WalletError::invalid_input(
            "no balances file given, pass --balances or set balances_path in the config",
        )
        .into());
    }
    let mut data = DataState::from_config(&config);
    data.load(&sources)
        .wrap_err("Failed to load wallet data")?;
    Ok(data.build_page())
}

fn run_tui(options: StartupOptions) -> Result<()> {
    let mut app = App::new(options);
    let mut terminal = tui::init()?;
    let result = run_app(&mut terminal, &mut app);
    tui::restore()?;
    result
}

/// Main application loop.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        // Resize events need no handling beyond the redraw.
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempFile;

    #[test]
    fn test_cli_parses_paths_and_command() {
        let cli = Cli::try_parse_from([
            "wallet-page",
            "--balances",
            "b.json",
            "print",
            "--prices",
            "p.json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Print)));
        let options = cli.startup_options();
        assert_eq!(options.balances_path, Some(PathBuf::from("b.json")));
        assert_eq!(options.prices_path, Some(PathBuf::from("p.json")));
        assert_eq!(options.config_path, None);
    }

    #[test]
    fn test_load_page_propagates_missing_file() {
        let config = TempFile::reserve("config.json");
        let options = StartupOptions {
            balances_path: Some(PathBuf::from("/nonexistent/balances.json")),
            prices_path: None,
            config_path: Some(config.path().to_path_buf()),
        };

        let err = load_page(&options).unwrap_err();
        assert!(format!("{err:?}").contains("/nonexistent/balances.json"));
    }

    #[test]
    fn test_load_page_requires_balances_path() {
        let config = TempFile::reserve("config.json");
        let options = StartupOptions {
            config_path: Some(config.path().to_path_buf()),
            ..StartupOptions::default()
        };

        let err = load_page(&options).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WalletError>(),
            Some(WalletError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let config = TempFile::with_content("config.json", "{}");
        let cli = Cli::try_parse_from([
            "wallet-page",
            "--config",
            config.path().to_str().unwrap(),
            "init-config",
        ])
        .unwrap();
        let command = cli.command.as_ref().unwrap();

        assert!(run_command(&cli, command).is_err());
        assert_eq!(std::fs::read_to_string(config.path()).unwrap(), "{}");
    }
}
