//! wizard-tui - Main entry point
//!
//! Hosts the stepper and confirmation dialog in the terminal, and inspects
//! theme files.

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;

use wizard_tui::app::{App, Outcome};
use wizard_tui::cli::{Cli, Commands, ThemeCommands};
use wizard_tui::{ConfirmDialog, Theme, ThemeFile};

/// Main application entry point
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();
    let theme = load_theme(cli.theme.as_deref())?;

    match cli.command {
        Some(Commands::Theme { action }) => run_theme_command(action, &theme),
        Some(Commands::Dialog {
            title,
            message,
            confirm_label,
            cancel_label,
            confirm_disabled,
        }) => {
            let dialog = ConfirmDialog::new()
                .title(title)
                .message(message)
                .confirm_label(confirm_label)
                .cancel_label(cancel_label)
                .confirm_disabled(confirm_disabled);
            run_tui(App::dialog(theme, dialog))
        }
        Some(Commands::Wizard { start, no_buttons }) => {
            run_tui(App::wizard(theme, start, no_buttons)?)
        }
        None => run_tui(App::wizard(theme, 0, false)?),
    }
}

/// Theme from `--theme`, or the branded default
fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => {
            let theme = ThemeFile::load_from_file(path)?
                .to_theme()
                .with_context(|| format!("Invalid theme file {}", path.display()))?;
            log::info!("Loaded theme from {}", path.display());
            Ok(theme)
        }
        None => Ok(Theme::default()),
    }
}

fn run_theme_command(action: ThemeCommands, theme: &Theme) -> Result<()> {
    match action {
        ThemeCommands::Dump { output } => {
            let file = ThemeFile::from_theme(theme);
            match output {
                Some(path) => {
                    file.save_to_file(&path)?;
                    println!("✓ Theme written to {}", path.display());
                }
                None => println!("{}", file.to_json()?),
            }
        }
        ThemeCommands::Validate { path } => {
            match ThemeFile::load_from_file(&path).and_then(|file| file.validate()) {
                Ok(()) => println!("✓ Theme file is valid: {}", path.display()),
                Err(e) => {
                    eprintln!("✗ Theme validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

/// Run an interactive demo in the alternate screen
fn run_tui(mut app: App) -> Result<()> {
    // Initialize terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| app.run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);

    match result? {
        Outcome::Submitted => println!("✓ Wizard submitted"),
        Outcome::Confirmed => println!("✓ Confirmed"),
        Outcome::Cancelled => println!("✗ Cancelled"),
        Outcome::Quit => {}
    }
    Ok(())
}
