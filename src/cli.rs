use crate::components::confirm_dialog::{
    DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL, DEFAULT_MESSAGE, DEFAULT_TITLE,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wizard-tui - Terminal stepper, confirmation dialog and theme demos
#[derive(Parser)]
#[command(name = "wizard-tui")]
#[command(about = "Multi-step wizard and confirmation dialog components for the terminal")]
#[command(version)]
pub struct Cli {
    /// Theme file (JSON) applied to the interactive demos
    #[arg(long, global = true)]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive three-step wizard
    Wizard {
        /// Index of the step shown first (0-based)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Hide the Back / Next buttons
        #[arg(long)]
        no_buttons: bool,
    },
    /// Show a single confirmation dialog
    Dialog {
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        #[arg(long, default_value = DEFAULT_MESSAGE)]
        message: String,

        #[arg(long, default_value = DEFAULT_CONFIRM_LABEL)]
        confirm_label: String,

        #[arg(long, default_value = DEFAULT_CANCEL_LABEL)]
        cancel_label: String,

        /// Render the confirm button disabled
        #[arg(long)]
        confirm_disabled: bool,
    },
    /// Inspect theme files
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the effective theme as JSON
    Dump {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a theme file
    Validate {
        /// Path to the theme file to validate
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
