//! wizard-tui Library
//!
//! Presentational terminal components built on ratatui: a multi-step
//! stepper, a confirmation dialog, and a theme provider that cascades
//! colour tokens to whatever it wraps.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod navigation;
pub mod theme;

// Re-export main types for convenience
pub use components::confirm_dialog::{ConfirmDialog, DialogAction};
pub use components::stepper::{Step, Stepper};
pub use config_file::ThemeFile;
pub use error::WizardError;
pub use navigation::{StepNavigator, StepStatus, Transition};
pub use theme::{with_theme, Theme, ThemeProvider, ThemeToken, ThemedWidget};
