//! Error handling module for wizard-tui
//!
//! Provides the crate error type. Only component construction and theme
//! parsing can fail; rendering and event handling are infallible.

use thiserror::Error;

/// Main error type for wizard-tui
#[derive(Debug, Error)]
pub enum WizardError {
    /// A stepper was built without any steps
    #[error("Stepper requires at least one step")]
    EmptySteps,
    /// A step index outside `0..len`
    #[error("Step index {index} is out of range for {len} steps")]
    StepOutOfRange { index: usize, len: usize },
    /// A theme token value that is not a colour
    #[error("Invalid color '{value}' for theme token '{token}'")]
    InvalidColor { token: String, value: String },
}
