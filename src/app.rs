//! Demo host application and main event loop
//!
//! Hosts the components the way an application would: it owns the dialog's
//! open flag, reacts to what the components report, and drives rendering.

use crate::components::confirm_dialog::{self, ConfirmDialog, DialogAction};
use crate::components::stepper::{Step, Stepper};
use crate::error::WizardError;
use crate::navigation::Transition;
use crate::theme::{color_to_string, with_theme, Theme, ThemeProvider, ThemeToken, ThemedWidget};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::time::Duration;
use strum::IntoEnumIterator;

/// How a demo run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The wizard was submitted and the submission confirmed
    Submitted,
    /// The standalone dialog was confirmed
    Confirmed,
    /// The standalone dialog was cancelled
    Cancelled,
    /// The user quit
    Quit,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Stepper with a submit confirmation
    Wizard,
    /// A single confirmation dialog
    Dialog,
}

/// What the wizard's dialog is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogPurpose {
    Submit,
    Quit,
}

/// Main application struct
pub struct App {
    mode: AppMode,
    theme: Theme,
    stepper: Option<ThemeProvider<Stepper>>,
    dialog: ConfirmDialog,
    purpose: DialogPurpose,
    status_message: String,
    last_area: Rect,
    outcome: Option<Outcome>,
}

impl App {
    /// Wizard demo starting on step `start`
    pub fn wizard(theme: Theme, start: usize, no_buttons: bool) -> Result<Self, WizardError> {
        let stepper = Stepper::new(demo_steps(&theme))?
            .active_step(start)?
            .disable_buttons(no_buttons)
            .on_step_change(|index| log::info!("Now on step {}", index + 1));

        Ok(Self {
            mode: AppMode::Wizard,
            theme,
            stepper: Some(with_theme(stepper).theme(theme)),
            dialog: confirm_dialog::submit_confirm(),
            purpose: DialogPurpose::Submit,
            status_message: "←/→ navigate · 1-9 jump · q quit".to_string(),
            last_area: Rect::default(),
            outcome: None,
        })
    }

    /// Standalone dialog demo; the dialog starts open
    pub fn dialog(theme: Theme, dialog: ConfirmDialog) -> Self {
        Self {
            mode: AppMode::Dialog,
            theme,
            stepper: None,
            dialog: dialog.open(true),
            purpose: DialogPurpose::Submit,
            status_message: "Enter/y confirm · Esc/n cancel".to_string(),
            last_area: Rect::default(),
            outcome: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn current_dialog(&self) -> &ConfirmDialog {
        &self.dialog
    }

    pub fn stepper(&self) -> Option<&Stepper> {
        self.stepper.as_deref()
    }

    /// Run the main application loop until an outcome is reached
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Outcome> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Some(outcome) = self.outcome {
                log::info!("Demo finished: {:?}", outcome);
                return Ok(outcome);
            }

            if crossterm::event::poll(Duration::from_millis(100))? {
                self.handle_event(crossterm::event::read()?);
            }
        }
    }

    /// Feed one terminal event to the focused component
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c {
            self.outcome = Some(Outcome::Quit);
            return;
        }
        if key.code == KeyCode::Char('q') && !self.dialog.is_open() {
            match self.mode {
                AppMode::Wizard => self.open_dialog(DialogPurpose::Quit),
                AppMode::Dialog => self.outcome = Some(Outcome::Quit),
            }
            return;
        }

        if self.dialog.is_open() {
            let action = self.dialog.handle_key_event(key);
            self.apply_dialog_action(action);
        } else if let Some(stepper) = self.stepper.as_mut() {
            let transition = stepper.handle_key_event(key);
            self.apply_transition(transition);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (body, _) = split(self.last_area);
        if self.dialog.is_open() {
            let action = self.dialog.handle_mouse_event(mouse, body);
            self.apply_dialog_action(action);
        } else if let Some(stepper) = self.stepper.as_mut() {
            let transition = stepper.handle_mouse_event(mouse, body);
            self.apply_transition(transition);
        }
    }

    fn apply_transition(&mut self, transition: Option<Transition>) {
        match transition {
            Some(Transition::Submit) => self.open_dialog(DialogPurpose::Submit),
            Some(Transition::Moved { to, .. }) => {
                self.status_message = format!("Step {} selected", to + 1);
            }
            _ => {}
        }
    }

    /// Swap in the preset for `purpose` and show it
    fn open_dialog(&mut self, purpose: DialogPurpose) {
        let (dialog, status) = match purpose {
            DialogPurpose::Submit => (confirm_dialog::submit_confirm(), "Confirm submission"),
            DialogPurpose::Quit => (confirm_dialog::quit_confirm(), "Confirm quit"),
        };
        self.dialog = dialog.open(true);
        self.purpose = purpose;
        self.status_message = status.to_string();
    }

    fn apply_dialog_action(&mut self, action: Option<DialogAction>) {
        match (self.mode, action) {
            (AppMode::Wizard, Some(DialogAction::Confirm)) => {
                self.outcome = Some(match self.purpose {
                    DialogPurpose::Submit => Outcome::Submitted,
                    DialogPurpose::Quit => Outcome::Quit,
                });
            }
            (AppMode::Wizard, Some(DialogAction::Close)) => {
                self.dialog.set_open(false);
                self.status_message = match self.purpose {
                    DialogPurpose::Submit => "Submission cancelled",
                    DialogPurpose::Quit => "Back to the wizard",
                }
                .to_string();
            }
            (AppMode::Dialog, Some(DialogAction::Confirm)) => {
                self.outcome = Some(Outcome::Confirmed);
            }
            (AppMode::Dialog, Some(DialogAction::Close)) => {
                self.outcome = Some(Outcome::Cancelled);
            }
            (_, None) => {}
        }
    }

    /// Render the stepper, the dialog above it and the status line
    pub fn draw(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let (body, status) = split(self.last_area);

        f.buffer_mut().set_style(self.last_area, self.theme.base_style());
        if let Some(stepper) = self.stepper.as_ref() {
            f.render_widget(stepper, body);
        }
        self.dialog.render_themed(body, f.buffer_mut(), &self.theme);

        let status_line = Paragraph::new(self.status_message.as_str())
            .style(Style::default().fg(self.theme.neutral));
        f.render_widget(status_line, status);
    }
}

/// Body and one-line status bar
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Steps shown by the wizard demo
fn demo_steps(theme: &Theme) -> Vec<Step> {
    let palette: Vec<Line<'static>> = ThemeToken::iter()
        .map(|token| {
            let name: &str = token.as_ref();
            Line::from(vec![
                Span::styled("■■ ", Style::default().fg(theme.get(token))),
                Span::raw(format!("{:<20}{}", name, color_to_string(theme.get(token)))),
            ])
        })
        .collect();

    vec![
        Step::new(
            1,
            "✎",
            Text::from(vec![
                Line::from("Tell us who you are."),
                Line::from(""),
                Line::from("This page stands in for a host form."),
            ]),
        )
        .label("Profile"),
        Step::new(2, "◐", Text::from(palette)).label("Theme"),
        Step::new(
            3,
            "✔",
            Text::from(vec![
                Line::from("Everything is ready."),
                Line::from(""),
                Line::from("Press Submit to finish."),
            ]),
        )
        .label("Review"),
    ]
}
