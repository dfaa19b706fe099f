//! Confirmation dialog component
//!
//! A modal with a title, a message and Cancel / Confirm buttons. The dialog
//! keeps no state of its own: the host owns the open flag and every render
//! is a function of the current props.

use super::button::{Button, ButtonKind};
use super::{centered_rect, left_click};
use crate::theme::{Theme, ThemedWidget};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub const DEFAULT_TITLE: &str = "Confirm Action";
pub const DEFAULT_MESSAGE: &str = "Are you sure you want to proceed?";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 9;

/// Host callback with no arguments
pub type Callback = Box<dyn FnMut()>;

/// What a handled event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Close,
}

/// Screen regions of an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub surface: Rect,
    pub message: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
}

/// Modal confirm / cancel dialog
pub struct ConfirmDialog {
    open: bool,
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    confirm_style: Option<Style>,
    confirm_disabled: bool,
    on_close: Option<Callback>,
    on_confirm: Option<Callback>,
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self {
            open: false,
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            confirm_style: None,
            confirm_disabled: false,
            on_close: None,
            on_confirm: None,
        }
    }
}

impl ConfirmDialog {
    /// Create a closed dialog with the default labels
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Style for the confirm button instead of the theme accent
    pub fn confirm_style(mut self, style: Style) -> Self {
        self.confirm_style = Some(style);
        self
    }

    pub fn confirm_disabled(mut self, disabled: bool) -> Self {
        self.confirm_disabled = disabled;
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_confirm(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    /// Update the host-owned open flag
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn set_confirm_disabled(&mut self, disabled: bool) {
        self.confirm_disabled = disabled;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_confirm_disabled(&self) -> bool {
        self.confirm_disabled
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// Invoke `on_confirm` unless the dialog is closed or confirm is disabled
    pub fn confirm(&mut self) -> Option<DialogAction> {
        if !self.open {
            return None;
        }
        if self.confirm_disabled {
            log::debug!("Ignoring confirm on '{}': confirm is disabled", self.title);
            return None;
        }
        log::debug!("Dialog '{}' confirmed", self.title);
        if let Some(callback) = self.on_confirm.as_mut() {
            callback();
        }
        Some(DialogAction::Confirm)
    }

    /// Invoke `on_close` unless the dialog is closed
    pub fn cancel(&mut self) -> Option<DialogAction> {
        if !self.open {
            return None;
        }
        log::debug!("Dialog '{}' cancelled", self.title);
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
        Some(DialogAction::Close)
    }

    /// `Enter`/`y` confirm, `Esc`/`n` cancel
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<DialogAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm(),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => self.cancel(),
            _ => None,
        }
    }

    /// Route a click on one of the buttons; `area` is where the dialog was drawn
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Option<DialogAction> {
        let position = left_click(&mouse)?;
        let layout = self.layout(area)?;
        if layout.confirm.contains(position) {
            self.confirm()
        } else if layout.cancel.contains(position) {
            self.cancel()
        } else {
            None
        }
    }

    /// Regions of the dialog inside `area`; `None` while closed
    pub fn layout(&self, area: Rect) -> Option<DialogLayout> {
        if !self.open {
            return None;
        }

        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
        let height = DIALOG_HEIGHT.min(area.height.saturating_sub(2));
        let surface = centered_rect(area, width, height);
        let inner = Block::default().borders(Borders::ALL).inner(surface);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        let (cancel, confirm) = self.buttons();
        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(cancel.width()),
                Constraint::Length(2),
                Constraint::Length(confirm.width()),
            ])
            .split(chunks[1]);

        Some(DialogLayout {
            surface,
            message: chunks[0],
            cancel: button_chunks[1],
            confirm: button_chunks[3],
        })
    }

    fn buttons(&self) -> (Button<'_>, Button<'_>) {
        let cancel = Button::new(&self.cancel_label, ButtonKind::Secondary);
        let confirm = Button::new(&self.confirm_label, ButtonKind::Primary)
            .style(self.confirm_style)
            .disabled(self.confirm_disabled);
        (cancel, confirm)
    }
}

impl ThemedWidget for ConfirmDialog {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let Some(layout) = self.layout(area) else {
            return;
        };

        Clear.render(layout.surface, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(theme.brand_stroke))
            .style(theme.base_style());
        block.render(layout.surface, buf);

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(theme.foreground))
            .wrap(Wrap { trim: true })
            .render(layout.message, buf);

        let (cancel, confirm) = self.buttons();
        cancel.render_themed(layout.cancel, buf, theme);
        confirm.render_themed(layout.confirm, buf, theme);
    }
}

impl Widget for &ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}

/// Dialog asking whether to submit a finished wizard
pub fn submit_confirm() -> ConfirmDialog {
    ConfirmDialog::new()
        .title("Submit")
        .message("All steps are complete. Submit now?")
        .confirm_label("Submit")
}

/// Dialog asking whether to leave without submitting
pub fn quit_confirm() -> ConfirmDialog {
    ConfirmDialog::new()
        .title("Quit")
        .message("Leave without submitting? Your answers will be lost.")
        .confirm_label("Quit")
}
