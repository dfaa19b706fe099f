//! Stepper component
//!
//! A multi-step wizard: a row of numbered step indicators joined by
//! connectors, the content of the active step, and Back / Next / Submit
//! buttons.
//!
//! ```text
//!   ━━━━━ 1 ━━━━━━━━━━ 2 ━━━━━━━━━━ 3 ━━━━━
//!         ✎            ◐            ✔
//!      Profile       Theme        Review
//!
//!   <content of the active step>
//!
//!                          [ Back ]  [ Next ]
//! ```

use super::button::{Button, ButtonKind};
use super::confirm_dialog::Callback;
use super::left_click;
use crate::error::WizardError;
use crate::navigation::{StepNavigator, StepStatus, Transition};
use crate::theme::{Theme, ThemedWidget};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub const DEFAULT_BACK_LABEL: &str = "Back";
pub const DEFAULT_NEXT_LABEL: &str = "Next";
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Rows used by the indicator strip: connectors, icon, label
const HEADER_HEIGHT: u16 = 3;
/// Widest a single indicator cell gets
const MAX_CELL_WIDTH: u16 = 20;
/// Narrowest cell that still fits a two-digit circle with connectors
const MIN_CELL_WIDTH: u16 = 7;
const CONNECTOR: &str = "━";

/// One page of a multi-step flow
pub struct Step {
    pub number: u32,
    pub label: Option<String>,
    pub icon: String,
    content: Box<dyn ThemedWidget>,
}

impl Step {
    pub fn new(number: u32, icon: impl Into<String>, content: impl ThemedWidget + 'static) -> Self {
        Self {
            number,
            label: None,
            icon: icon.into(),
            content: Box::new(content),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn content(&self) -> &dyn ThemedWidget {
        self.content.as_ref()
    }
}

/// Screen regions of a stepper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperLayout {
    /// One clickable cell per step; empty for steps scrolled out of view
    pub indicators: Vec<Rect>,
    pub content: Rect,
    /// `None` while buttons are disabled
    pub back: Option<Rect>,
    pub next: Option<Rect>,
}

/// Multi-step wizard with a bounded active step
pub struct Stepper {
    steps: Vec<Step>,
    navigator: StepNavigator,
    on_step_change: Option<Box<dyn FnMut(usize)>>,
    on_submit: Option<Callback>,
    back_label: String,
    next_label: String,
    submit_label: String,
    disable_buttons: bool,
    hovered: Option<usize>,
}

impl Stepper {
    /// Create a stepper on the first step; an empty list is rejected
    pub fn new(steps: Vec<Step>) -> Result<Self, WizardError> {
        let navigator = StepNavigator::new(steps.len(), 0)?;
        Ok(Self {
            steps,
            navigator,
            on_step_change: None,
            on_submit: None,
            back_label: DEFAULT_BACK_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            disable_buttons: false,
            hovered: None,
        })
    }

    /// Start on `index` instead of the first step
    pub fn active_step(mut self, index: usize) -> Result<Self, WizardError> {
        self.navigator = StepNavigator::new(self.steps.len(), index)?;
        Ok(self)
    }

    /// Called with the new index after every step change
    pub fn on_step_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_step_change = Some(Box::new(callback));
        self
    }

    /// Called when Next is pressed on the last step
    pub fn on_submit(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn back_label(mut self, label: impl Into<String>) -> Self {
        self.back_label = label.into();
        self
    }

    pub fn next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = label.into();
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Hide Back / Next and ignore their keys
    pub fn disable_buttons(mut self, disable: bool) -> Self {
        self.disable_buttons = disable;
        self
    }

    pub fn current_step(&self) -> usize {
        self.navigator.current()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn status(&self, index: usize) -> StepStatus {
        self.navigator.status(index)
    }

    /// Advance, or submit on the last step
    pub fn next(&mut self) -> Transition {
        let transition = self.navigator.next();
        self.notify(transition);
        transition
    }

    /// Go back one step; no-op on the first step
    pub fn back(&mut self) -> Transition {
        let transition = self.navigator.back();
        self.notify(transition);
        transition
    }

    /// Jump to any step
    pub fn select(&mut self, index: usize) -> Result<Transition, WizardError> {
        let transition = self.navigator.select(index)?;
        self.notify(transition);
        Ok(transition)
    }

    fn notify(&mut self, transition: Transition) {
        match transition {
            Transition::Moved { from, to } => {
                log::debug!("Step changed from {} to {}", from, to);
                if let Some(callback) = self.on_step_change.as_mut() {
                    callback(to);
                }
            }
            Transition::Submit => {
                log::info!("Stepper submitted on step {}", self.navigator.current());
                if let Some(callback) = self.on_submit.as_mut() {
                    callback();
                }
            }
            Transition::Unchanged => {}
        }
    }

    /// `→`/`Enter` next, `←`/`Backspace` back, `1`-`9` select
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') if !self.disable_buttons => {
                Some(self.next())
            }
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') if !self.disable_buttons => {
                Some(self.back())
            }
            KeyCode::Char(c) => {
                let digit = c.to_digit(10)? as usize;
                let index = digit.checked_sub(1)?;
                self.select(index).ok()
            }
            _ => None,
        }
    }

    /// Route clicks and pointer movement; `area` is where the stepper was drawn
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Option<Transition> {
        let layout = self.layout(area);

        if let MouseEventKind::Moved = mouse.kind {
            let position = Position::new(mouse.column, mouse.row);
            self.hovered = layout
                .indicators
                .iter()
                .position(|cell| cell.contains(position));
            return None;
        }

        let position = left_click(&mouse)?;
        if let Some(index) = layout
            .indicators
            .iter()
            .position(|cell| cell.contains(position))
        {
            return self.select(index).ok();
        }
        if layout.back.is_some_and(|rect| rect.contains(position)) && !self.navigator.is_first() {
            return Some(self.back());
        }
        if layout.next.is_some_and(|rect| rect.contains(position)) {
            return Some(self.next());
        }
        None
    }

    /// Regions of the stepper inside `area`
    pub fn layout(&self, area: Rect) -> StepperLayout {
        let button_rows = if self.disable_buttons { 0 } else { 1 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(button_rows),
            ])
            .split(area);

        // When not every step fits, show a window of cells around the active one
        let header = rows[0];
        let count = self.steps.len();
        let visible = usize::from(header.width / MIN_CELL_WIDTH).clamp(1, count);
        let first = self
            .navigator
            .current()
            .saturating_sub(visible / 2)
            .min(count - visible);
        let cell_width = (header.width / visible as u16).min(MAX_CELL_WIDTH);
        let start_x = header.x + (header.width - cell_width * visible as u16) / 2;
        let indicators = (0..count)
            .map(|i| {
                if (first..first + visible).contains(&i) {
                    let offset = (i - first) as u16 * cell_width;
                    Rect::new(start_x + offset, header.y, cell_width, header.height)
                } else {
                    Rect::new(header.x, header.y, 0, 0)
                }
            })
            .collect();

        let (back, next) = if self.disable_buttons {
            (None, None)
        } else {
            let (back, next) = self.buttons();
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(back.width()),
                    Constraint::Length(2),
                    Constraint::Length(next.width()),
                ])
                .split(rows[3]);
            (Some(chunks[1]), Some(chunks[3]))
        };

        StepperLayout {
            indicators,
            content: rows[2],
            back,
            next,
        }
    }

    fn buttons(&self) -> (Button<'_>, Button<'_>) {
        let next_label = if self.navigator.is_last() {
            &self.submit_label
        } else {
            &self.next_label
        };
        (
            Button::new(&self.back_label, ButtonKind::Secondary).disabled(self.navigator.is_first()),
            Button::new(next_label, ButtonKind::Primary),
        )
    }

    fn circle_color(&self, index: usize, theme: &Theme) -> Color {
        match self.navigator.status(index) {
            StepStatus::Active => theme.brand_stroke,
            StepStatus::Done => theme.done,
            StepStatus::Upcoming if self.hovered == Some(index) => theme.brand_stroke_hover,
            StepStatus::Upcoming => theme.neutral,
        }
    }

    fn connector_color(&self, index: usize, theme: &Theme) -> Color {
        if self.navigator.connector_filled(index) {
            theme.done
        } else {
            theme.neutral
        }
    }

    fn render_indicator(&self, index: usize, cell: Rect, buf: &mut Buffer, theme: &Theme) {
        let step = &self.steps[index];
        let current = self.navigator.current();

        let circle = format!(" {} ", step.number);
        let circle_width = Span::raw(circle.as_str()).width() as u16;
        let left = cell.width.saturating_sub(circle_width) / 2;
        let right = cell.width.saturating_sub(circle_width + left);

        let mut spans = Vec::with_capacity(3);
        if index > 0 {
            spans.push(Span::styled(
                CONNECTOR.repeat(left as usize),
                Style::default().fg(self.connector_color(index, theme)),
            ));
        } else {
            spans.push(Span::raw(" ".repeat(left as usize)));
        }
        spans.push(Span::styled(
            circle,
            Style::default()
                .fg(theme.on_brand)
                .bg(self.circle_color(index, theme))
                .add_modifier(Modifier::BOLD),
        ));
        if index + 1 < self.steps.len() {
            spans.push(Span::styled(
                CONNECTOR.repeat(right as usize),
                Style::default().fg(self.connector_color(index + 1, theme)),
            ));
        }
        Line::from(spans).render(row(cell, 0), buf);

        let icon_color = if index <= current {
            theme.emphasis
        } else {
            theme.neutral
        };
        Line::styled(step.icon.as_str(), Style::default().fg(icon_color))
            .alignment(Alignment::Center)
            .render(row(cell, 1), buf);

        if let Some(label) = &step.label {
            let style = if index == current {
                Style::default()
                    .fg(theme.emphasis)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.neutral)
            };
            Line::styled(label.as_str(), style)
                .alignment(Alignment::Center)
                .render(row(cell, 2), buf);
        }
    }
}

/// Single row `offset` rows into `cell`, empty when it falls outside
fn row(cell: Rect, offset: u16) -> Rect {
    if offset >= cell.height {
        return Rect::new(cell.x, cell.y, cell.width, 0);
    }
    Rect::new(cell.x, cell.y + offset, cell.width, 1)
}

impl ThemedWidget for Stepper {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = self.layout(area);

        for (index, cell) in layout.indicators.iter().enumerate() {
            if !cell.is_empty() {
                self.render_indicator(index, *cell, buf, theme);
            }
        }

        self.steps[self.navigator.current()]
            .content
            .render_themed(layout.content, buf, theme);

        if let (Some(back_area), Some(next_area)) = (layout.back, layout.next) {
            let (back, next) = self.buttons();
            back.render_themed(back_area, buf, theme);
            next.render_themed(next_area, buf, theme);
        }
    }
}

impl Widget for &Stepper {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_themed(area, buf, &Theme::default());
    }
}
