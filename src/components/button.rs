//! Push button shared by the dialog and the stepper

use crate::theme::{Theme, ThemedWidget};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Accent filled
    Primary,
    /// Plain text on the background
    Secondary,
}

/// A single-line `[ label ]` button
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    disabled: bool,
    style: Option<Style>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            disabled: false,
            style: None,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the theme-derived style
    pub fn style(mut self, style: Option<Style>) -> Self {
        self.style = style;
        self
    }

    /// Columns the button occupies
    pub fn width(&self) -> u16 {
        let label_width = Span::raw(self.label).width().min(usize::from(u16::MAX)) as u16;
        label_width.saturating_add(4)
    }

    fn resolved_style(&self, theme: &Theme) -> Style {
        if self.disabled {
            return Style::default().fg(theme.neutral).bg(theme.background);
        }
        if let Some(style) = self.style {
            return style.add_modifier(Modifier::BOLD);
        }
        match self.kind {
            ButtonKind::Primary => theme.primary_style().add_modifier(Modifier::BOLD),
            ButtonKind::Secondary => Style::default().fg(theme.foreground).bg(theme.background),
        }
    }
}

impl ThemedWidget for Button<'_> {
    fn render_themed(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        Paragraph::new(format!("[ {} ]", self.label))
            .style(self.resolved_style(theme))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_width_includes_brackets() {
        assert_eq!(Button::new("Next", ButtonKind::Primary).width(), 8);
    }

    #[test]
    fn test_width_saturates_for_huge_labels() {
        let label = "x".repeat(70_000);
        assert_eq!(Button::new(&label, ButtonKind::Secondary).width(), u16::MAX);
    }

    #[test]
    fn test_primary_uses_brand() {
        let theme = Theme::branded();
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Next", ButtonKind::Primary).render_themed(area, &mut buf, &theme);
        assert_eq!(buf[(2, 0)].symbol(), "N");
        assert_eq!(buf[(2, 0)].bg, theme.brand_stroke);
        assert_eq!(buf[(2, 0)].fg, theme.on_brand);
    }

    #[test]
    fn test_disabled_ignores_override() {
        let theme = Theme::branded();
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Next", ButtonKind::Primary)
            .style(Some(Style::default().bg(Color::Red)))
            .disabled(true)
            .render_themed(area, &mut buf, &theme);
        assert_eq!(buf[(2, 0)].fg, theme.neutral);
        assert_eq!(buf[(2, 0)].bg, theme.background);
    }
}
