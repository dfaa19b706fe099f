//! UI Components module
//!
//! This module contains the reusable components: a push button, the
//! confirmation dialog and the stepper.

pub mod button;
pub mod confirm_dialog;
pub mod stepper;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Center a `width` x `height` box inside `area`, shrinking it to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Position of a left-button press, if `mouse` is one
pub fn left_click(mouse: &MouseEvent) -> Option<Position> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Position::new(mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(area, 60, 10), area);
    }

    #[test]
    fn test_left_click_only() {
        let mut mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(left_click(&mouse), Some(Position::new(3, 4)));
        mouse.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(left_click(&mouse), None);
    }
}
