// Integration tests for wizard-tui

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wizard_tui::{
    with_theme, ConfirmDialog, DialogAction, Step, Stepper, Theme, ThemeFile, ThemeProvider,
    Transition, WizardError,
};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 72,
    height: 16,
};

fn steps(count: u32) -> Vec<Step> {
    (1..=count)
        .map(|n| Step::new(n, "•", format!("Page {}", n)).label(format!("Step {}", n)))
        .collect()
}

fn screen(buf: &Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}

fn left_click(rect: Rect) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_abc_wizard_scenario() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let submits = Rc::new(Cell::new(0u32));
    let (c, s) = (changes.clone(), submits.clone());

    let mut stepper = Stepper::new(steps(3))
        .unwrap()
        .active_step(0)
        .unwrap()
        .on_step_change(move |i| c.borrow_mut().push(i))
        .on_submit(move || s.set(s.get() + 1));

    let mut transitions = Vec::new();
    for _ in 0..3 {
        // Next turns into the wider Submit on the last step
        let next = stepper.layout(AREA).next.unwrap();
        transitions.push(stepper.handle_mouse_event(left_click(next), AREA));
    }

    assert_eq!(
        transitions,
        vec![
            Some(Transition::Moved { from: 0, to: 1 }),
            Some(Transition::Moved { from: 1, to: 2 }),
            Some(Transition::Submit),
        ]
    );
    assert_eq!(*changes.borrow(), vec![1, 2]);
    assert_eq!(submits.get(), 1);
}

#[test]
fn test_next_never_passes_last_step() {
    for count in 1..=6 {
        for start in 0..count as usize {
            let submits = Rc::new(Cell::new(0u32));
            let s = submits.clone();
            let mut stepper = Stepper::new(steps(count))
                .unwrap()
                .active_step(start)
                .unwrap()
                .on_submit(move || s.set(s.get() + 1));
            for _ in start..count as usize {
                stepper.next();
            }
            assert_eq!(stepper.current_step(), count as usize - 1);
            assert_eq!(submits.get(), 1);
        }
    }
}

#[test]
fn test_empty_wizard_is_rejected() {
    assert!(matches!(Stepper::new(Vec::new()), Err(WizardError::EmptySteps)));
}

#[test]
fn test_themed_stepper_passes_through() {
    let mut themed = with_theme(Stepper::new(steps(4)).unwrap());
    themed.select(3).unwrap();
    assert_eq!(themed.current_step(), 3);
    assert!(themed.is_last_step());

    let mut buf = Buffer::empty(AREA);
    (&themed).render(AREA, &mut buf);
    let text = screen(&buf);
    assert!(text.contains("Page 4"));
    assert!(text.contains("[ Submit ]"));
    assert_eq!(buf[(0, AREA.height - 1)].bg, Theme::branded().background);
}

#[test]
fn test_delete_dialog_disabled_confirm() {
    let confirmed = Rc::new(Cell::new(false));
    let handle = confirmed.clone();
    let mut dialog = ConfirmDialog::new()
        .open(true)
        .title("Delete item?")
        .confirm_disabled(true)
        .on_confirm(move || handle.set(true));

    let confirm = dialog.layout(AREA).unwrap().confirm;
    assert_eq!(dialog.handle_mouse_event(left_click(confirm), AREA), None);
    assert_eq!(
        dialog.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        None
    );
    assert!(!confirmed.get());
}

#[test]
fn test_dialog_open_toggle_has_no_residue() {
    let provider = ThemeProvider::new(ConfirmDialog::new().title("Delete item?"));
    let mut provider = provider.theme(Theme::light());
    let mut frames = Vec::new();
    for open in [false, true, false] {
        provider.set_open(open);
        let mut buf = Buffer::empty(AREA);
        (&provider).render(AREA, &mut buf);
        frames.push(buf);
    }
    assert!(!screen(&frames[0]).contains("Delete item?"));
    assert!(screen(&frames[1]).contains("Delete item?"));
    assert_eq!(frames[0], frames[2]);
}

#[test]
fn test_dialog_cancel_reports_close() {
    let closed = Rc::new(Cell::new(0u32));
    let handle = closed.clone();
    let mut dialog = ConfirmDialog::new()
        .open(true)
        .on_close(move || handle.set(handle.get() + 1));
    let cancel = dialog.layout(AREA).unwrap().cancel;
    assert_eq!(
        dialog.handle_mouse_event(left_click(cancel), AREA),
        Some(DialogAction::Close)
    );
    assert_eq!(closed.get(), 1);
}

#[test]
fn test_theme_file_drives_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(
        &path,
        r##"{ "base": "light", "overrides": { "brand_stroke": "#112233" } }"##,
    )
    .unwrap();

    let theme = ThemeFile::load_from_file(&path).unwrap().to_theme().unwrap();
    let stepper = ThemeProvider::new(Stepper::new(steps(2)).unwrap()).theme(theme);
    let mut buf = Buffer::empty(AREA);
    (&stepper).render(AREA, &mut buf);

    let next = stepper.layout(AREA).next.unwrap();
    assert_eq!(
        buf[(next.x + 2, next.y)].bg,
        ratatui::style::Color::Rgb(0x11, 0x22, 0x33)
    );
}
