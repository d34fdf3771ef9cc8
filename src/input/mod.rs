// src/input/mod.rs
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    LineDown,       // 'j', Down
    LineUp,         // 'k', Up
    PageDown,       // PageDown, Space
    PageUp,         // PageUp, 'b'
    Top,            // 'g', Home
    Bottom,         // 'G', End; with a count jumps to that row
    WheelDown,
    WheelUp,
    Digit(u8),      // count prefix
    ClearCount,     // Esc
    Reverse,        // 'r'
    Resize(u16, u16),
    Quit,           // 'q', <Ctrl-c>
}

pub trait KeyEventExt {
    fn matches_ctrl_key(&self, c: char) -> bool;
}

impl KeyEventExt for KeyEvent {
    fn matches_ctrl_key(&self, c: char) -> bool {
        matches!(
            (self.modifiers, self.code),
            (KeyModifiers::CONTROL, KeyCode::Char(k)) if k == c
        )
    }
}

pub fn map_event(event: Event) -> Option<ScrollAction> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(ScrollAction::Resize(width, height)),
        _ => None,
    }
}

pub fn map_key(key: KeyEvent) -> Option<ScrollAction> {
    // Some platforms report releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.matches_ctrl_key('c') {
        return Some(ScrollAction::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') => ScrollAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => ScrollAction::LineDown,
        KeyCode::Char('k') | KeyCode::Up => ScrollAction::LineUp,
        KeyCode::Char(' ') | KeyCode::PageDown => ScrollAction::PageDown,
        KeyCode::Char('b') | KeyCode::PageUp => ScrollAction::PageUp,
        KeyCode::Char('g') | KeyCode::Home => ScrollAction::Top,
        KeyCode::Char('G') | KeyCode::End => ScrollAction::Bottom,
        KeyCode::Char('r') => ScrollAction::Reverse,
        KeyCode::Char(c) if c.is_ascii_digit() => ScrollAction::Digit(c as u8 - b'0'),
        KeyCode::Esc => ScrollAction::ClearCount,
        _ => return None,
    };
    Some(action)
}

pub fn map_mouse(event: MouseEvent) -> Option<ScrollAction> {
    match event.kind {
        MouseEventKind::ScrollDown => Some(ScrollAction::WheelDown),
        MouseEventKind::ScrollUp => Some(ScrollAction::WheelUp),
        _ => None,
    }
}
