use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use firework_core::Point;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Spawn(Point),
    SpawnCentre, // Space: burst in the middle of the surface
    Clear,       // 'c': drop every active burst
    CycleEasing, // 'e': switch to the next named curve
    TogglePause, // 'p': stop or resume the animation
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(' '), _) => Action::SpawnCentre,
        (KeyCode::Enter, _) => Action::SpawnCentre,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::Clear,
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::CycleEasing,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePause,

        _ => Action::None,
    }
}
