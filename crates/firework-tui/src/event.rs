use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use firework_core::TriggerMode;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Event handler for terminal events
pub struct EventHandler {
    poll_interval: Duration,
    trigger: TriggerMode,
}

impl EventHandler {
    pub fn new(trigger: TriggerMode, poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
            trigger,
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval)? {
            Ok(self.translate(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Map a raw terminal event to an application event
    pub fn translate(&self, event: Event) -> Option<AppEvent> {
        match event {
            // Only handle key press events, ignore release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }

    fn translate_mouse(&self, mouse: MouseEvent) -> Option<AppEvent> {
        let fires = match self.trigger {
            TriggerMode::Click => matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)),
            TriggerMode::Move => matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Drag(_)
            ),
        };
        fires.then_some(AppEvent::Trigger {
            column: mouse.column,
            row: mouse.row,
        })
    }
}

/// Forward terminal events into `tx` from a blocking task.
///
/// The reader stops once the receiving side is dropped.
pub fn spawn_event_reader(
    handler: EventHandler,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if let Some(event) = handler.next()? {
                if tx.send(event).is_err() {
                    break;
                }
            }
        }
        debug!("event reader stopped");
        Ok(())
    })
}

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// A pointer event that should launch a burst, in terminal cells
    Trigger { column: u16, row: u16 },
    /// Terminal was resized
    Resize(u16, u16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_mode_fires_on_left_press() {
        let handler = EventHandler::new(TriggerMode::Click, 10);
        assert_eq!(
            handler.translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(AppEvent::Trigger { column: 7, row: 3 })
        );
        assert_eq!(handler.translate(mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(handler.translate(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_move_mode_fires_on_motion() {
        let handler = EventHandler::new(TriggerMode::Move, 10);
        assert!(handler.translate(mouse(MouseEventKind::Moved)).is_some());
        assert!(handler
            .translate(mouse(MouseEventKind::Drag(MouseButton::Left)))
            .is_some());
        assert_eq!(handler.translate(mouse(MouseEventKind::Down(MouseButton::Left))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = EventHandler::new(TriggerMode::Click, 10);
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.translate(Event::Key(press)), Some(AppEvent::Key(press)));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert_eq!(handler.translate(Event::Key(release)), None);
    }

    #[test]
    fn test_resize_passes_through() {
        let handler = EventHandler::new(TriggerMode::Click, 10);
        assert_eq!(handler.translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24)));
        assert_eq!(handler.translate(Event::FocusGained), None);
    }
}
