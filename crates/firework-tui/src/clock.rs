//! Frame pacing
//!
//! The engine asks for the next frame after every tick; the clock turns that
//! request into a deadline on the display's frame cadence.

use std::time::Duration;

use tokio::time::Instant;

const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Option<Instant>,
    deadline: Option<Instant>,
}

impl FrameClock {
    /// Clock for `fps` frames per second; zero falls back to 60
    pub fn new(fps: u32) -> Self {
        let fps = if fps == 0 { DEFAULT_FPS } else { fps };
        Self {
            frame: Duration::from_secs(1) / fps,
            last: None,
            deadline: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Schedule the next frame one period after the previous one.
    ///
    /// The first frame, and any frame that is already late, is due at `now`.
    /// Arming twice before the frame fires keeps the first deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_some() {
            return;
        }
        let due = match self.last {
            Some(last) => (last + self.frame).max(now),
            None => now,
        };
        self.deadline = Some(due);
    }

    /// Deadline of the pending frame, if one was requested
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Mark the pending frame as delivered at `now`
    pub fn fire(&mut self, now: Instant) {
        self.deadline = None;
        self.last = Some(now);
    }

    /// Drop any pending frame
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Wait for `deadline`, or forever when there is none
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fps_falls_back() {
        assert_eq!(FrameClock::new(0).frame_duration(), Duration::from_secs(1) / 60);
        assert_eq!(FrameClock::new(50).frame_duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_first_frame_is_immediate() {
        let now = Instant::now();
        let mut clock = FrameClock::new(50);
        assert!(!clock.is_armed());
        clock.arm(now);
        assert_eq!(clock.deadline(), Some(now));
    }

    #[test]
    fn test_frames_follow_cadence() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50);
        clock.arm(start);
        clock.fire(start);
        assert!(!clock.is_armed());

        clock.arm(start + Duration::from_millis(5));
        assert_eq!(clock.deadline(), Some(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_late_frame_is_not_caught_up() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50);
        clock.arm(start);
        clock.fire(start);

        let late = start + Duration::from_millis(100);
        clock.arm(late);
        assert_eq!(clock.deadline(), Some(late));
    }

    #[test]
    fn test_rearm_keeps_pending_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50);
        clock.arm(start);
        clock.arm(start + Duration::from_millis(3));
        assert_eq!(clock.deadline(), Some(start));

        clock.disarm();
        assert_eq!(clock.deadline(), None);
    }

    #[tokio::test]
    async fn test_wait_for_deadline() {
        let deadline = Instant::now() + Duration::from_millis(5);
        wait_for(Some(deadline)).await;
        assert!(Instant::now() >= deadline);
    }
}
