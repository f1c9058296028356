//! Leading-edge rate limit for move input.

use std::time::{Duration, Instant};

/// Slack added to the animation length so a move never lands mid-animation.
const WINDOW_SLACK: f64 = 1.05;

/// Accepts at most one move per window. Calls inside the window are dropped,
/// not queued.
#[derive(Debug, Clone)]
pub struct MoveThrottle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl MoveThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Window sized to one tile animation.
    pub fn for_animation(animation: Duration) -> Self {
        Self::new(animation.mul_f64(WINDOW_SLACK))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true and starts a new window if the previous one has elapsed.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let open = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        };
        if open {
            self.last_accepted = Some(now);
        }
        open
    }
}
