//! Start/stop handle for the per-frame loop.
//!
//! Every start hands out a fresh [`LoopToken`]. Ticks carry the token they were
//! scheduled with, so a callback that survives a close (or a close followed by
//! a reopen) is recognised as stale and does nothing.

use serde::Serialize;

/// Identifies one run of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LoopToken(u64);

impl LoopToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// At most one loop is live at a time.
#[derive(Debug, Default)]
pub struct FrameLoop {
    generation: u64,
    running: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a loop. Returns `None` when one is already running; the caller
    /// must not schedule a second one.
    pub fn start(&mut self) -> Option<LoopToken> {
        if self.running {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        Some(LoopToken(self.generation))
    }

    /// Stop the live loop; its token becomes stale.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Token of the live loop, if any.
    pub fn current(&self) -> Option<LoopToken> {
        self.running.then_some(LoopToken(self.generation))
    }

    pub fn is_current(&self, token: LoopToken) -> bool {
        self.running && token.0 == self.generation
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn second_start_refused_while_running() {
        let mut frames = FrameLoop::new();
        let token = frames.start().unwrap();
        assert!(frames.start().is_none());
        assert_eq!(frames.current(), Some(token));
    }

    #[test]
    fn stop_makes_token_stale() {
        let mut frames = FrameLoop::new();
        let old = frames.start().unwrap();
        frames.stop();
        assert!(!frames.is_current(old));
        let new = frames.start().unwrap();
        assert_ne!(old, new);
        assert!(!frames.is_current(old));
        assert!(frames.is_current(new));
    }

    #[test]
    fn stop_when_idle_is_noop() {
        let mut frames = FrameLoop::new();
        frames.stop();
        assert!(!frames.is_running());
        assert_eq!(frames.current(), None);
    }
}
