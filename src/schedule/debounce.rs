//! Trailing-edge debounce

/// Coalesces a burst of values into one, released `delay_ms` after the last push
///
/// Each `push` cancels the pending value and restarts the timer.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace the pending value and restart the timer
    pub fn push(&mut self, value: T, now: u64) {
        self.pending = Some((value, now.saturating_add(self.delay_ms)));
    }

    /// Release the pending value if its deadline has passed
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Release the pending value immediately, ignoring the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
