//! Leading + trailing edge throttle

/// Lets at most one value through per `delay_ms`
///
/// A call fires immediately when the interval since the last firing has
/// elapsed and nothing is queued. Otherwise the value is parked as the single
/// trailing call, due at `last_fired + delay_ms`. Later calls inside the same
/// window replace the parked value, so the trailing call carries the most
/// recent input.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    delay_ms: u64,
    last_fired: Option<u64>,
    trailing: Option<(T, u64)>,
}

impl<T> Throttle<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_fired: None,
            trailing: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Offer a value; returns it back if it should be applied right now
    pub fn call(&mut self, value: T, now: u64) -> Option<T> {
        if let Some((parked, _)) = self.trailing.as_mut() {
            *parked = value;
            return None;
        }

        let elapsed_ok = self
            .last_fired
            .map_or(true, |last| now.saturating_sub(last) >= self.delay_ms);

        if elapsed_ok {
            self.last_fired = Some(now);
            Some(value)
        } else {
            let last = self.last_fired.unwrap_or(now);
            self.trailing = Some((value, last.saturating_add(self.delay_ms)));
            None
        }
    }

    /// Release the trailing value if it is due
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self.trailing {
            Some((_, deadline)) if deadline <= now => {
                self.last_fired = Some(now);
                self.trailing.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.trailing.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.trailing.is_some()
    }

    /// Drop the trailing value and forget the last firing time
    pub fn cancel(&mut self) -> Option<T> {
        self.last_fired = None;
        self.trailing.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_first_call_fires_immediately() {
        let mut t = Throttle::new(16);
        assert_eq!(t.call(1.0, 0), Some(1.0));
        assert!(!t.is_pending());
    }

    #[test]
    fn test_throttle_parks_single_trailing_call() {
        let mut t = Throttle::new(16);
        assert_eq!(t.call(1, 0), Some(1));
        assert_eq!(t.call(2, 4), None);
        assert_eq!(t.call(3, 8), None);
        assert_eq!(t.deadline(), Some(16));
        assert_eq!(t.poll(15), None);
        // Trailing call carries the latest input
        assert_eq!(t.poll(16), Some(3));
        assert_eq!(t.poll(100), None);
    }

    #[test]
    fn test_throttle_fires_again_after_interval() {
        let mut t = Throttle::new(16);
        assert_eq!(t.call(1, 0), Some(1));
        assert_eq!(t.call(2, 16), Some(2));
        assert_eq!(t.call(3, 40), Some(3));
    }

    #[test]
    fn test_throttle_waits_for_trailing_before_leading() {
        let mut t = Throttle::new(16);
        t.call(1, 0);
        t.call(2, 5);
        // Interval elapsed, but a trailing call is still queued: it absorbs the value
        assert_eq!(t.call(3, 20), None);
        assert_eq!(t.poll(20), Some(3));
    }

    #[test]
    fn test_throttle_rate_bounded() {
        let mut t = Throttle::new(16);
        // (fired_at, value)
        let mut fired = Vec::new();
        for now in 0..=100u64 {
            if let Some(v) = t.call(now, now) {
                fired.push((now, v));
            }
            if let Some(v) = t.poll(now) {
                fired.push((now, v));
            }
        }
        if let Some(deadline) = t.deadline() {
            if let Some(v) = t.poll(deadline) {
                fired.push((deadline, v));
            }
        }
        for pair in fired.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 16);
        }
        assert_eq!(fired.last().map(|(_, v)| *v), Some(100));
    }
}
