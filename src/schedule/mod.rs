//! Rate limiting for noisy input streams
//!
//! Both primitives are plain state machines driven by explicit timestamps.
//! Neither one ever drops the final value of a burst: a pending trailing
//! value always fires once its deadline passes.
//!
//! ```text
//! input ──push/call──▶ Debounce / Throttle ──poll(now)──▶ value to apply
//!                              │
//!                              └── deadline() ──▶ Cmd::ScheduleTick
//! ```

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;

/// Earliest of several optional deadlines
pub fn earliest_deadline<I>(deadlines: I) -> Option<u64>
where
    I: IntoIterator<Item = Option<u64>>,
{
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_deadline() {
        assert_eq!(earliest_deadline([None, Some(40), Some(16)]), Some(16));
        assert_eq!(earliest_deadline([None, None]), None);
    }
}
