//! Reply timestamps.
//!
//! Replies carry whole seconds since the Unix epoch. The clock never hands out
//! a value smaller than one it already returned, so a wall clock stepping
//! backwards cannot make `unixtime` go down between calls.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of the current wall-clock time.
pub trait TimeSource: Send + Sync {
    /// Seconds since the Unix epoch.
    fn unix_seconds(&self) -> i64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

pub struct MonotonicClock {
    source: Arc<dyn TimeSource>,
    last: AtomicI64,
}

impl MonotonicClock {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self {
            source,
            last: AtomicI64::new(i64::MIN),
        }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }

    /// Current time in seconds, never lower than any previous result.
    pub fn now(&self) -> i64 {
        let observed = self.source.unix_seconds();
        let previous = self.last.fetch_max(observed, Ordering::AcqRel);
        previous.max(observed)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for MonotonicClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonotonicClock")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replays a fixed sequence of readings, repeating the last one.
    struct ScriptedSource(Mutex<Vec<i64>>);

    impl ScriptedSource {
        fn new(mut readings: Vec<i64>) -> Self {
            readings.reverse();
            Self(Mutex::new(readings))
        }
    }

    impl TimeSource for ScriptedSource {
        fn unix_seconds(&self) -> i64 {
            let mut readings = self.0.lock().unwrap();
            if readings.len() > 1 {
                readings.pop().unwrap()
            } else {
                readings[0]
            }
        }
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let before = chrono::Utc::now().timestamp();
        let now = MonotonicClock::system().now();
        let after = chrono::Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn follows_a_forward_moving_clock() {
        let clock = MonotonicClock::new(Arc::new(ScriptedSource::new(vec![100, 101, 105])));
        assert_eq!(clock.now(), 100);
        assert_eq!(clock.now(), 101);
        assert_eq!(clock.now(), 105);
    }

    #[test]
    fn never_steps_backwards() {
        let clock = MonotonicClock::new(Arc::new(ScriptedSource::new(vec![200, 150, 199, 201])));
        assert_eq!(clock.now(), 200);
        assert_eq!(clock.now(), 200);
        assert_eq!(clock.now(), 200);
        assert_eq!(clock.now(), 201);
    }

    #[test]
    fn concurrent_readers_see_non_decreasing_values() {
        let clock = Arc::new(MonotonicClock::system());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = Arc::clone(&clock);
                std::thread::spawn(move || {
                    let mut last = i64::MIN;
                    for _ in 0..1_000 {
                        let now = clock.now();
                        assert!(now >= last);
                        last = now;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
