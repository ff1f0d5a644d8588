/// Decides, once per frame, whether a simulation tick is due.
///
/// The frame loop keeps polling input between ticks, so a quit is seen on
/// the very next frame instead of after a blocking sleep.
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_due_ms: Option<u64>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a tick should run at `now_ms`; the next one is then scheduled
    /// `interval_ms` later. The first poll is always due.
    pub fn poll(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms < due => false,
            _ => {
                self.next_due_ms = Some(now_ms + interval_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }
}

/// Milliseconds between ticks at `speed` ticks per second.
pub fn interval_for_speed(speed: u32) -> u64 {
    1000 / u64::from(speed.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_for_speed() {
        assert_eq!(interval_for_speed(10), 100);
        assert_eq!(interval_for_speed(12), 83);
        assert_eq!(interval_for_speed(0), 1000);
    }

    #[test]
    fn test_poll_cadence() {
        let mut scheduler = TickScheduler::new();
        assert!(scheduler.poll(0, 100));
        assert!(!scheduler.poll(16, 100));
        assert!(!scheduler.poll(99, 100));
        assert!(scheduler.poll(100, 100));
        // Faster speed takes effect from the next schedule
        assert!(scheduler.poll(200, 50));
        assert!(!scheduler.poll(249, 50));
        assert!(scheduler.poll(250, 50));
    }

    #[test]
    fn test_reset_makes_next_poll_due() {
        let mut scheduler = TickScheduler::new();
        scheduler.poll(0, 1000);
        scheduler.reset();
        assert!(scheduler.poll(1, 1000));
    }
}
