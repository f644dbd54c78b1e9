// Timer scheduling for the animation controller
//
// A small virtual-clock timer wheel. Timers are registered against a plain
// event value and fire when the clock is advanced past their due time. The
// wheel never reads the wall clock, so the run loop feeds it measured frame
// times while tests feed it synthetic ones.

use std::time::Duration;

/// Handle returned when a timer is registered, used to cancel it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// How a timer re-arms after firing.
#[derive(Debug, Clone, Copy)]
enum Cadence {
    /// Fire once, then unregister.
    Once,
    /// Fire on every multiple of the period until cancelled.
    Every(Duration),
}

#[derive(Debug)]
struct TimerEntry<E> {
    id: u64,
    due: Duration,
    cadence: Cadence,
    event: E,
}

/// Virtual-clock timer wheel.
///
/// `advance` moves the clock forward and returns every event whose due time
/// was crossed, in firing order. A repeating timer re-arms itself and can
/// fire more than once per advance when the step spans several periods.
#[derive(Debug)]
pub struct Scheduler<E> {
    clock: Duration,
    next_id: u64,
    entries: Vec<TimerEntry<E>>,
}

impl<E: Copy> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Fire `event` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerToken {
        self.insert(delay, Cadence::Once, event)
    }

    /// Fire `event` every `period`, starting one period from now.
    pub fn schedule_every(&mut self, period: Duration, event: E) -> TimerToken {
        debug_assert!(!period.is_zero(), "repeating timer needs a nonzero period");
        self.insert(period, Cadence::Every(period), event)
    }

    fn insert(&mut self, delay: Duration, cadence: Cadence, event: E) -> TimerToken {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            due: self.clock + delay,
            cadence,
            event,
        });
        TimerToken(id)
    }

    /// Remove a pending timer. Returns false when the timer already fired
    /// (one-shot) or was cancelled earlier.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != token.0);
        self.entries.len() != before
    }

    /// Number of timers still registered.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Advance the clock by `dt` and collect every due event.
    ///
    /// Events come back ordered by due time; ties on the same instant fire
    /// in registration order.
    pub fn advance(&mut self, dt: Duration) -> Vec<E> {
        self.clock += dt;

        let mut fired: Vec<(Duration, u64, E)> = Vec::new();
        let mut idx = 0;
        while idx < self.entries.len() {
            let entry = &mut self.entries[idx];
            match entry.cadence {
                Cadence::Once => {
                    if entry.due <= self.clock {
                        fired.push((entry.due, entry.id, entry.event));
                        self.entries.remove(idx);
                        continue;
                    }
                }
                Cadence::Every(period) => {
                    while entry.due <= self.clock {
                        fired.push((entry.due, entry.id, entry.event));
                        entry.due += period;
                    }
                }
            }
            idx += 1;
        }

        fired.sort_by_key(|&(due, id, _)| (due, id));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }
}

impl<E: Copy> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
