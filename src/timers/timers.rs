use std::collections::HashMap;
use std::time::{Duration, Instant};

// Nested phase timers.   Each solve owns its own Timers, so
// nothing here is shared between threads.

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: HashMap<&'static str, InnerTimer>,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn child(&mut self, key: &'static str) -> &mut InnerTimer {
        self.subtimers.entry(key).or_default()
    }
}

#[derive(Default, Debug)]
pub(crate) struct Timers {
    stack: Vec<&'static str>,
    root: InnerTimer,
}

impl Timers {
    fn active_timer(&mut self) -> &mut InnerTimer {
        let mut timer = &mut self.root;
        for key in &self.stack {
            timer = timer.child(*key);
        }
        timer
    }

    /// Starts the timer `key` as a child of the currently running one.
    pub(crate) fn start_as_current(&mut self, key: &'static str) {
        self.active_timer().child(key).start();
        self.stack.push(key);
    }

    /// Stops the most recently started timer.
    pub(crate) fn stop_current(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        self.active_timer().stop();
        self.stack.pop();
    }

    /// Elapsed time of the top level timer `key`.
    #[cfg(test)]
    pub(crate) fn elapsed(&self, key: &'static str) -> Duration {
        self.root
            .subtimers
            .get(key)
            .map_or(Duration::ZERO, |t| t.elapsed)
    }

    /// Total over all top level timers.
    pub(crate) fn total_time(&self) -> Duration {
        self.root
            .subtimers
            .values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }
}

// Runs a block of statements between start_as_current($key)
// and stop_current().   Statements must not return early.
macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;
