//! Nested wall clock timers.
//!
//! Timers are identified by static string keys and form a tree, with a
//! timer started while another is running recorded as its child.  Use the
//! crate internal `timeit!` macro to time a block of code.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimersMap,
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
}

type SubTimersMap = HashMap<&'static str, InnerTimer>;

fn total_time(timers: &SubTimersMap) -> Duration {
    timers.values().map(|t| t.elapsed).sum()
}

/// Collection of nested timers with a stack of active keys
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;
        let mut active = self.subtimers.get_mut(first)?;
        for key in rest {
            active = active.subtimers.get_mut(key)?;
        }
        Some(active)
    }

    /// Starts timer `key` as a child of the currently running timer,
    /// or at top level if none is running.
    pub fn start_as_current(&mut self, key: &'static str) {
        match self.mut_active_timer() {
            Some(active) => active.subtimers.entry(key).or_default().start(),
            None => self.subtimers.entry(key).or_default().start(),
        }
        self.stack.push(key);
    }

    /// Stops the most recently started timer
    pub fn stop_current(&mut self) {
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }
        self.stack.pop();
    }

    /// accumulated time of the top level timer `key`
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.subtimers.get(key).map_or(Duration::ZERO, |t| t.elapsed)
    }

    /// sum over all top level timers
    pub fn total_time(&self) -> Duration {
        total_time(&self.subtimers)
    }
}

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

#[test]
fn test_nested_timers() {
    let mut timers = Timers::default();

    timeit! {timers => "outer"; {
        std::thread::sleep(Duration::from_millis(2));
        timeit! {timers => "inner"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
    }}
    timeit! {timers => "other"; {}}

    let outer = timers.elapsed("outer");
    assert!(outer >= Duration::from_millis(4));
    assert_eq!(timers.elapsed("inner"), Duration::ZERO); // not top level
    assert!(timers.total_time() >= outer);
    assert!(timers.stack.is_empty());

    // restarting a timer accumulates
    timeit! {timers => "outer"; {
        std::thread::sleep(Duration::from_millis(1));
    }}
    assert!(timers.elapsed("outer") >= outer + Duration::from_millis(1));
}
