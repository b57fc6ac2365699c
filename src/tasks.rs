//! Task Scheduling
//!
//! Continuations for asynchronous browser work (file reads, clipboard writes,
//! toast timers) are queued on a single-threaded scheduler. Nothing here
//! supports cancellation: a queued task always runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use any_spawner::Executor;

/// A continuation run on a later turn of the event loop
pub type Task = Box<dyn FnOnce()>;

/// Single-threaded continuation queue
pub trait Scheduler {
    /// Run `task` after the current synchronous work completes
    fn defer(&self, task: Task);

    /// Run `task` once `delay` has elapsed
    fn defer_after(&self, delay: Duration, task: Task);
}

/// Start the global executor behind `leptos::task::spawn_local`.
/// Must run before any `BrowserScheduler` or `BrowserClipboard` work.
pub fn init_browser_executor() {
    if Executor::init_wasm_bindgen().is_err() {
        log::debug!("task executor already initialized");
    }
}

/// Scheduler backed by the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, task: Task) {
        leptos::task::spawn_local(async move { task() });
    }

    fn defer_after(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

// ========================
// Manual Scheduler
// ========================

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    ready: VecDeque<Task>,
    timers: Vec<Timer>,
}

/// Deterministic scheduler with a virtual clock.
///
/// Deferred tasks run on `run_until_idle`; timers run on `advance`, ordered
/// by due time and then by scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Queue>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of timers not yet fired
    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    /// Number of deferred tasks waiting for the next idle run
    pub fn pending_tasks(&self) -> usize {
        self.queue.borrow().ready.len()
    }

    /// Run deferred tasks, including ones they enqueue, until none remain
    pub fn run_until_idle(&self) {
        loop {
            // Borrow is released before the task runs so it can schedule more work
            let next = self.queue.borrow_mut().ready.pop_front();
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    /// Move the clock forward, firing every timer due within the window
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            self.run_until_idle();
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(idx, _)| idx);
                earliest.map(|idx| {
                    let timer = queue.timers.remove(idx);
                    queue.now = timer.due;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
        self.run_until_idle();
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, task: Task) {
        self.queue.borrow_mut().ready.push_back(task);
    }

    fn defer_after(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay;
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.timers.push(Timer { due, seq, task });
    }
}
