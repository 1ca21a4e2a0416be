//! One-shot delayed tasks run on the UI thread.
//!
//! The queue is drained by the main loop; tasks never cross threads, so they
//! may capture `Rc`/`Weak` handles to UI state.

use std::time::{Duration, Instant};

struct Task {
    due: Instant,
    run: Box<dyn FnOnce()>,
}

/// Pending one-shot tasks ordered by due time.
#[derive(Default)]
pub struct MainQueue {
    tasks: Vec<Task>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to run `delay` from now.
    pub fn after(&mut self, delay: Duration, task: impl FnOnce() + 'static) {
        self.schedule_at(Instant::now() + delay, task);
    }

    pub fn schedule_at(&mut self, due: Instant, task: impl FnOnce() + 'static) {
        self.tasks.push(Task {
            due,
            run: Box::new(task),
        });
    }

    /// Runs every task due at `now`, earliest first. Returns how many ran.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let (mut due, later): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due <= now);
        self.tasks = later;
        due.sort_by_key(|task| task.due);

        let count = due.len();
        for task in due {
            (task.run)();
        }
        count
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue")
            .field("pending", &self.tasks.len())
            .field("next_due", &self.next_due())
            .finish()
    }
}
