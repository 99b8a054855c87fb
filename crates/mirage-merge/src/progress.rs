//! Progress reporting for the dither and merge phases.
//!
//! Observers are informational only: nothing they do can change output.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives `(completed, total)` work units.
///
/// Calls may arrive from several worker threads, and `completed` values may
/// arrive out of order.
pub trait Progress: Send + Sync {
    fn update(&self, completed: usize, total: usize);
}

impl<F> Progress for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn update(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Observer that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&self, _completed: usize, _total: usize) {}
}

/// Shared counter feeding an optional observer.
///
/// # Example
///
/// ```
/// use std::sync::Mutex;
/// use mirage_merge::ProgressCounter;
///
/// let seen = Mutex::new(Vec::new());
/// let observer = |done: usize, total: usize| seen.lock().unwrap().push((done, total));
/// let counter = ProgressCounter::new(Some(&observer), 2);
/// counter.tick();
/// counter.tick();
/// assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 2)]);
/// ```
pub struct ProgressCounter<'a> {
    observer: Option<&'a dyn Progress>,
    completed: AtomicUsize,
    total: usize,
}

impl<'a> ProgressCounter<'a> {
    /// A counter over `total` units. `None` disables reporting.
    pub fn new(observer: Option<&'a dyn Progress>, total: usize) -> Self {
        Self {
            observer,
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Record one finished unit and notify the observer.
    pub fn tick(&self) -> usize {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(observer) = self.observer {
            observer.update(done, self.total);
        }
        done
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
