//! Deferred UI work tied to a screen's lifetime
//!
//! A [`ScreenLifetime`] is created when a screen opens and closed when it
//! goes away. Work scheduled through it runs after a delay on the tokio
//! runtime, but only if the screen is still open at that moment. Closing
//! the lifetime (or dropping it) aborts every pending task.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

static NEXT_SCREEN_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one opened instance of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

impl ScreenId {
    /// Allocate an id never handed out before in this process
    pub fn next() -> Self {
        Self(NEXT_SCREEN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// Active period of one screen, owner of its deferred tasks
pub struct ScreenLifetime {
    id: ScreenId,
    active: Arc<AtomicBool>,
    runtime: Handle,
    tasks: Vec<JoinHandle<()>>,
}

impl ScreenLifetime {
    /// Start a lifetime whose tasks run on `runtime`
    pub fn new(runtime: Handle) -> Self {
        Self {
            id: ScreenId::next(),
            active: Arc::new(AtomicBool::new(true)),
            runtime,
            tasks: Vec::new(),
        }
    }

    /// Id of the screen instance
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// Whether the screen is still open
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Run `action` once `after` has elapsed, unless the screen closed first
    ///
    /// Never blocks the caller.
    pub fn schedule<F>(&mut self, after: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.is_active() {
            debug!("Ignoring task scheduled on closed {}", self.id);
            return;
        }

        self.tasks.retain(|task| !task.is_finished());

        let active = self.active.clone();
        let id = self.id;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if active.load(Ordering::Acquire) {
                action();
            } else {
                debug!("Suppressed deferred task for closed {}", id);
            }
        });
        self.tasks.push(task);
    }

    /// Number of scheduled tasks that have not finished yet
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// End the lifetime and cancel every pending task
    pub fn close(&mut self) {
        if self.active.swap(false, Ordering::AcqRel) {
            debug!("Closing {} ({} pending tasks)", self.id, self.pending());
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl fmt::Debug for ScreenLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenLifetime")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Drop for ScreenLifetime {
    fn drop(&mut self) {
        self.close();
    }
}
