use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::prelude::Result;

// failures are a distinct state so a dead fetch is visible instead of loading forever
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

// every load bumps the generation and a completion applies only while its generation
// is current, so an earlier fetch that resolves late cannot overwrite a newer one
#[derive(Debug, Default)]
pub struct Page<T> {
    state: Mutex<PageState<T>>,
    epoch: AtomicU64,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Idle
    }
}

impl<T: Clone> Page<T> {
    pub fn new() -> Self {
        Page {
            state: Mutex::new(PageState::Idle),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> PageState<T> {
        self.state.lock().expect("page state poisoned").clone()
    }

    pub fn begin_load(&self) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().expect("page state poisoned") = PageState::Loading;
        epoch
    }

    pub fn complete(&self, epoch: u64, result: Result<T>) -> bool {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!("discarding stale page completion (epoch {})", epoch);
            return false;
        }
        let mut state = self.state.lock().expect("page state poisoned");
        *state = match result {
            Ok(data) => PageState::Loaded(data),
            Err(err) => {
                tracing::error!("page load failed: {}", &err);
                PageState::Failed(err.to_string())
            }
        };
        true
    }

    // a skipped load (missing session) returns the page to Idle rather than hanging in Loading
    pub fn cancel(&self, epoch: u64) -> bool {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return false;
        }
        *self.state.lock().expect("page state poisoned") = PageState::Idle;
        true
    }

    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.state.lock().expect("page state poisoned") = PageState::Idle;
    }
}
