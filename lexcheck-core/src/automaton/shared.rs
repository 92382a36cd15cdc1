//! Build-once cell for automata shared across threads
//!
//! The first caller builds the automaton under a lock; every later read is a
//! lock-free load from the inner `OnceLock`.

use super::ExceptionAutomaton;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

/// Lazily built, then immutable, automaton slot
#[derive(Debug, Default)]
pub struct SharedAutomaton {
    cell: OnceLock<Arc<ExceptionAutomaton>>,
    init_lock: Mutex<()>,
    builds: AtomicUsize,
}

impl SharedAutomaton {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    /// The automaton if it has been built
    #[inline]
    pub fn get(&self) -> Option<&Arc<ExceptionAutomaton>> {
        self.cell.get()
    }

    /// Return the automaton, building it with `build` on first use
    ///
    /// `build` runs at most once per successful initialization, no matter how
    /// many threads race here. A failed build leaves the slot empty.
    pub fn get_or_try_init<F, E>(&self, build: F) -> Result<&Arc<ExceptionAutomaton>, E>
    where
        F: FnOnce() -> Result<ExceptionAutomaton, E>,
    {
        if let Some(automaton) = self.cell.get() {
            return Ok(automaton);
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(automaton) = self.cell.get() {
            return Ok(automaton);
        }

        let started = Instant::now();
        let automaton = build()?;
        self.builds.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            entries = automaton.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built exception automaton"
        );
        Ok(self.cell.get_or_init(|| Arc::new(automaton)))
    }

    /// How many times an automaton has been built into this slot
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::thread;

    #[test]
    fn test_builds_once_under_contention() {
        let shared = Arc::new(SharedAutomaton::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let shared = Arc::clone(&shared);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    let automaton = shared
                        .get_or_try_init(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            ExceptionAutomaton::build(["well-known"])
                        })
                        .unwrap();
                    automaton.len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(shared.build_count(), 1);
    }

    #[test]
    fn test_failed_build_can_retry() {
        let shared = SharedAutomaton::new();
        let failed: Result<_, String> = shared.get_or_try_init(|| Err("missing list".to_string()));
        assert!(failed.is_err());
        assert!(shared.get().is_none());

        let ok: Result<_, CoreError> = shared.get_or_try_init(|| ExceptionAutomaton::build(["x"]));
        assert!(ok.is_ok());
        assert_eq!(shared.build_count(), 1);
    }

    #[test]
    fn test_static_slot() {
        static SLOT: SharedAutomaton = SharedAutomaton::new();
        let first = SLOT
            .get_or_try_init(|| ExceptionAutomaton::build(["a"]))
            .unwrap()
            .clone();
        let second = SLOT
            .get_or_try_init(|| ExceptionAutomaton::build(["b"]))
            .unwrap();
        assert!(Arc::ptr_eq(&first, second));
    }
}
