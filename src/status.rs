//! Single-writer status publication.
//!
//! The processing thread publishes a fresh status once per analyzed frame; a
//! UI thread reads the most recent one at its own cadence. The whole `Arc` is
//! swapped under a short lock, so a reader always observes a complete value,
//! never a partially updated one.

use std::sync::{Arc, Mutex};

/// Atomically swapped handle to the most recent value of `T`.
#[derive(Debug)]
pub struct StatusCell<T> {
    slot: Mutex<Arc<T>>,
}

impl<T> StatusCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            slot: Mutex::new(Arc::new(initial)),
        }
    }

    /// Replaces the published value and returns the new shared handle.
    pub fn publish(&self, value: T) -> Arc<T> {
        let shared = Arc::new(value);
        let mut slot = self.slot.lock().expect("status cell lock poisoned");
        *slot = Arc::clone(&shared);
        shared
    }

    /// Returns the most recently published value.
    pub fn latest(&self) -> Arc<T> {
        Arc::clone(&self.slot.lock().expect("status cell lock poisoned"))
    }
}

impl<T: Default> Default for StatusCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn publish_then_read() {
        let cell = StatusCell::new(0u32);
        cell.publish(7);
        assert_eq!(*cell.latest(), 7);
    }

    #[test]
    fn old_handles_stay_valid_after_swap() {
        let cell = StatusCell::new(1u32);
        let before = cell.latest();
        cell.publish(2);
        assert_eq!(*before, 1);
        assert_eq!(*cell.latest(), 2);
    }

    #[test]
    fn concurrent_reads_see_complete_values() {
        let cell = Arc::new(StatusCell::new((0u64, 0u64)));
        let writer = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for i in 1..=1000u64 {
                    cell.publish((i, i * 2));
                }
            })
        };
        let reader = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for _ in 0..1000 {
                    let v = cell.latest();
                    assert_eq!(v.1, v.0 * 2, "torn status observed: {:?}", *v);
                }
            })
        };
        writer.join().expect("writer thread");
        reader.join().expect("reader thread");
    }
}
