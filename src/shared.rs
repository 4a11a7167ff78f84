use crate::reservoir::Reservoir;
use parking_lot::Mutex;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Arc;

/// The retained records and the number of records observed, read under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub records: Vec<T>,
    pub seen: u64,
}

/// A reservoir shared between the reading thread and the interrupt watcher.
///
/// `add` and `snapshot` each hold the lock for their whole duration, so a snapshot
/// never observes a half-applied update.
pub struct SharedReservoir<T, R = Xoshiro256StarStar> {
    inner: Arc<Mutex<Reservoir<T, R>>>,
}

impl<T, R> Clone for SharedReservoir<T, R> {
    fn clone(&self) -> Self {
        SharedReservoir {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone, R: Rng> SharedReservoir<T, R> {
    pub fn new(reservoir: Reservoir<T, R>) -> SharedReservoir<T, R> {
        SharedReservoir {
            inner: Arc::new(Mutex::new(reservoir)),
        }
    }

    pub fn add(&self, record: T) {
        self.inner.lock().add(record);
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        let reservoir = self.inner.lock();
        Snapshot {
            records: reservoir.sample().to_vec(),
            seen: reservoir.seen(),
        }
    }
}
