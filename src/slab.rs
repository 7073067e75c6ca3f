//! Bounded session store
//!
//! Ids increase monotonically and are never handed out twice. Each session
//! sits behind its own mutex, shared through an `Arc`, so a long render
//! holds only that session while the table lock is released immediately.
//! Removing a session only drops the table entry; it never waits on or
//! inspects the session's mutex, so a poisoned session still frees its
//! place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

struct Table<T> {
    next_id: u64,
    sessions: HashMap<u64, Arc<Mutex<T>>>,
}

pub struct SessionSlab<T> {
    capacity: usize,
    table: RwLock<Table<T>>,
}

impl<T> SessionSlab<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            table: RwLock::new(Table {
                next_id: 0,
                sessions: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Store `item`; `None` when the slab is at capacity
    pub fn insert(&self, item: T) -> Option<u64> {
        let mut table = self.table.write().ok()?;
        if table.sessions.len() >= self.capacity {
            return None;
        }

        let id = table.next_id;
        table.next_id += 1;
        table.sessions.insert(id, Arc::new(Mutex::new(item)));
        Some(id)
    }

    fn session(&self, id: u64) -> Option<Arc<Mutex<T>>> {
        self.table.read().ok()?.sessions.get(&id).cloned()
    }

    pub fn with_session<F, R>(&self, id: u64, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let session = self.session(id)?;
        let guard = session.lock().ok()?;
        Some(f(&*guard))
    }

    pub fn with_session_mut<F, R>(&self, id: u64, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let session = self.session(id)?;
        let mut guard = session.lock().ok()?;
        Some(f(&mut *guard))
    }

    /// Drop a session; `false` when the id is unknown
    pub fn remove(&self, id: u64) -> bool {
        match self.table.write() {
            Ok(mut table) => table.sessions.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.sessions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
