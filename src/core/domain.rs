use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_BOOKS: usize = 100000;
pub const DEBUG_MAX_BOOKS: usize = 5;

// Identifiable defines the identity shared by entities held in a registry
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_books: usize,
    pub debug_max_books: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_books: DEFAULT_MAX_BOOKS,
            debug_max_books: DEBUG_MAX_BOOKS,
        }
    }
}

lazy_static! {
    static ref GLOBAL_SWITCH: CapacitySwitch = CapacitySwitch::new(&Configuration::new("global"));
}

/// Handle to a capacity value shared by every library built from it.
///
/// Clones point at the same value, so `debug_mode` on any clone changes the
/// threshold every sharing library consults on its next add. Books already
/// stored above a lowered threshold are kept.
#[derive(Debug, Clone)]
pub struct CapacitySwitch {
    max_books: usize,
    debug_max_books: usize,
    current: Arc<AtomicUsize>,
}

impl CapacitySwitch {
    pub fn new(config: &Configuration) -> Self {
        CapacitySwitch {
            max_books: config.max_books,
            debug_max_books: config.debug_max_books,
            current: Arc::new(AtomicUsize::new(config.max_books)),
        }
    }

    /// The process-wide switch used by `Library::new`.
    pub fn global() -> CapacitySwitch {
        GLOBAL_SWITCH.clone()
    }

    pub fn debug_mode(&self, enabled: bool) {
        let capacity = if enabled { self.debug_max_books } else { self.max_books };
        self.current.store(capacity, Ordering::SeqCst);
        tracing::info!(enabled, capacity, "capacity switch toggled");
    }

    pub fn capacity(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    pub fn shares_with(&self, other: &CapacitySwitch) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}
