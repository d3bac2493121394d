use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let events = self.events.lock().map_err(|err|
            LibraryError::runtime(format!("event log poisoned {:?}", err).as_str(), None))?;
        Ok(events.clone())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let mut events = self.events.lock().map_err(|err|
            LibraryError::runtime(format!("event log poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }
}
