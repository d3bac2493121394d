use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}
