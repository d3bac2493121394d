use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{CapacitySwitch, Configuration};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::LogPublisher;

const EVENT_GROUP: &str = "books";

/// A library branch and the ordered registry of books it owns.
///
/// Books stay in insertion order. The number of books held never exceeds the
/// capacity of the attached [`CapacitySwitch`] at the time of each add.
pub struct Library {
    address: String,
    opening_hours: u32,
    closing_time: u32,
    capacity: CapacitySwitch,
    books: Vec<BookEntity>,
    metadata: HashMap<String, String>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    /// Builds a library bound to the process-wide capacity switch.
    pub fn new(address: &str, opening_hours: u32, closing_time: u32) -> Self {
        Self::build(&Configuration::new("main"), CapacitySwitch::global(),
                    Box::new(LogPublisher::new()), address, opening_hours, closing_time)
    }

    pub fn build(config: &Configuration, capacity: CapacitySwitch,
                 events_publisher: Box<dyn EventPublisher>,
                 address: &str, opening_hours: u32, closing_time: u32) -> Self {
        Self {
            address: address.to_string(),
            opening_hours,
            closing_time,
            capacity,
            books: Vec::new(),
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            events_publisher,
        }
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn opening_hours(&self) -> u32 {
        self.opening_hours
    }

    pub fn closing_time(&self) -> u32 {
        self.closing_time
    }

    pub fn hours(&self) -> String {
        format!("{} - {}", self.opening_hours, self.closing_time)
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn capacity(&self) -> usize {
        self.capacity.capacity()
    }

    /// Toggles the capacity switch this library was built with, which changes
    /// the threshold for every library sharing it.
    pub fn debug_mode(&self, enabled: bool) {
        self.capacity.debug_mode(enabled);
    }

    // first match in insertion order
    fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.title() == title)
    }

    fn publish(&self, kind: DomainEventType, book: &BookEntity) {
        let name = format!("book_{:?}", kind).to_lowercase();
        let key = book.title();
        let event = match kind {
            DomainEventType::Added => DomainEvent::added(&name, EVENT_GROUP, key, &self.metadata, book),
            DomainEventType::Borrowed => DomainEvent::borrowed(&name, EVENT_GROUP, key, &self.metadata, book),
            DomainEventType::Returned => DomainEvent::returned(&name, EVENT_GROUP, key, &self.metadata, book),
            DomainEventType::Deleted => DomainEvent::deleted(&name, EVENT_GROUP, key, &self.metadata, book),
        };
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            tracing::warn!(title = key, kind = ?kind, error = %err, "failed to publish book event");
        }
    }
}

impl CatalogService for Library {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()> {
        let capacity = self.capacity.capacity();
        if self.books.len() >= capacity {
            tracing::warn!(title = book.title(), count = self.books.len(), capacity, "library is full");
            return Err(LibraryError::library_full(
                format!("library at {} is full, cannot add {}", self.address, book.title()).as_str(), capacity));
        }
        tracing::info!(title = book.title(), kind = %book.kind(), "adding book");
        self.books.push(book);
        if let Some(added) = self.books.last() {
            self.publish(DomainEventType::Added, added);
        }
        Ok(())
    }

    fn find_book(&self, title: &str) -> Option<&BookEntity> {
        let found = self.books.iter().find(|b| b.title() == title);
        tracing::debug!(title, found = found.is_some(), "find book");
        found
    }

    fn get_available_books(&self) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| !b.is_borrowed()).collect()
    }

    fn borrow_book(&mut self, title: &str) {
        if let Some(ndx) = self.position(title) {
            self.books[ndx].borrowed();
            tracing::info!(title, "book borrowed");
            self.publish(DomainEventType::Borrowed, &self.books[ndx]);
        } else {
            tracing::debug!(title, "borrow ignored, book not held");
        }
    }

    fn return_book(&mut self, title: &str) {
        if let Some(ndx) = self.position(title) {
            self.books[ndx].returned();
            tracing::info!(title, "book returned");
            self.publish(DomainEventType::Returned, &self.books[ndx]);
        } else {
            tracing::debug!(title, "return ignored, book not held");
        }
    }

    fn is_borrowed(&self, title: &str) -> bool {
        self.find_book(title).map(|b| b.is_borrowed()).unwrap_or(false)
    }

    fn remove_book(&mut self, title: &str) -> Option<BookEntity> {
        let ndx = self.position(title)?;
        let removed = self.books.remove(ndx);
        tracing::info!(title, count = self.books.len(), "book removed");
        self.publish(DomainEventType::Deleted, &removed);
        Some(removed)
    }

    fn books_count(&self) -> usize {
        self.books.len()
    }
}

impl Debug for Library {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("address", &self.address)
            .field("opening_hours", &self.opening_hours)
            .field("closing_time", &self.closing_time)
            .field("capacity", &self.capacity)
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}
