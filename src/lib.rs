//! In-memory inventory for a single library branch: a bounded, ordered
//! registry of novels, standard books and comics with borrow/return state.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod utils;

pub use crate::books::domain::Book;
pub use crate::books::domain::model::{BookEntity, BookRecord, Comic, Novel, StandardBook};
pub use crate::catalog::domain::CatalogService;
pub use crate::catalog::domain::service::Library;
pub use crate::core::domain::{CapacitySwitch, Configuration};
pub use crate::core::library::{BookKind, BookStatus, LibraryError, LibraryResult};
