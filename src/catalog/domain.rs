pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// CatalogService defines the registry operations of a library branch.
//
// Only `add_book` can fail. A title that is not held is reported as an
// absence (None, false or a no-op), never as an error.
pub trait CatalogService {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()>;
    fn find_book(&self, title: &str) -> Option<&BookEntity>;
    fn get_available_books(&self) -> Vec<&BookEntity>;
    fn borrow_book(&mut self, title: &str);
    fn return_book(&mut self, title: &str);
    fn is_borrowed(&self, title: &str) -> bool;
    fn remove_book(&mut self, title: &str) -> Option<BookEntity>;
    fn books_count(&self) -> usize;
}
