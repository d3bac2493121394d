use crate::books::domain::model::{BookEntity, Comic, Novel, StandardBook};
use crate::core::library::BookKind;

// `detail` is the kind-specific attribute: comma-separated genres for a novel,
// the subtitle for a standard book, the publishing company for a comic.
pub fn create_book(kind: BookKind, title: &str, author: &str, detail: &str) -> BookEntity {
    match kind {
        BookKind::Novel => {
            BookEntity::from(Novel::new(title, author, detail))
        }
        BookKind::Standard => {
            BookEntity::from(StandardBook::new(title, author, detail))
        }
        BookKind::Comic => {
            BookEntity::from(Comic::new(title, author, detail))
        }
    }
}
