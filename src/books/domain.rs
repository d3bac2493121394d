use std::fmt::Display;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::books::domain::model::BookRecord;

pub mod model;

// Book is the capability set shared by every kind of book a library holds:
// identity fields, borrow state transitions and a display format of its own.
pub trait Book: Identifiable + Display {
    fn record(&self) -> &BookRecord;

    fn record_mut(&mut self) -> &mut BookRecord;

    fn title(&self) -> &str {
        self.record().title()
    }

    fn author(&self) -> &str {
        self.record().author()
    }

    fn status(&self) -> BookStatus {
        self.record().status()
    }

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }

    // Idempotent; borrowing a borrowed book is not an error.
    fn borrowed(&mut self) {
        self.record_mut().set_status(BookStatus::Borrowed);
    }

    fn returned(&mut self) {
        self.record_mut().set_status(BookStatus::Available);
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::fmt::{Display, Formatter};
    use crate::books::domain::Book;
    use crate::books::domain::model::BookRecord;
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    struct Pamphlet {
        record: BookRecord,
    }

    impl Identifiable for Pamphlet {
        fn id(&self) -> String {
            self.title().to_string()
        }
    }

    impl Display for Pamphlet {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "$ {} - {} $", self.title(), self.author())
        }
    }

    impl Book for Pamphlet {
        fn record(&self) -> &BookRecord {
            &self.record
        }

        fn record_mut(&mut self) -> &mut BookRecord {
            &mut self.record
        }
    }

    #[tokio::test]
    async fn test_should_share_book_capabilities() {
        let mut pamphlet = Pamphlet { record: BookRecord::new("t", "a") };
        assert_eq!("t", pamphlet.title());
        assert_eq!("a", pamphlet.author());
        assert_eq!("t", pamphlet.id().as_str());
        assert_eq!("$ t - a $", pamphlet.to_string());

        assert!(!pamphlet.is_borrowed());
        pamphlet.borrowed();
        assert!(pamphlet.is_borrowed());
        assert_eq!(BookStatus::Borrowed, pamphlet.status());
        pamphlet.returned();
        assert!(!pamphlet.is_borrowed());
    }

    #[tokio::test]
    async fn test_should_borrow_and_return_idempotently() {
        let mut pamphlet = Pamphlet { record: BookRecord::new("t", "a") };
        pamphlet.borrowed();
        pamphlet.borrowed();
        assert!(pamphlet.is_borrowed());
        pamphlet.returned();
        pamphlet.returned();
        assert!(!pamphlet.is_borrowed());
    }
}
