use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookKind, BookStatus};

// BookRecord holds the attributes every kind of book carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    title: String,
    author: String,
    book_status: BookStatus,
}

impl BookRecord {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn status(&self) -> BookStatus {
        self.book_status
    }

    pub fn set_status(&mut self, status: BookStatus) {
        self.book_status = status;
    }
}

// Novel keeps its genres in the order they were given, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Novel {
    record: BookRecord,
    genres: Vec<String>,
}

impl Novel {
    /// `genres` is split on every comma; surrounding whitespace and empty
    /// segments are kept as given.
    pub fn new(title: &str, author: &str, genres: &str) -> Self {
        Self {
            record: BookRecord::new(title, author),
            genres: genres.split(',').map(str::to_string).collect(),
        }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn all_genres(&self) -> String {
        self.genres.join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardBook {
    record: BookRecord,
    subtitle: String,
}

impl StandardBook {
    pub fn new(title: &str, author: &str, subtitle: &str) -> Self {
        Self {
            record: BookRecord::new(title, author),
            subtitle: subtitle.to_string(),
        }
    }

    pub fn subtitle(&self) -> &str {
        self.subtitle.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    record: BookRecord,
    company: String,
}

impl Comic {
    pub fn new(title: &str, author: &str, company: &str) -> Self {
        Self {
            record: BookRecord::new(title, author),
            company: company.to_string(),
        }
    }

    pub fn company(&self) -> &str {
        self.company.as_str()
    }
}

impl Display for Novel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<[ {} /{} ]> from: {}", self.title(), self.all_genres(), self.author())
    }
}

impl Display for StandardBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "*[ {} - {} ]* by: {}", self.title(), self.subtitle, self.author())
    }
}

impl Display for Comic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@= {} ({}) =@ writer: {}", self.title(), self.company, self.author())
    }
}

impl Identifiable for Novel {
    fn id(&self) -> String {
        self.title().to_string()
    }
}

impl Identifiable for StandardBook {
    fn id(&self) -> String {
        self.title().to_string()
    }
}

impl Identifiable for Comic {
    fn id(&self) -> String {
        self.title().to_string()
    }
}

impl Book for Novel {
    fn record(&self) -> &BookRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut BookRecord {
        &mut self.record
    }
}

impl Book for StandardBook {
    fn record(&self) -> &BookRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut BookRecord {
        &mut self.record
    }
}

impl Book for Comic {
    fn record(&self) -> &BookRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut BookRecord {
        &mut self.record
    }
}

// BookEntity is the closed set of book kinds a library registry owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookEntity {
    Novel(Novel),
    Standard(StandardBook),
    Comic(Comic),
}

impl BookEntity {
    pub fn kind(&self) -> BookKind {
        match self {
            BookEntity::Novel(_) => BookKind::Novel,
            BookEntity::Standard(_) => BookKind::Standard,
            BookEntity::Comic(_) => BookKind::Comic,
        }
    }

    pub fn as_novel(&self) -> Option<&Novel> {
        match self {
            BookEntity::Novel(novel) => Some(novel),
            _ => None,
        }
    }

    pub fn as_standard(&self) -> Option<&StandardBook> {
        match self {
            BookEntity::Standard(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_comic(&self) -> Option<&Comic> {
        match self {
            BookEntity::Comic(comic) => Some(comic),
            _ => None,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title().to_string()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookEntity::Novel(novel) => Display::fmt(novel, f),
            BookEntity::Standard(book) => Display::fmt(book, f),
            BookEntity::Comic(comic) => Display::fmt(comic, f),
        }
    }
}

impl Book for BookEntity {
    fn record(&self) -> &BookRecord {
        match self {
            BookEntity::Novel(novel) => novel.record(),
            BookEntity::Standard(book) => book.record(),
            BookEntity::Comic(comic) => comic.record(),
        }
    }

    fn record_mut(&mut self) -> &mut BookRecord {
        match self {
            BookEntity::Novel(novel) => novel.record_mut(),
            BookEntity::Standard(book) => book.record_mut(),
            BookEntity::Comic(comic) => comic.record_mut(),
        }
    }
}

impl From<Novel> for BookEntity {
    fn from(other: Novel) -> Self {
        BookEntity::Novel(other)
    }
}

impl From<StandardBook> for BookEntity {
    fn from(other: StandardBook) -> Self {
        BookEntity::Standard(other)
    }
}

impl From<Comic> for BookEntity {
    fn from(other: Comic) -> Self {
        BookEntity::Comic(other)
    }
}
