use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Author, Book};

/// The two record sequences plus their id counters.
///
/// Ids come from per-sequence monotonic counters rather than being derived
/// from the current sequence length, so they stay unique even if removal is
/// ever added later.
struct Shelves {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

/// Append-only, in-memory store for authors and books.
///
/// Every operation takes the inner lock exactly once (a single read or a
/// single append), so each call is atomic with respect to concurrent
/// requests.
pub struct Catalog {
    shelves: RwLock<Shelves>,
}

impl Catalog {
    /// Create an empty catalog. Ids start at 1.
    pub fn new() -> Self {
        Self {
            shelves: RwLock::new(Shelves {
                authors: Vec::new(),
                books: Vec::new(),
                next_author_id: 1,
                next_book_id: 1,
            }),
        }
    }

    /// Create a catalog initialized with the demo fixture:
    /// 3 authors and their 8 books.
    pub fn seeded() -> Self {
        let catalog = Self::new();

        let rowling = catalog.append_author("J. K. Rowling");
        let tolkien = catalog.append_author("J. R. R. Tolkien");
        let weeks = catalog.append_author("Brent Weeks");

        catalog.append_book("Harry Potter and the Chamber of Secrets", rowling.id);
        catalog.append_book("Harry Potter and the Prisoner of Azkaban", rowling.id);
        catalog.append_book("Harry Potter and the Goblet of Fire", rowling.id);
        catalog.append_book("The Fellowship of the Ring", tolkien.id);
        catalog.append_book("The Two Towers", tolkien.id);
        catalog.append_book("The Return of the King", tolkien.id);
        catalog.append_book("The Way of Shadows", weeks.id);
        catalog.append_book("Beyond the Shadows", weeks.id);

        catalog
    }

    // A poisoned lock means a panic happened while holding it; the shelves
    // only ever see a completed push, so the data itself is still sound.
    fn read(&self) -> RwLockReadGuard<'_, Shelves> {
        self.shelves.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelves> {
        self.shelves.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All authors, in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// All books, in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// First author whose id matches, if any.
    pub fn author_by_id(&self, id: i32) -> Option<Author> {
        self.read().authors.iter().find(|a| a.id == id).cloned()
    }

    /// First book whose id matches, if any.
    pub fn book_by_id(&self, id: i32) -> Option<Book> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// All books written by the given author, in insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Append a new author and return it.
    pub fn append_author(&self, name: impl Into<String>) -> Author {
        let mut shelves = self.write();
        let author = Author::new(shelves.next_author_id, name);
        shelves.next_author_id += 1;
        shelves.authors.push(author.clone());
        author
    }

    /// Append a new book and return it.
    ///
    /// `author_id` is taken verbatim; it is not checked against the author
    /// sequence.
    pub fn append_book(&self, name: impl Into<String>, author_id: i32) -> Book {
        let mut shelves = self.write();
        let book = Book::new(shelves.next_book_id, name, author_id);
        shelves.next_book_id += 1;
        shelves.books.push(book.clone());
        book
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
