//! The contact pager, the only stateful piece of the render layer.
//!
//! State lives in an explicit [`PageCursor`] owned by the caller and
//! threaded through every [`render_next_page`] call; the address book is
//! never mutated. Every outcome is an explicit [`PageResult`] variant, so
//! callers must handle "empty book" and "no more pages" deliberately.

use std::collections::VecDeque;

use super::{Formatter, Paginator, RecordFormatter};
use crate::model::AddressBook;

/// Fixed user-facing text for [`PageResult::Empty`].
pub const EMPTY_BOOK_MESSAGE: &str = "Your phone book is empty.";

/// Outcome of one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// One rendered page of contacts.
    Page(String),
    /// The previous call served the final page; the cursor has been reset
    /// and the next call will restart from the first page.
    Exhausted,
    /// The book has no records. The cursor is left untouched.
    Empty,
}

/// Pagination state: the page index plus the remaining name groups of the
/// active traversal. Created idle; a traversal starts on the first render
/// call and is torn down on exhaustion.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    page: usize,
    groups: Option<VecDeque<Vec<String>>>,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a traversal is active.
    pub fn is_paging(&self) -> bool {
        self.groups.is_some()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    fn reset(&mut self) {
        self.page = 0;
        self.groups = None;
    }
}

/// Renders the next page of up to `page_size` contacts.
///
/// The first call of a traversal snapshots the book's names into
/// contiguous, order-preserving groups. Each subsequent call serves one
/// group. The page that reaches the end of the book carries the
/// `"End of the address book"` footer; the call after it returns
/// [`PageResult::Exhausted`] and resets the cursor, so the traversal can
/// restart from the first page.
pub fn render_next_page(
    book: &AddressBook,
    cursor: &mut PageCursor,
    page_size: usize,
) -> PageResult {
    if book.is_empty() {
        return PageResult::Empty;
    }
    if page_size == 0 {
        // Caller-contract violation, not a user-facing condition.
        tracing::error!("render_next_page called with page_size 0");
        cursor.reset();
        return PageResult::Exhausted;
    }

    let size = book.len();
    let first = cursor.page * page_size + 1;
    let last = (cursor.page * page_size + page_size).min(size);

    let groups = cursor
        .groups
        .get_or_insert_with(|| name_groups(book, page_size));

    match groups.pop_front() {
        Some(group) => {
            let mut out = format!("Showing contacts {}-{} from {} records:\n", first, last, size);
            for name in &group {
                match book.get(name) {
                    Some(record) => out.push_str(&RecordFormatter.render(record)),
                    // The group was derived from the book; a miss means the
                    // data layer handed us an inconsistent snapshot.
                    None => {
                        tracing::warn!(name = %name, "record listed for paging is missing from book")
                    }
                }
            }
            if last == size {
                out.push_str("End of the address book");
                cursor.page = 0;
            } else {
                out.push_str(&format!("Press 'Enter' to show next {} contacts", page_size));
                cursor.page += 1;
            }
            PageResult::Page(out)
        }
        None => {
            cursor.reset();
            PageResult::Exhausted
        }
    }
}

fn name_groups(book: &AddressBook, page_size: usize) -> VecDeque<Vec<String>> {
    book.names()
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .chunks(page_size)
        .map(<[String]>::to_vec)
        .collect()
}

/// Convenience bundle of book, page size and cursor for callers that hold
/// the borrow for a whole session.
pub struct ContactPager<'a> {
    book: &'a AddressBook,
    page_size: usize,
    cursor: PageCursor,
}

impl<'a> ContactPager<'a> {
    pub fn new(book: &'a AddressBook, page_size: usize) -> Self {
        Self {
            book,
            page_size,
            cursor: PageCursor::new(),
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }
}

impl Paginator for ContactPager<'_> {
    fn next_page(&mut self) -> PageResult {
        render_next_page(self.book, &mut self.cursor, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn book_of(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.insert(Record::new(*name));
        }
        book
    }

    fn page_text(result: PageResult) -> String {
        match result {
            PageResult::Page(text) => text,
            other => panic!("expected a page, got {:?}", other),
        }
    }

    #[test]
    fn empty_book_never_starts_paging() {
        let book = AddressBook::new();
        let mut cursor = PageCursor::new();

        assert_eq!(EMPTY_BOOK_MESSAGE, "Your phone book is empty.");
        for _ in 0..3 {
            assert_eq!(render_next_page(&book, &mut cursor, 2), PageResult::Empty);
            assert!(!cursor.is_paging());
            assert_eq!(cursor.page(), 0);
        }
    }

    #[test]
    fn missing_record_is_skipped_without_leaking_text() {
        let book = book_of(&["a", "b", "c", "d", "e"]);
        let mut cursor = PageCursor::new();
        page_text(render_next_page(&book, &mut cursor, 2));

        // The grouping snapshot still names "c", but the book handed to the
        // next call no longer has it.
        let shrunk = book_of(&["a", "b", "d", "e"]);
        let page = page_text(render_next_page(&shrunk, &mut cursor, 2));
        assert!(page.starts_with("Showing contacts 3-4 from 4 records:\n"));
        assert!(page.contains("d:\n"));
        assert!(!page.contains("c:"));
    }

    #[test]
    fn header_arithmetic_per_page() {
        let book = book_of(&["a", "b", "c", "d", "e"]);
        let mut cursor = PageCursor::new();

        let p1 = page_text(render_next_page(&book, &mut cursor, 2));
        assert!(p1.starts_with("Showing contacts 1-2 from 5 records:\n"));
        let p2 = page_text(render_next_page(&book, &mut cursor, 2));
        assert!(p2.starts_with("Showing contacts 3-4 from 5 records:\n"));
        let p3 = page_text(render_next_page(&book, &mut cursor, 2));
        assert!(p3.starts_with("Showing contacts 5-5 from 5 records:\n"));
    }

    #[test]
    fn full_cycle_restarts_identically() {
        let book = book_of(&["a", "b", "c", "d", "e"]);
        let mut cursor = PageCursor::new();

        let run = |cursor: &mut PageCursor| {
            let mut pages = Vec::new();
            loop {
                match render_next_page(&book, cursor, 2) {
                    PageResult::Page(text) => pages.push(text),
                    PageResult::Exhausted => break,
                    PageResult::Empty => panic!("book is not empty"),
                }
            }
            pages
        };

        let first_cycle = run(&mut cursor);
        assert_eq!(first_cycle.len(), 3);
        assert!(first_cycle[0].contains("a:\n"));
        assert!(first_cycle[0].contains("b:\n"));
        assert!(first_cycle[0].ends_with("Press 'Enter' to show next 2 contacts"));
        assert!(first_cycle[2].contains("e:\n"));
        assert!(first_cycle[2].ends_with("End of the address book"));

        // Exhaustion reset the cursor, so the next cycle is identical.
        assert!(!cursor.is_paging());
        assert_eq!(cursor.page(), 0);
        let second_cycle = run(&mut cursor);
        assert_eq!(first_cycle, second_cycle);
    }

    #[test]
    fn page_boundary_at_book_size_ends_on_served_page() {
        let book = book_of(&["a", "b", "c", "d"]);
        let mut cursor = PageCursor::new();

        page_text(render_next_page(&book, &mut cursor, 2));
        let p2 = page_text(render_next_page(&book, &mut cursor, 2));
        // The final records and the end marker arrive in the same call,
        // not as a separate empty page.
        assert!(p2.starts_with("Showing contacts 3-4 from 4 records:\n"));
        assert!(p2.ends_with("End of the address book"));
        assert_eq!(cursor.page(), 0);
        assert!(cursor.is_paging());

        assert_eq!(render_next_page(&book, &mut cursor, 2), PageResult::Exhausted);
        assert!(!cursor.is_paging());
    }

    #[test]
    fn single_page_book() {
        let book = book_of(&["a", "b"]);
        let mut cursor = PageCursor::new();

        let p1 = page_text(render_next_page(&book, &mut cursor, 5));
        assert!(p1.starts_with("Showing contacts 1-2 from 2 records:\n"));
        assert!(p1.ends_with("End of the address book"));
        assert_eq!(render_next_page(&book, &mut cursor, 5), PageResult::Exhausted);
    }

    #[test]
    fn names_per_page_bounded_by_page_size() {
        let book = book_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut cursor = PageCursor::new();
        let mut counts = Vec::new();

        loop {
            match render_next_page(&book, &mut cursor, 3) {
                PageResult::Page(text) => {
                    counts.push(
                        text.lines()
                            .filter(|l| l.ends_with(':') && !l.starts_with("Showing"))
                            .count(),
                    );
                }
                PageResult::Exhausted => break,
                PageResult::Empty => panic!("book is not empty"),
            }
        }
        assert_eq!(counts, vec![3, 3, 1]);
    }

    #[test]
    fn zero_page_size_is_recovered_without_panic() {
        let book = book_of(&["a"]);
        let mut cursor = PageCursor::new();

        assert_eq!(render_next_page(&book, &mut cursor, 0), PageResult::Exhausted);
        assert!(!cursor.is_paging());
        assert_eq!(cursor.page(), 0);
    }

    #[test]
    fn contact_pager_drives_a_session() {
        let book = book_of(&["a", "b", "c"]);
        let mut pager = ContactPager::new(&book, 2);

        assert!(matches!(pager.next_page(), PageResult::Page(_)));
        assert!(pager.cursor().is_paging());
        assert!(matches!(pager.next_page(), PageResult::Page(_)));
        assert_eq!(pager.next_page(), PageResult::Exhausted);
        assert!(!pager.cursor().is_paging());
    }
}
