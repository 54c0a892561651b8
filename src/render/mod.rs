//! # Rendering Module
//!
//! Pure text projections of the model plus the one stateful piece, the
//! contact pager. Everything here returns `String`s (or result enums
//! wrapping them) and leaves printing to the caller.
//!
//! Two small contracts cover the whole surface:
//! - [`Formatter`]: a one-shot projection of a value to text.
//! - [`Paginator`]: a cursor-driven sequence of [`PageResult`]s.

pub mod help;
pub mod notes;
pub mod pager;
pub mod record;

pub use help::CommandListFormatter;
pub use notes::{
    lookup_note, NoteFormatter, NoteListFormatter, NoteLookup, NoteTitlesFormatter,
    NOTE_MISSING_MESSAGE,
};
pub use pager::{
    render_next_page, ContactPager, PageCursor, PageResult, EMPTY_BOOK_MESSAGE,
};
pub use record::RecordFormatter;

/// A stateless projection of a value to text.
pub trait Formatter<T: ?Sized> {
    fn render(&self, value: &T) -> String;
}

/// A source of rendered pages, pulled one call at a time.
pub trait Paginator {
    fn next_page(&mut self) -> PageResult;
}
