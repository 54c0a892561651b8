use super::Formatter;
use crate::model::{Note, NoteBook};

/// Fixed user-facing text for [`NoteLookup::NotFound`].
pub const NOTE_MISSING_MESSAGE: &str = "This note does not exist!";

/// Outcome of a single-note lookup. A missing id is an ordinary outcome,
/// not an error; nothing is mutated either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteLookup {
    Found(String),
    NotFound,
}

/// Looks up one note by id and returns its body as-is.
pub fn lookup_note(book: &NoteBook, id: u32) -> NoteLookup {
    match book.get(id) {
        Some(note) => NoteLookup::Found(NoteFormatter.render(note)),
        None => NoteLookup::NotFound,
    }
}

/// A single note: the body, untouched.
pub struct NoteFormatter;

impl Formatter<Note> for NoteFormatter {
    fn render(&self, note: &Note) -> String {
        note.body.clone()
    }
}

/// Every note with its id, in collection order:
///
/// ```text
/// Note ID: 1
/// Buy milk on the way home.
/// ```
pub struct NoteListFormatter;

impl Formatter<NoteBook> for NoteListFormatter {
    fn render(&self, book: &NoteBook) -> String {
        let mut out = String::new();
        for note in book.iter() {
            out.push_str(&format!("Note ID: {}\n{}\n", note.id, note.body));
        }
        out
    }
}

/// One title line per note, collection order.
pub struct NoteTitlesFormatter;

impl Formatter<NoteBook> for NoteTitlesFormatter {
    fn render(&self, book: &NoteBook) -> String {
        let mut out = String::new();
        for note in book.iter() {
            out.push_str(&note.title);
            out.push('\n');
        }
        out
    }
}
