use adbook::error::Result;
use adbook::model::{AddressBook, Birthday, Note, NoteBook, Record};
use adbook::render::{
    lookup_note, render_next_page, CommandListFormatter, Formatter, NoteListFormatter, NoteLookup,
    NoteTitlesFormatter, PageCursor, PageResult, EMPTY_BOOK_MESSAGE, NOTE_MISSING_MESSAGE,
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::Parser;
use colored::*;
use std::io::{self, BufRead};

mod args;
use args::Cli;

/// REPL commands with their help-listing order keys.
const COMMANDS: &[(&str, i32)] = &[
    ("help - show this list of commands", 6),
    ("all - page through every contact (Enter shows the next page)", 1),
    ("note <id> - show one note", 3),
    ("notes - show every note with its id", 2),
    ("titles - show note titles only", 4),
    ("exit - leave adbook", 5),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();
    let book = sample_book(today)?;
    let notes = sample_notes();
    let mut cursor = PageCursor::new();

    println!("Commands:");
    println!("{}", CommandListFormatter.render(COMMANDS));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(line) = lines.next() {
        let line = line?;
        let input = line.trim();
        match input.split_once(' ') {
            Some(("note", id)) => show_note(&notes, id),
            None => match input {
                "" | "all" => page_through(&book, &mut cursor, cli.page_size, &mut lines)?,
                "notes" => print!("{}", NoteListFormatter.render(&notes)),
                "titles" => print!("{}", NoteTitlesFormatter.render(&notes)),
                "help" => println!("{}", CommandListFormatter.render(COMMANDS)),
                "exit" => break,
                other => println!("{}", format!("Unknown command: {}", other).dimmed()),
            },
            Some((other, _)) => println!("{}", format!("Unknown command: {}", other).dimmed()),
        }
    }
    Ok(())
}

/// Serves pages until the traversal is exhausted, waiting for Enter
/// between pages. If stdin closes mid-traversal the cursor stays where it
/// is, so a later `all` resumes from the following page.
fn page_through<B: BufRead>(
    book: &AddressBook,
    cursor: &mut PageCursor,
    page_size: usize,
    lines: &mut io::Lines<B>,
) -> Result<()> {
    loop {
        match render_next_page(book, cursor, page_size) {
            PageResult::Page(text) => {
                println!("{}", text);
                // page() > 0 means more pages follow; the final page resets
                // it and the next call reports exhaustion.
                if cursor.page() > 0 {
                    match lines.next() {
                        Some(line) => {
                            line?;
                        }
                        None => return Ok(()),
                    }
                }
            }
            PageResult::Exhausted => return Ok(()),
            PageResult::Empty => {
                println!("{}", EMPTY_BOOK_MESSAGE);
                return Ok(());
            }
        }
    }
}

fn show_note(notes: &NoteBook, id: &str) {
    let Ok(id) = id.trim().parse::<u32>() else {
        println!("{}", "Note ids are numbers, e.g. `note 1`".yellow());
        return;
    };
    match lookup_note(notes, id) {
        NoteLookup::Found(body) => println!("{}", body),
        NoteLookup::NotFound => println!("{}", NOTE_MISSING_MESSAGE.yellow()),
    }
}

/// A small book with birthdays placed relative to `today`, so every
/// congratulation branch shows up in a demo session.
fn sample_book(today: NaiveDate) -> Result<AddressBook> {
    let in_days = |offset: i64| -> Result<Birthday> {
        let date = today + Duration::days(offset);
        Ok(Birthday::from_ymd(None, date.month(), date.day())?.with_countdown_from(today))
    };

    let mut book = AddressBook::new();
    book.insert(
        Record::new("John Doe")
            .with_phone("380501234567")
            .with_phone("380671112233")
            .with_email("john.doe@example.com")
            .with_birthday(in_days(0)?),
    );
    book.insert(
        Record::new("Jane Roe")
            .with_phone("380939876543")
            .with_birthday(in_days(1)?),
    );
    book.insert(
        Record::new("Alice Smith")
            .with_email("alice@example.com")
            .with_birthday(in_days(12)?),
    );
    book.insert(
        Record::new("Bob Brown")
            .with_phone("380441234567")
            .with_birthday(Birthday::from_ymd(Some(1985), 3, 7)?),
    );
    book.insert(Record::new("Carol White").with_email("carol@example.com"));
    book.insert(Record::new("Dave Green").with_phone("380668889900"));
    book.insert(Record::new("Eve Black"));
    Ok(book)
}

fn sample_notes() -> NoteBook {
    let mut notes = NoteBook::new();
    notes.add(Note::new(
        1,
        "groceries",
        "Buy milk and coffee on the way home.",
    ));
    notes.add(Note::new(2, "dentist", "Call the dentist about Thursday."));
    notes.add(Note::new(4, "gift", "Jane's birthday gift: the blue teapot."));
    notes
}
