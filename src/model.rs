use crate::error::{AdbookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact's birthday: a calendar date whose year may be unknown, plus a
/// derived countdown to the next occurrence.
///
/// Legacy data encoded "year not recorded" as a year `<= 2` on the date
/// itself. Here the year is an explicit `Option`; [`Birthday::from_date`]
/// converts legacy dates and warns when the old sentinel convention is
/// ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
    /// Days until the next occurrence, set by [`Birthday::with_countdown_from`].
    /// `None` means "not computed"; the formatter then omits the
    /// congratulation line.
    pub days_to_next: Option<u32>,
}

impl Birthday {
    /// Creates a birthday, validating that day/month form a real calendar
    /// date. With an unknown year the pair is checked against a leap year,
    /// so Feb 29 is accepted.
    pub fn from_ymd(year: Option<i32>, month: u32, day: u32) -> Result<Self> {
        // 2000 is a leap year
        let check_year = year.unwrap_or(2000);
        if NaiveDate::from_ymd_opt(check_year, month, day).is_none() {
            return Err(AdbookError::Input(format!(
                "invalid calendar date: day {} month {} year {:?}",
                day, month, year
            )));
        }
        Ok(Self {
            day,
            month,
            year,
            days_to_next: None,
        })
    }

    /// Converts a stored date using the legacy "year not recorded" sentinel
    /// (year <= 2). Years 1 and 2 cannot be told apart from real historical
    /// years under that convention, so they are flagged in the log.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = if date.year() <= 2 {
            if date.year() >= 1 {
                tracing::warn!(
                    year = date.year(),
                    "ambiguous sentinel year treated as unknown"
                );
            }
            None
        } else {
            Some(date.year())
        };
        Self {
            day: date.day(),
            month: date.month(),
            year,
            days_to_next: None,
        }
    }

    /// Days from `today` to the next occurrence of this birthday.
    ///
    /// Feb 29 birthdays fall back to Mar 1 in non-leap years.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<u32> {
        for year in [today.year(), today.year() + 1] {
            let candidate = NaiveDate::from_ymd_opt(year, self.month, self.day)
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1));
            if let Some(date) = candidate {
                if date >= today {
                    return Some((date - today).num_days() as u32);
                }
            }
        }
        None
    }

    /// Returns the birthday with `days_to_next` computed relative to `today`.
    pub fn with_countdown_from(mut self, today: NaiveDate) -> Self {
        self.days_to_next = self.days_until_next(today);
        self
    }
}

/// One contact entry. `name` is the identity key; phones and emails keep
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phones.push(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }
}

/// Ordered name → [`Record`] mapping. Insertion order defines iteration
/// order; inserting an existing name replaces the record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

/// A free-text note, independent of contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Ordered id → [`Note`] mapping with the same replace-or-append insertion
/// rule as [`AddressBook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => *slot = note,
            None => self.notes.push(note),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }
}
