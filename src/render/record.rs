use super::Formatter;
use crate::model::Record;
use chrono::Month;

/// Renders one contact as an indented text block:
///
/// ```text
/// John:
///     Phone numbers: 123456, 654321
///     E-mails: john@example.com
///     Birthday: 07 March 1990
///     John's birthday is in 2 days.
/// ```
///
/// Phone, e-mail and birthday lines appear only when present; the
/// congratulation line only when the countdown has been computed. The year
/// is omitted when unknown. Deterministic and side-effect-free.
pub struct RecordFormatter;

impl Formatter<Record> for RecordFormatter {
    fn render(&self, record: &Record) -> String {
        let mut out = format!("{}:", record.name);

        if !record.phones.is_empty() {
            out.push_str(&format!("\n\tPhone numbers: {}", record.phones.join(", ")));
        }
        if !record.emails.is_empty() {
            out.push_str(&format!("\n\tE-mails: {}", record.emails.join(", ")));
        }
        if let Some(birthday) = &record.birthday {
            // Month is constructor-validated, so the lookup cannot miss.
            let month = Month::try_from(birthday.month as u8)
                .map(|m| m.name())
                .unwrap_or("");
            match birthday.year {
                Some(year) => {
                    out.push_str(&format!("\n\tBirthday: {:02} {} {}", birthday.day, month, year))
                }
                None => out.push_str(&format!("\n\tBirthday: {:02} {}", birthday.day, month)),
            }
            if let Some(days) = birthday.days_to_next {
                let line = match days {
                    0 => format!("Today is {}'s birthday.", record.name),
                    1 => format!("{} has birthday tomorrow.", record.name),
                    n => format!("{}'s birthday is in {} days.", record.name, n),
                };
                out.push_str("\n\t");
                out.push_str(&line);
            }
        }

        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Birthday;

    fn birthday(year: Option<i32>, month: u32, day: u32, days_to_next: Option<u32>) -> Birthday {
        let mut b = Birthday::from_ymd(year, month, day).unwrap();
        b.days_to_next = days_to_next;
        b
    }

    #[test]
    fn renders_name_only_record() {
        let record = Record::new("Ann");
        assert_eq!(RecordFormatter.render(&record), "Ann:\n");
    }

    #[test]
    fn renders_full_record_block() {
        let record = Record::new("John")
            .with_phone("123456")
            .with_phone("654321")
            .with_email("john@example.com")
            .with_birthday(birthday(Some(1990), 3, 7, Some(2)));

        assert_eq!(
            RecordFormatter.render(&record),
            "John:\n\
             \tPhone numbers: 123456, 654321\n\
             \tE-mails: john@example.com\n\
             \tBirthday: 07 March 1990\n\
             \tJohn's birthday is in 2 days.\n"
        );
    }

    #[test]
    fn omits_year_when_unknown() {
        let record = Record::new("Ann").with_birthday(birthday(None, 12, 1, None));
        assert_eq!(
            RecordFormatter.render(&record),
            "Ann:\n\tBirthday: 01 December\n"
        );
    }

    #[test]
    fn congratulates_today() {
        let record = Record::new("Ann").with_birthday(birthday(None, 5, 20, Some(0)));
        let out = RecordFormatter.render(&record);
        assert!(out.ends_with("\tToday is Ann's birthday.\n"));
    }

    #[test]
    fn congratulates_tomorrow() {
        let record = Record::new("Ann").with_birthday(birthday(None, 5, 20, Some(1)));
        let out = RecordFormatter.render(&record);
        assert!(out.ends_with("\tAnn has birthday tomorrow.\n"));
    }

    #[test]
    fn no_congratulation_without_countdown() {
        let record = Record::new("Ann").with_birthday(birthday(None, 5, 20, None));
        assert_eq!(
            RecordFormatter.render(&record),
            "Ann:\n\tBirthday: 20 May\n"
        );
    }

    #[test]
    fn skips_empty_phone_and_email_lines() {
        let record = Record::new("Bob").with_email("bob@example.com");
        assert_eq!(
            RecordFormatter.render(&record),
            "Bob:\n\tE-mails: bob@example.com\n"
        );
    }
}
