//! Command dispatch and reply rendering.
//!
//! The router owns the address book. Each command runs to completion against
//! it and produces a single reply; user errors become ordinary reply text.

use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record, UPCOMING_WINDOW_DAYS};
use crate::observability::{MetricsTracker, Timer};
use crate::router::command::{Command, HELP_TEXT};
use crate::search::SearchMatch;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line
    Continue(String),

    /// Print the text and stop
    Exit(String),
}

impl Reply {
    /// The text to print.
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// Routes parsed commands to the address book.
pub struct CommandRouter {
    book: AddressBook,
    metrics: MetricsTracker,
    upcoming_days: u32,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl CommandRouter {
    /// Create a router over `book` using the local calendar date as "today".
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            metrics: MetricsTracker::new(),
            upcoming_days: UPCOMING_WINDOW_DAYS,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Create a router over an empty book with settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AddressBook::new()).with_upcoming_days(config.upcoming_days)
    }

    /// Use a different upcoming-birthday window.
    pub fn with_upcoming_days(mut self, days: u32) -> Self {
        self.upcoming_days = days;
        self
    }

    /// Use `today` instead of the system clock.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// The address book being served.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Session metrics.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Parse and run one input line.
    ///
    /// Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let timer = Timer::new("handle_line");

        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = %e, "Rejected command line");
                self.metrics.track_command("invalid", timer.finish(), false);
                return Some(Reply::Continue(e.to_string()));
            }
        };

        let name = command.name();
        let (reply, success) = match self.execute(command) {
            Ok(reply) => (reply, true),
            Err(e) => {
                if !e.is_not_found() {
                    warn!(command = name, error = %e, "Command failed");
                }
                (Reply::Continue(render_error(name, &e)), false)
            }
        };

        self.metrics.track_command(name, timer.finish(), success);
        Some(reply)
    }

    /// Run one parsed command.
    ///
    /// # Errors
    ///
    /// Any `BookError` raised by the underlying book operation.
    pub fn execute(&mut self, command: Command) -> BookResult<Reply> {
        let text = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => HELP_TEXT.to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => {
                self.book.add_record(&name, &phone, birthday.as_deref())?;
                "Contact added.".to_string()
            }
            Command::Change { name, phone } => {
                self.book.change_phone(&name, &phone)?;
                "Contact updated.".to_string()
            }
            Command::Phone { name } => {
                let record = self.record(&name)?;
                format!("Phone number for {}: {}", name, record.phones_text())
            }
            Command::AllContacts => self.render_all_contacts(),
            Command::AddBirthday { name, date } => {
                self.book.add_birthday(&name, &date)?;
                "Birthday added.".to_string()
            }
            Command::ChangeBirthday { name, date } => {
                self.book.change_birthday(&name, &date)?;
                "Birthday updated.".to_string()
            }
            Command::ShowBirthday { name } => match self.record(&name)?.birthday() {
                Some(birthday) => format!("{}'s birthday: {}", name, birthday),
                None => format!("No birthday specified for {}.", name),
            },
            Command::UpcomingBirthdays => self.render_upcoming_birthdays(),
            Command::Search { term } => {
                let matches = self.book.search(&term)?;
                self.metrics.track_search_query(matches.len());
                render_search(&matches)
            }
            Command::DeleteByName { name } => {
                self.book.delete_by_name(&name)?;
                "Contact deleted.".to_string()
            }
            Command::DeleteByPhone { phone } => {
                self.book.delete_by_phone(&phone)?;
                "Contact deleted.".to_string()
            }
            Command::AddPhone { name, phone } => {
                self.book.add_phone(&name, &phone)?;
                "Phone number added.".to_string()
            }
            Command::RemovePhone { name, phone } => {
                self.book.remove_phone(&name, &phone)?;
                "Phone number removed.".to_string()
            }
            Command::EditPhone { name, old, new } => {
                self.book.edit_phone(&name, &old, &new)?;
                "Phone number updated.".to_string()
            }
            Command::FindPhone { name, phone } => {
                if self.record(&name)?.find_phone(&phone) {
                    "Phone number found.".to_string()
                } else {
                    "Phone number not found.".to_string()
                }
            }
        };

        Ok(Reply::Continue(text))
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        self.book
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn render_all_contacts(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }

        let mut lines = vec!["All contacts:".to_string()];
        for record in self.book.iter() {
            let birthday = record
                .birthday_text()
                .unwrap_or_else(|| "No birthday specified".to_string());
            lines.push(format!(
                "Name: {}, Phones: {}, Birthday: {}",
                record.name(),
                record.phones_text(),
                birthday
            ));
        }
        lines.join("\n")
    }

    fn render_upcoming_birthdays(&self) -> String {
        let today = (self.today)();
        let upcoming = self.book.upcoming_birthdays_within(today, self.upcoming_days);
        debug!(%today, count = upcoming.len(), "Upcoming birthdays computed");

        if upcoming.is_empty() {
            return "No upcoming birthdays".to_string();
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        for record in upcoming {
            if let Some(birthday) = record.birthday() {
                lines.push(format!("{}: {}", record.name(), birthday));
            }
        }
        lines.join("\n")
    }
}

fn render_search(matches: &[SearchMatch]) -> String {
    if matches.is_empty() {
        return "No matching contacts found.".to_string();
    }

    let mut lines = vec!["Matching contacts:".to_string()];
    for m in matches {
        lines.push(format!("{}: {}", m.name(), m.phones_text()));
    }
    lines.join("\n")
}

fn render_error(command: &str, error: &BookError) -> String {
    match (command, error) {
        ("change", BookError::Validation(ValidationError::InvalidPhone(_))) => {
            "Invalid phone number. Please provide a valid 10-digit phone number for the contact."
                .to_string()
        }
        ("add", BookError::Validation(ValidationError::InvalidPhone(phone)))
            if !phone.chars().all(|c| c.is_ascii_digit()) =>
        {
            "Phone number must contain only digits.".to_string()
        }
        ("remove_phone" | "edit_phone", BookError::PhoneNotFound(_)) => {
            "Phone number not found.".to_string()
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> CommandRouter {
        CommandRouter::new(AddressBook::new())
            .with_clock(|| NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn reply(router: &mut CommandRouter, line: &str) -> String {
        router
            .handle_line(line)
            .map(|r| r.text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_blank_line_has_no_reply() {
        let mut router = router();
        assert_eq!(router.handle_line("   "), None);
        assert_eq!(router.metrics().commands_total(), 0);
    }

    #[test]
    fn test_exit_reply() {
        let mut router = router();
        assert_eq!(
            router.handle_line("exit"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
        assert_eq!(
            router.handle_line("close"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
    }

    #[test]
    fn test_change_invalid_phone_message() {
        let mut router = router();
        reply(&mut router, "add Bob 1110002222");
        assert_eq!(
            reply(&mut router, "change Bob 12"),
            "Invalid phone number. Please provide a valid 10-digit phone number for the contact."
        );
    }

    #[test]
    fn test_add_non_digit_phone_message() {
        let mut router = router();
        assert_eq!(
            reply(&mut router, "add Bob abcdefghij"),
            "Phone number must contain only digits."
        );
        assert_eq!(
            reply(&mut router, "add_record Bob 123-456-78"),
            "Phone number must contain only digits."
        );
        assert_eq!(
            reply(&mut router, "add Bob 12345"),
            "Phone number must be exactly 10 digits."
        );
        assert_eq!(
            reply(&mut router, "add_phone Bob abcdefghij"),
            "Contact 'Bob' not found."
        );
        assert!(router.book().is_empty());
    }

    #[test]
    fn test_phone_edit_not_found_message() {
        let mut router = router();
        reply(&mut router, "add Bob 1110002222");
        assert_eq!(
            reply(&mut router, "remove_phone Bob 9999999999"),
            "Phone number not found."
        );
        assert_eq!(
            reply(&mut router, "edit_phone Bob 9999999999 1234567890"),
            "Phone number not found."
        );
    }

    #[test]
    fn test_metrics_count_failures() {
        let mut router = router();
        reply(&mut router, "add Bob 1110002222");
        reply(&mut router, "add Bob 1110002222");
        reply(&mut router, "nonsense");

        assert_eq!(router.metrics().commands_total(), 3);
        assert_eq!(router.metrics().command_errors_total(), 2);
    }

    #[test]
    fn test_upcoming_uses_configured_window() {
        let mut router = router().with_upcoming_days(30);
        reply(&mut router, "add Ann 1112223333 20-06-1990");
        assert_eq!(
            reply(&mut router, "get_upcoming_birthdays"),
            "Upcoming birthdays:\nAnn: 20-06-1990"
        );
    }
}
