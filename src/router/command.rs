//! Command-line parsing.
//!
//! One input line is one command: a case-insensitive command word followed by
//! whitespace-separated arguments.

use crate::error::{CommandError, CommandResult};

const ADD_USAGE: &str =
    "Invalid command. Please provide a name and a phone number for the new record.";
const CHANGE_USAGE: &str = "Invalid command. Please provide both username and new phone number.";
const PHONE_USAGE: &str = "Invalid command. Please provide username.";
const BIRTHDAY_USAGE: &str =
    "Invalid command. Please provide both username and birthday in the format 'DD-MM-YYYY'.";
const SHOW_BIRTHDAY_USAGE: &str = "Invalid command. Please provide the name of the contact.";
const SEARCH_USAGE: &str =
    "Invalid command. Please provide a name or phone number to search for.";
const DELETE_NAME_USAGE: &str =
    "Invalid command. Please provide the name of the contact to delete.";
const DELETE_PHONE_USAGE: &str =
    "Invalid command. Please provide the phone number of the contact to delete.";
const NAME_PHONE_USAGE: &str = "Invalid command. Please provide both username and phone number.";
const EDIT_PHONE_USAGE: &str =
    "Invalid command. Please provide username, old phone number and new phone number.";

/// A parsed command with owned arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        phone: String,
    },
    Phone {
        name: String,
    },
    AllContacts,
    AddBirthday {
        name: String,
        date: String,
    },
    ChangeBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    UpcomingBirthdays,
    Search {
        term: String,
    },
    DeleteByName {
        name: String,
    },
    DeleteByPhone {
        phone: String,
    },
    AddPhone {
        name: String,
        phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    EditPhone {
        name: String,
        old: String,
        new: String,
    },
    FindPhone {
        name: String,
        phone: String,
    },
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// - `CommandError::Usage` when a known command gets the wrong number of
    ///   arguments.
    /// - `CommandError::Unknown` for an unrecognised command word.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            "all_contacts" => Self::AllContacts,
            "get_upcoming_birthdays" => Self::UpcomingBirthdays,
            "add" | "add_record" => match args.as_slice() {
                [name, phone] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: None,
                },
                [name, phone, birthday] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: Some(birthday.to_string()),
                },
                _ => return Err(CommandError::Usage(ADD_USAGE)),
            },
            "change" => {
                let [name, phone] = Self::exact::<2>(&args, CHANGE_USAGE)?;
                Self::Change { name, phone }
            }
            "phone" => {
                let [name] = Self::exact::<1>(&args, PHONE_USAGE)?;
                Self::Phone { name }
            }
            "add_birthday" => {
                let (name, date) = Self::name_and_date(&args)?;
                Self::AddBirthday { name, date }
            }
            "change_birthday" => {
                let (name, date) = Self::name_and_date(&args)?;
                Self::ChangeBirthday { name, date }
            }
            "show_birthday" => {
                let [name] = Self::exact::<1>(&args, SHOW_BIRTHDAY_USAGE)?;
                Self::ShowBirthday { name }
            }
            "search_records" => {
                let [term] = Self::exact::<1>(&args, SEARCH_USAGE)?;
                Self::Search { term }
            }
            "delete_contact_by_name" => {
                let [name] = Self::exact::<1>(&args, DELETE_NAME_USAGE)?;
                Self::DeleteByName { name }
            }
            "delete_contact_by_phone" => {
                let [phone] = Self::exact::<1>(&args, DELETE_PHONE_USAGE)?;
                Self::DeleteByPhone { phone }
            }
            "add_phone" => {
                let [name, phone] = Self::exact::<2>(&args, NAME_PHONE_USAGE)?;
                Self::AddPhone { name, phone }
            }
            "remove_phone" => {
                let [name, phone] = Self::exact::<2>(&args, NAME_PHONE_USAGE)?;
                Self::RemovePhone { name, phone }
            }
            "find_phone" => {
                let [name, phone] = Self::exact::<2>(&args, NAME_PHONE_USAGE)?;
                Self::FindPhone { name, phone }
            }
            "edit_phone" => {
                let [name, old, new] = Self::exact::<3>(&args, EDIT_PHONE_USAGE)?;
                Self::EditPhone { name, old, new }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// The command word, used for logging and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Add { .. } => "add",
            Self::Change { .. } => "change",
            Self::Phone { .. } => "phone",
            Self::AllContacts => "all_contacts",
            Self::AddBirthday { .. } => "add_birthday",
            Self::ChangeBirthday { .. } => "change_birthday",
            Self::ShowBirthday { .. } => "show_birthday",
            Self::UpcomingBirthdays => "get_upcoming_birthdays",
            Self::Search { .. } => "search_records",
            Self::DeleteByName { .. } => "delete_contact_by_name",
            Self::DeleteByPhone { .. } => "delete_contact_by_phone",
            Self::AddPhone { .. } => "add_phone",
            Self::RemovePhone { .. } => "remove_phone",
            Self::EditPhone { .. } => "edit_phone",
            Self::FindPhone { .. } => "find_phone",
        }
    }

    fn exact<const N: usize>(args: &[&str], usage: &'static str) -> CommandResult<[String; N]> {
        if args.len() != N {
            return Err(CommandError::Usage(usage));
        }
        Ok(std::array::from_fn(|i| args[i].to_string()))
    }

    // Everything after the name is the date, so stray tokens fail date
    // validation instead of arity validation.
    fn name_and_date(args: &[&str]) -> CommandResult<(String, String)> {
        match args {
            [name, rest @ ..] if !rest.is_empty() => Ok((name.to_string(), rest.join(" "))),
            _ => Err(CommandError::Usage(BIRTHDAY_USAGE)),
        }
    }
}

/// Command list printed by `help`.
pub const HELP_TEXT: &str = "Available commands:
hello - Greet the bot
add <name> <phone> [DD-MM-YYYY] - Add a new contact
add_record <name> <phone> [DD-MM-YYYY] - Add a new contact
change <name> <phone> - Replace all phone numbers of a contact
phone <name> - Get the phone numbers of a contact
all_contacts - Show all saved contacts
add_phone <name> <phone> - Add another phone number to a contact
remove_phone <name> <phone> - Remove a phone number from a contact
edit_phone <name> <old> <new> - Replace one phone number of a contact
find_phone <name> <phone> - Check whether a contact has a phone number
search_records <term> - Search contacts by name or phone number
add_birthday <name> <DD-MM-YYYY> - Add birthday for a contact
change_birthday <name> <DD-MM-YYYY> - Change birthday for a contact
show_birthday <name> - Show birthday for a contact
get_upcoming_birthdays - Show upcoming birthdays for the next week
delete_contact_by_name <name> - Delete a contact by name
delete_contact_by_phone <phone> - Delete a contact by phone number
close/exit - Close the bot";
