//! # Command Parser
//!
//! Turns one line of fully-qualified input into a [`Command`]. The line is
//! split at the first whitespace run into a command word and its
//! arguments; the word picks an argument parser from a fixed table.
//!
//! Parsing never looks at the model. Whether a module or lecture exists is
//! the command's concern, so `parse_command` only fails on syntax and
//! invalid values, always with [`TrackerError::Parse`].

pub mod args;
pub mod commands;

use crate::commands::help;
use crate::commands::Command;
use crate::error::{Result, TrackerError};
use crate::messages;

/// Every command word the parser accepts.
pub const COMMAND_WORDS: [&str; 16] = [
    "nav",
    "navback",
    "add",
    "edit",
    "delete",
    "clear",
    "find",
    "watched",
    "unwatched",
    "list",
    "exit",
    "help",
    "export",
    "import",
    "tag",
    "untag",
];

pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TrackerError::parse(messages::invalid_format(
            help::USAGE_HELP,
        )));
    }
    let (word, args) = match input.find(char::is_whitespace) {
        Some(index) => (&input[..index], input[index..].trim()),
        None => (input, ""),
    };

    match word {
        "add" => commands::parse_add(args),
        "edit" => commands::parse_edit(args),
        "delete" => commands::parse_delete(args),
        "watched" => commands::parse_mark(args, true),
        "unwatched" => commands::parse_mark(args, false),
        "tag" => commands::parse_tagging(args, false),
        "untag" => commands::parse_tagging(args, true),
        "find" => commands::parse_find(args),
        "list" => commands::parse_list(args),
        "nav" => commands::parse_nav(args),
        "navback" => Ok(Command::BackNav),
        "export" => commands::parse_export(args),
        "import" => commands::parse_import(args),
        "clear" => Ok(Command::Clear),
        "exit" => Ok(Command::Exit),
        "help" => Ok(Command::Help),
        _ => Err(TrackerError::parse(format!(
            "{}\n{}",
            messages::MESSAGE_UNKNOWN_COMMAND,
            messages::MESSAGE_KNOWN_COMMANDS
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_invalid_format() {
        let err = parse_command("   ").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("Invalid command format!"));
    }

    #[test]
    fn unknown_word_lists_known_commands() {
        let err = parse_command("frobnicate m/CS2040S").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Unknown command"));
        for word in COMMAND_WORDS {
            assert!(message.contains(word), "missing {}", word);
        }
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert!(parse_command("ADD m/CS2040S").is_err());
        assert!(parse_command("add m/CS2040S").is_ok());
    }

    #[test]
    fn argument_free_commands_ignore_arguments() {
        assert_eq!(parse_command("clear now").unwrap(), Command::Clear);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("help me").unwrap(), Command::Help);
        assert_eq!(parse_command("navback").unwrap(), Command::BackNav);
    }

    #[test]
    fn first_whitespace_run_splits_word() {
        assert!(matches!(
            parse_command("add\t  m/CS2040S l/Week 1").unwrap(),
            Command::AddLecture(_)
        ));
    }
}
