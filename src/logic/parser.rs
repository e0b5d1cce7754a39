pub mod approve;
pub mod clash;
pub mod edit;
pub mod find;
pub mod parser_util;
pub mod tokenizer;

use log::debug;

use super::command::{self, Command};
use crate::err::ParseError;

/// Turns a raw input line into a [`Command`].
#[derive(Debug, Clone)]
pub struct MamsParser {
    /// department substring used to tell module codes from indices
    department_code: String,
}

impl MamsParser {
    pub fn new(department_code: impl Into<String>) -> Self {
        Self {
            department_code: department_code.into(),
        }
    }

    /// Splits off the command word and hands the rest to that command's parser.
    ///
    /// # Arguments
    ///
    /// * `input` - a full line typed by the user
    ///
    /// # Returns
    ///
    /// The validated command, or the reason the line is not one
    pub fn parse_command(&self, input: &str) -> Result<Command, ParseError> {
        let trimmed = input.trim();
        let (command_word, arguments) = match trimmed.find(char::is_whitespace) {
            Some(split) => trimmed.split_at(split),
            None => (trimmed, ""),
        };
        if command_word.is_empty() {
            return Err(ParseError::invalid_format(command::HELP_USAGE));
        }
        debug!("command word {:?}, arguments {:?}", command_word, arguments);

        match command_word {
            command::approve::COMMAND_WORD => approve::parse_approve(arguments),
            command::reject::COMMAND_WORD => approve::parse_reject(arguments),
            command::edit::COMMAND_WORD => edit::parse_edit(arguments),
            command::clash::COMMAND_WORD => clash::parse_clash(arguments, &self.department_code),
            command::find::COMMAND_WORD => find::parse_find(arguments),
            command::LIST_WORD => Ok(Command::List),
            command::HELP_WORD => Ok(Command::Help),
            command::EXIT_WORD => Ok(Command::Exit),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

impl Default for MamsParser {
    fn default() -> Self {
        Self::new("cs")
    }
}
