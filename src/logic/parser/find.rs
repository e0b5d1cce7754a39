use crate::err::ParseError;
use crate::logic::command::find::{self, FindCommand};
use crate::logic::command::Command;

/// `find KEYWORD [MORE_KEYWORDS]...`
pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(find::USAGE));
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}
