use super::parser_util;
use super::tokenizer::{tokenize, PREFIX_REMARK};
use crate::err::ParseError;
use crate::index::Index;
use crate::logic::command::approve::{self, ApproveCommand};
use crate::logic::command::reject::{self, RejectCommand};
use crate::logic::command::Command;

/// `approve INDEX [r/REMARK]`
pub fn parse_approve(args: &str) -> Result<Command, ParseError> {
    let (index, remark) = parse_index_and_remark(args, approve::USAGE)?;
    Ok(Command::Approve(ApproveCommand::new(index, remark)))
}

/// `reject INDEX [r/REMARK]`
pub fn parse_reject(args: &str) -> Result<Command, ParseError> {
    let (index, remark) = parse_index_and_remark(args, reject::USAGE)?;
    Ok(Command::Reject(RejectCommand::new(index, remark)))
}

/// The remark defaults to an empty string, a repeated `r/` keeps the last one.
fn parse_index_and_remark(args: &str, usage: &str) -> Result<(Index, String), ParseError> {
    let map = tokenize(args, &[PREFIX_REMARK]);
    let index = parser_util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(usage))?;
    let remark = map.value(PREFIX_REMARK).unwrap_or_default().to_string();
    Ok((index, remark))
}
