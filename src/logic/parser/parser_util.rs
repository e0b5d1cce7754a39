//! Conversions from raw argument text into validated values.
//!
//! Every function trims its input first. Field conversions return the
//! field type's own constraint error unchanged.

use std::collections::BTreeSet;

use crate::err::ParseError;
use crate::index::Index;
use crate::messages;
use crate::model::module::ModuleCode;
use crate::model::student::{Credits, MatricId, Name, PrevMods};
use crate::model::tag::Tag;

/// Parses a 1-based index. Signs, zero and anything non-numeric are rejected.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    let invalid = || ParseError::Constraint(messages::INVALID_INDEX.to_string());
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let one_based: usize = trimmed.parse().map_err(|_| invalid())?;
    Index::from_one_based(one_based).ok_or_else(invalid)
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Name::new(raw.trim())
}

pub fn parse_credits(raw: &str) -> Result<Credits, ParseError> {
    Credits::new(raw.trim())
}

pub fn parse_prev_mods(raw: &str) -> Result<PrevMods, ParseError> {
    PrevMods::new(raw.trim())
}

pub fn parse_matric_id(raw: &str) -> Result<MatricId, ParseError> {
    MatricId::new(raw.trim())
}

pub fn parse_module_code(raw: &str) -> Result<ModuleCode, ParseError> {
    ModuleCode::new(raw.trim())
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Tag::new(raw.trim())
}

/// Parses every tag, stopping at the first invalid one.
pub fn parse_tags<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Tag>, ParseError> {
    raw.into_iter().map(parse_tag).collect()
}
