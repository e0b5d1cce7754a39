use std::collections::BTreeSet;

use super::parser_util;
use super::tokenizer::{
    tokenize, ArgumentMultimap, PREFIX_CREDITS, PREFIX_MATRIC_ID, PREFIX_NAME, PREFIX_PREV_MODS,
    PREFIX_TAG,
};
use crate::err::ParseError;
use crate::logic::command::edit::{self, EditCommand, EditStudentDescriptor};
use crate::logic::command::Command;
use crate::model::tag::Tag;

/// `edit INDEX [n/NAME] [c/CREDITS] [pm/PREVMODS] [m/MATRICID] [t/TAG]...`
///
/// A repeated field keeps its last value. Only the kept value is validated.
pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_CREDITS,
            PREFIX_PREV_MODS,
            PREFIX_MATRIC_ID,
            PREFIX_TAG,
        ],
    );

    let index = parser_util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(edit::USAGE))?;

    let descriptor = EditStudentDescriptor {
        name: map.value(PREFIX_NAME).map(parser_util::parse_name).transpose()?,
        credits: map
            .value(PREFIX_CREDITS)
            .map(parser_util::parse_credits)
            .transpose()?,
        prev_mods: map
            .value(PREFIX_PREV_MODS)
            .map(parser_util::parse_prev_mods)
            .transpose()?,
        matric_id: map
            .value(PREFIX_MATRIC_ID)
            .map(parser_util::parse_matric_id)
            .transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

/// No `t/` leaves tags alone. A single empty `t/` clears them.
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    let values = map.all_values(PREFIX_TAG);
    match values.as_slice() {
        [] => Ok(None),
        [""] => Ok(Some(BTreeSet::new())),
        _ => parser_util::parse_tags(values.iter().copied()).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::model::student::{
        Credits, MatricId, Name, PrevMods, CREDITS_CONSTRAINTS, MATRIC_ID_CONSTRAINTS,
        NAME_CONSTRAINTS,
    };
    use crate::model::tag::TAG_CONSTRAINTS;

    fn expect_edit(args: &str, one_based: usize, descriptor: EditStudentDescriptor) {
        let index = Index::from_one_based(one_based).unwrap();
        assert_eq!(
            parse_edit(args),
            Ok(Command::Edit(EditCommand::new(index, descriptor))),
            "parsing {args:?}"
        );
    }

    fn expect_failure(args: &str, err: ParseError) {
        assert_eq!(parse_edit(args), Err(err), "parsing {args:?}");
    }

    fn constraint(message: &str) -> ParseError {
        ParseError::Constraint(message.to_string())
    }

    fn tags(names: &[&str]) -> Option<BTreeSet<Tag>> {
        Some(names.iter().map(|n| Tag::new(*n).unwrap()).collect())
    }

    #[test]
    fn test_missing_parts() {
        let invalid = ParseError::invalid_format(edit::USAGE);
        expect_failure(" n/Amy Bee", invalid.clone());
        expect_failure(" 1", ParseError::NotEdited);
        expect_failure("", invalid);
    }

    #[test]
    fn test_invalid_preamble() {
        let invalid = ParseError::invalid_format(edit::USAGE);
        expect_failure(" -5 n/Amy Bee", invalid.clone());
        expect_failure(" 0 n/Amy Bee", invalid.clone());
        expect_failure(" 1 some random string", invalid.clone());
        expect_failure(" 1 i/ string", invalid);
    }

    #[test]
    fn test_invalid_values() {
        expect_failure(" 1 n/James&", constraint(NAME_CONSTRAINTS));
        expect_failure(" 1 c/91a", constraint(CREDITS_CONSTRAINTS));
        expect_failure(" 1 m/B000", constraint(MATRIC_ID_CONSTRAINTS));
        expect_failure(" 1 t/hubby*", constraint(TAG_CONSTRAINTS));
        // an empty t/ next to real tags is an invalid tag
        expect_failure(" 1 t/friend t/husband t/", constraint(TAG_CONSTRAINTS));
        expect_failure(" 1 t/friend t/ t/husband", constraint(TAG_CONSTRAINTS));
        expect_failure(" 1 t/ t/friend t/husband", constraint(TAG_CONSTRAINTS));
        // the first invalid field wins
        expect_failure(" 1 n/James& c/91a", constraint(NAME_CONSTRAINTS));
        // a valid value followed by an invalid one
        expect_failure(" 1 c/20 c/91a", constraint(CREDITS_CONSTRAINTS));
    }

    #[test]
    fn test_all_fields() {
        expect_edit(
            " 2 c/24 t/husband pm/CS1010, CS2030 m/A0123456X n/Amy Bee t/friend",
            2,
            EditStudentDescriptor {
                name: Some(Name::new("Amy Bee").unwrap()),
                credits: Some(Credits::new("24").unwrap()),
                prev_mods: Some(PrevMods::new("CS1010, CS2030").unwrap()),
                matric_id: Some(MatricId::new("A0123456X").unwrap()),
                tags: tags(&["husband", "friend"]),
            },
        );
    }

    #[test]
    fn test_one_field() {
        expect_edit(
            " 3 n/Amy Bee",
            3,
            EditStudentDescriptor {
                name: Some(Name::new("Amy Bee").unwrap()),
                ..Default::default()
            },
        );
        expect_edit(
            " 3 pm/",
            3,
            EditStudentDescriptor {
                prev_mods: Some(PrevMods::default()),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_repeated_fields_keep_last() {
        expect_edit(
            " 1 c/20 m/A0000001B t/friend c/24 m/A0000002C t/husband",
            1,
            EditStudentDescriptor {
                credits: Some(Credits::new("24").unwrap()),
                matric_id: Some(MatricId::new("A0000002C").unwrap()),
                tags: tags(&["friend", "husband"]),
                ..Default::default()
            },
        );
        // an invalid value is fine if a valid one follows
        expect_edit(
            " 1 c/91a c/24",
            1,
            EditStudentDescriptor {
                credits: Some(Credits::new("24").unwrap()),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_reset_tags() {
        expect_edit(
            " 3 t/",
            3,
            EditStudentDescriptor {
                tags: Some(BTreeSet::new()),
                ..Default::default()
            },
        );
    }
}
