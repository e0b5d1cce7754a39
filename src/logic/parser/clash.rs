use log::debug;

use super::parser_util;
use super::tokenizer::{tokenize, PREFIX_APPEAL, PREFIX_MODULE, PREFIX_STUDENT};
use crate::err::ParseError;
use crate::logic::command::clash::{self, ClashCommand, ClashTarget};
use crate::logic::command::Command;

/// `clash a/INDEX | mod/X mod/Y | s/INDEX`
///
/// Exactly one of the three groups may be present, checked before any value
/// is looked at. `department_code` drives [`looks_like_module_code`].
pub fn parse_clash(args: &str, department_code: &str) -> Result<Command, ParseError> {
    let usage = || ParseError::invalid_format(clash::USAGE);
    let map = tokenize(args, &[PREFIX_STUDENT, PREFIX_MODULE, PREFIX_APPEAL]);

    let groups_present = [PREFIX_APPEAL, PREFIX_MODULE, PREFIX_STUDENT]
        .into_iter()
        .filter(|prefix| map.is_present(*prefix))
        .count();
    if groups_present != 1 || !map.preamble().is_empty() {
        return Err(usage());
    }

    let parse_index = |raw: &str| parser_util::parse_index(raw).map_err(|_| usage());

    let target = if let [appeal] = map.all_values(PREFIX_APPEAL).as_slice() {
        ClashTarget::Appeal(parse_index(*appeal)?)
    } else if let [first, second] = map.all_values(PREFIX_MODULE).as_slice() {
        if looks_like_module_code(first, department_code) {
            debug!("clash: reading {:?} and {:?} as module codes", first, second);
            ClashTarget::ModuleCodes(
                parser_util::parse_module_code(first)?,
                parser_util::parse_module_code(second)?,
            )
        } else {
            debug!("clash: reading {:?} and {:?} as module indices", first, second);
            ClashTarget::ModuleIndices(parse_index(*first)?, parse_index(*second)?)
        }
    } else if let [student] = map.all_values(PREFIX_STUDENT).as_slice() {
        ClashTarget::Student(parse_index(*student)?)
    } else {
        return Err(usage());
    };

    Ok(Command::Clash(ClashCommand::new(target)))
}

/// Decides whether a `mod/` pair holds codes or list indices.
///
/// Only the first value is inspected: it is a code iff it contains the
/// department code, ignoring case. Codes from other departments are
/// therefore read as indices and fail index parsing.
pub fn looks_like_module_code(value: &str, department_code: &str) -> bool {
    value
        .to_lowercase()
        .contains(&department_code.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::model::module::{ModuleCode, MODULE_CODE_CONSTRAINTS};

    fn parse(args: &str) -> Result<ClashTarget, ParseError> {
        parse_clash(args, "cs").map(|command| match command {
            Command::Clash(clash) => clash.target().clone(),
            other => panic!("unexpected command {other:?}"),
        })
    }

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    fn usage() -> ParseError {
        ParseError::invalid_format(clash::USAGE)
    }

    #[test]
    fn test_each_group() {
        assert_eq!(parse(" a/2"), Ok(ClashTarget::Appeal(index(2))));
        assert_eq!(parse(" s/1"), Ok(ClashTarget::Student(index(1))));
        assert_eq!(
            parse(" mod/cs2103 mod/CS2101"),
            Ok(ClashTarget::ModuleCodes(
                ModuleCode::new("CS2103").unwrap(),
                ModuleCode::new("CS2101").unwrap()
            ))
        );
        assert_eq!(
            parse(" mod/1 mod/3"),
            Ok(ClashTarget::ModuleIndices(index(1), index(3)))
        );
    }

    #[test]
    fn test_no_group() {
        assert_eq!(parse(""), Err(usage()));
        assert_eq!(parse(" 1"), Err(usage()));
    }

    #[test]
    fn test_groups_are_exclusive() {
        assert_eq!(parse(" mod/CS2103 s/1"), Err(usage()));
        assert_eq!(parse(" a/1 s/1"), Err(usage()));
        assert_eq!(parse(" a/1 mod/1 mod/2"), Err(usage()));
        assert_eq!(parse(" a/1 mod/1 mod/2 s/3"), Err(usage()));
    }

    #[test]
    fn test_wrong_value_counts() {
        assert_eq!(parse(" a/1 a/2"), Err(usage()));
        assert_eq!(parse(" mod/CS2103"), Err(usage()));
        assert_eq!(parse(" mod/1 mod/2 mod/3"), Err(usage()));
        assert_eq!(parse(" s/1 s/2"), Err(usage()));
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(parse(" a/0"), Err(usage()));
        assert_eq!(parse(" s/abc"), Err(usage()));
        assert_eq!(parse(" mod/1 mod/x"), Err(usage()));
        assert_eq!(
            parse(" mod/CS2103 mod/nonsense"),
            Err(ParseError::Constraint(MODULE_CODE_CONSTRAINTS.to_string()))
        );
        assert_eq!(parse(" junk a/1"), Err(usage()));
    }

    #[test]
    fn test_heuristic_depends_on_department() {
        assert!(looks_like_module_code("CS2103", "cs"));
        assert!(looks_like_module_code("cs2103", "CS"));
        // a code from another department is read as an index
        assert!(!looks_like_module_code("MA1521", "cs"));
        assert_eq!(parse(" mod/MA1521 mod/MA2001"), Err(usage()));
        assert_eq!(
            parse_clash(" mod/MA1521 mod/MA2001", "ma"),
            Ok(Command::Clash(ClashCommand::new(ClashTarget::ModuleCodes(
                ModuleCode::new("MA1521").unwrap(),
                ModuleCode::new("MA2001").unwrap()
            ))))
        );
    }
}
