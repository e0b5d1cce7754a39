use std::fmt;

/// A marker that introduces an argument, such as `n/` in `n/Alice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_CREDITS: Prefix = Prefix::new("c/");
pub const PREFIX_PREV_MODS: Prefix = Prefix::new("pm/");
pub const PREFIX_MATRIC_ID: Prefix = Prefix::new("m/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_APPEAL: Prefix = Prefix::new("a/");
pub const PREFIX_MODULE: Prefix = Prefix::new("mod/");
pub const PREFIX_STUDENT: Prefix = Prefix::new("s/");

/// Result of splitting an argument string by prefixes.
///
/// Keeps every occurrence in input order, so repeated prefixes are
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMultimap {
    /// text before the first prefix
    preamble: String,
    entries: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.all_values(prefix).pop()
    }

    /// Every value given for `prefix` in input order. Empty if absent.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.entries.iter().any(|(p, _)| *p == prefix)
    }

    /// Every (prefix, value) pair in input order
    pub fn entries(&self) -> &[(Prefix, String)] {
        &self.entries
    }
}

/// Splits `args` into a preamble and prefixed values.
///
/// A prefix is only recognised at the start of `args` or right after
/// whitespace, so `pm/` never matches as `m/`. Values are trimmed. Nothing
/// is validated here: unknown markers simply stay part of whatever text
/// precedes them.
///
/// # Arguments
///
/// * `args` - the argument string, usually with a leading space
/// * `prefixes` - the prefixes to recognise
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| find_prefix_positions(args, *prefix))
        .collect();
    positions.sort_by_key(|(position, _)| *position);
    positions.dedup_by_key(|(position, _)| *position);

    let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
    let preamble = args[..preamble_end].trim().to_string();

    let entries = positions
        .iter()
        .enumerate()
        .map(|(i, (position, prefix))| {
            let value_start = position + prefix.as_str().len();
            let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
            (*prefix, args[value_start..value_end].trim().to_string())
        })
        .collect();

    ArgumentMultimap { preamble, entries }
}

fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    args.match_indices(prefix.as_str())
        .filter(|(position, _)| *position == 0 || args[..*position].ends_with(char::is_whitespace))
        .map(|(position, _)| (position, prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Prefix; 5] = [
        PREFIX_NAME,
        PREFIX_CREDITS,
        PREFIX_PREV_MODS,
        PREFIX_MATRIC_ID,
        PREFIX_TAG,
    ];

    #[test]
    fn test_no_prefixes() {
        let map = tokenize("  some random string /t tag with leading and trailing spaces ", &ALL);
        assert_eq!(
            map.preamble(),
            "some random string /t tag with leading and trailing spaces"
        );
        assert!(map.entries().is_empty());
        assert_eq!(map.value(PREFIX_TAG), None);
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn test_single_prefix() {
        let map = tokenize(" 1 n/Alice Pauline ", &ALL);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Alice Pauline"));
        assert!(!map.is_present(PREFIX_CREDITS));
    }

    #[test]
    fn test_repeated_prefixes_keep_order() {
        let map = tokenize(" 2 t/friends c/20 t/owesMoney c/24", &ALL);
        assert_eq!(map.all_values(PREFIX_TAG), vec!["friends", "owesMoney"]);
        assert_eq!(map.value(PREFIX_CREDITS), Some("24"));
        assert_eq!(map.all_values(PREFIX_CREDITS), vec!["20", "24"]);
    }

    #[test]
    fn test_prefix_must_follow_whitespace() {
        // pm/ must not be read as m/, and n/ inside a word is not a prefix
        let map = tokenize(" 1 pm/CS1010 m/A0000001B n/Ann/Bob", &ALL);
        assert_eq!(map.value(PREFIX_PREV_MODS), Some("CS1010"));
        assert_eq!(map.value(PREFIX_MATRIC_ID), Some("A0000001B"));
        assert_eq!(map.value(PREFIX_NAME), Some("Ann/Bob"));
    }

    #[test]
    fn test_prefix_at_start_and_empty_values() {
        let map = tokenize("t/ n/", &ALL);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_TAG), Some(""));
        assert_eq!(map.value(PREFIX_NAME), Some(""));
    }

    #[test]
    fn test_unknown_prefix_stays_in_text() {
        let map = tokenize(" 1 i/ string n/Bob", &ALL);
        assert_eq!(map.preamble(), "1 i/ string");
        assert_eq!(map.value(PREFIX_NAME), Some("Bob"));
    }

    fn value_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9]{0,6}( [a-z0-9]{1,6}){0,2}"
    }

    proptest! {
        #[test]
        fn prop_tokenize_reconstructs_input(
            preamble in "[0-9]{0,3}",
            pairs in proptest::collection::vec((0usize..ALL.len(), value_strategy()), 0..8),
        ) {
            let mut input = preamble.clone();
            for (i, value) in &pairs {
                input.push(' ');
                input.push_str(ALL[*i].as_str());
                input.push_str(value);
            }

            let map = tokenize(&input, &ALL);
            prop_assert_eq!(map.preamble(), preamble.as_str());

            let mut rebuilt = map.preamble().to_string();
            for (prefix, value) in map.entries() {
                rebuilt.push(' ');
                rebuilt.push_str(prefix.as_str());
                rebuilt.push_str(value);
            }
            prop_assert_eq!(rebuilt, input);

            for (i, prefix) in ALL.iter().enumerate() {
                let expected: Vec<&str> = pairs
                    .iter()
                    .filter(|(j, _)| *j == i)
                    .map(|(_, v)| v.as_str())
                    .collect();
                prop_assert_eq!(map.all_values(*prefix), expected);
            }
        }
    }
}
