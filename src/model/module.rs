use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::unique_list::Entity;
use crate::err::ParseError;

pub const MODULE_CODE_CONSTRAINTS: &str = "Module codes should consist of 2 to 3 letters, \
     followed by 4 digits and an optional letter, e.g. CS2103T";

static MODULE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}\d{4}[A-Za-z]?$").unwrap());

/// A module code, stored upper case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCode(String);

impl ModuleCode {
    pub fn new(code: impl Into<String>) -> Result<Self, ParseError> {
        let code = code.into();
        if !MODULE_CODE_RE.is_match(&code) {
            return Err(ParseError::Constraint(MODULE_CODE_CONSTRAINTS.to_string()));
        }
        Ok(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleCode> for String {
    fn from(code: ModuleCode) -> Self {
        code.0
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A module offered this term and the weekly time slots it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    code: ModuleCode,
    title: String,
    time_slots: Vec<u16>,
}

impl Module {
    pub fn new(code: ModuleCode, title: impl Into<String>, mut time_slots: Vec<u16>) -> Self {
        time_slots.sort_unstable();
        time_slots.dedup();
        Self {
            code,
            title: title.into(),
            time_slots,
        }
    }

    pub fn code(&self) -> &ModuleCode {
        &self.code
    }

    pub fn time_slots(&self) -> &[u16] {
        &self.time_slots
    }

    /// Time slots taken by both modules, ascending
    pub fn clashing_slots(&self, other: &Module) -> Vec<u16> {
        self.time_slots
            .iter()
            .filter(|slot| other.time_slots.binary_search(slot).is_ok())
            .copied()
            .collect()
    }

    pub fn is_same_module(&self, other: &Module) -> bool {
        self.code == other.code
    }
}

impl Entity for Module {
    const KIND: &'static str = "module";

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_module(other)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.time_slots.iter().map(u16::to_string).collect();
        write!(
            f,
            "{} {} Time slots: {}",
            self.code,
            self.title,
            slots.join(", ")
        )
    }
}
