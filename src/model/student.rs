use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::module::{ModuleCode, MODULE_CODE_CONSTRAINTS};
use super::tag::Tag;
use super::unique_list::Entity;
use crate::err::ParseError;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const CREDITS_CONSTRAINTS: &str =
    "Credits should only contain numbers, and it should be at most 3 digits long";
pub const PREV_MODS_CONSTRAINTS: &str =
    "Previous modules should be a comma separated list of module codes";
pub const MATRIC_ID_CONSTRAINTS: &str =
    "Matric IDs should start with 'A', followed by 7 digits and end with an upper case letter";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{Nd}][\p{Alphabetic}\p{Nd} ]*$").unwrap());
static CREDITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,3}$").unwrap());
static MATRIC_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^A\d{7}[A-Z]$").unwrap());

/// A student's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, ParseError> {
        let name = name.into();
        if !NAME_RE.is_match(&name) {
            return Err(ParseError::Constraint(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Workload credits, at most 3 digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Credits(u16);

impl Credits {
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        let constraint = || ParseError::Constraint(CREDITS_CONSTRAINTS.to_string());
        if !CREDITS_RE.is_match(raw) {
            return Err(constraint());
        }
        raw.parse().map(Self).map_err(|_| constraint())
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

/// Modules the student has already taken
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrevMods(Vec<ModuleCode>);

impl PrevMods {
    /// Parses a comma separated list. Blank input means no previous modules.
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        raw.split(',')
            .map(|code| {
                ModuleCode::new(code.trim()).map_err(|_| {
                    ParseError::Constraint(format!(
                        "{}. {}",
                        PREV_MODS_CONSTRAINTS, MODULE_CODE_CONSTRAINTS
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn codes(&self) -> &[ModuleCode] {
        &self.0
    }
}

/// Matriculation number, the identity of a student
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatricId(String);

impl MatricId {
    pub fn new(id: impl Into<String>) -> Result<Self, ParseError> {
        let id = id.into();
        if !MATRIC_ID_RE.is_match(&id) {
            return Err(ParseError::Constraint(MATRIC_ID_CONSTRAINTS.to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_conversions {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ParseError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.to_string()
                }
            }
        )*
    };
}

string_conversions!(Name, Credits, PrevMods, MatricId);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PrevMods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(ModuleCode::as_str).collect();
        f.write_str(&codes.join(", "))
    }
}

impl fmt::Display for MatricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A student record. Immutable once built, edits produce a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: Name,
    credits: Credits,
    prev_mods: PrevMods,
    matric_id: MatricId,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    /// modules taken this term
    #[serde(default)]
    current_modules: Vec<ModuleCode>,
}

impl Student {
    pub fn new(
        name: Name,
        credits: Credits,
        prev_mods: PrevMods,
        matric_id: MatricId,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            credits,
            prev_mods,
            matric_id,
            tags,
            current_modules: Vec::new(),
        }
    }

    pub fn with_current_modules(mut self, modules: Vec<ModuleCode>) -> Self {
        self.current_modules = modules;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn prev_mods(&self) -> &PrevMods {
        &self.prev_mods
    }

    pub fn matric_id(&self) -> &MatricId {
        &self.matric_id
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn current_modules(&self) -> &[ModuleCode] {
        &self.current_modules
    }

    /// Identity check: two records describe the same student when their
    /// matric ids match, whatever the other fields say.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.matric_id == other.matric_id
    }
}

impl Entity for Student {
    const KIND: &'static str = "student";

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_student(other)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Credits: {} Previous Modules: {} Matric ID: {} Tags: ",
            self.name, self.credits, self.prev_mods, self.matric_id
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
