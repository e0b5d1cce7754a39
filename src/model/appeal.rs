use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::module::ModuleCode;
use super::student::MatricId;
use super::unique_list::Entity;
use crate::err::ParseError;

pub const APPEAL_ID_CONSTRAINTS: &str = "Appeal IDs should start with 'C' followed by 6 digits";

static APPEAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^C\d{6}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppealId(String);

impl AppealId {
    pub fn new(id: impl Into<String>) -> Result<Self, ParseError> {
        let id = id.into();
        if !APPEAL_ID_RE.is_match(&id) {
            return Err(ParseError::Constraint(APPEAL_ID_CONSTRAINTS.to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AppealId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AppealId> for String {
    fn from(id: AppealId) -> Self {
        id.0
    }
}

impl fmt::Display for AppealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the student is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealType {
    AddModule,
    DropModule,
    ModuleSwap,
    IncreaseWorkload,
}

impl fmt::Display for AppealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AddModule => "add module",
            Self::DropModule => "drop module",
            Self::ModuleSwap => "module swap",
            Self::IncreaseWorkload => "increase workload",
        };
        f.write_str(text)
    }
}

/// Outcome of an appeal. Only `Pending` may move, and only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppealResult {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for AppealResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(text)
    }
}

/// An appeal against a module or workload decision.
///
/// Appeals are value records: resolving one yields a new `Appeal`, the
/// original is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appeal {
    appeal_id: AppealId,
    appeal_type: AppealType,
    student_id: MatricId,
    academic_year: String,
    student_workload: u32,
    description: String,
    #[serde(default)]
    previous_module: Option<ModuleCode>,
    #[serde(default)]
    new_module: Option<ModuleCode>,
    #[serde(default)]
    module_to_add: Option<ModuleCode>,
    #[serde(default)]
    module_to_drop: Option<ModuleCode>,
    /// the sole source of the resolved state
    #[serde(default)]
    result: AppealResult,
    #[serde(default)]
    remark: String,
}

impl Appeal {
    /// A new, unresolved appeal without any module references.
    pub fn new(
        appeal_id: AppealId,
        appeal_type: AppealType,
        student_id: MatricId,
        academic_year: impl Into<String>,
        student_workload: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            appeal_id,
            appeal_type,
            student_id,
            academic_year: academic_year.into(),
            student_workload,
            description: description.into(),
            previous_module: None,
            new_module: None,
            module_to_add: None,
            module_to_drop: None,
            result: AppealResult::Pending,
            remark: String::new(),
        }
    }

    /// Sets the modules involved in a swap
    pub fn with_swap(mut self, previous: ModuleCode, new: ModuleCode) -> Self {
        self.previous_module = Some(previous);
        self.new_module = Some(new);
        self
    }

    pub fn with_module_to_add(mut self, module: ModuleCode) -> Self {
        self.module_to_add = Some(module);
        self
    }

    pub fn with_module_to_drop(mut self, module: ModuleCode) -> Self {
        self.module_to_drop = Some(module);
        self
    }

    /// Returns a copy of this appeal marked resolved with `result` and `remark`.
    pub fn resolved_as(&self, result: AppealResult, remark: impl Into<String>) -> Self {
        Self {
            result,
            remark: remark.into(),
            ..self.clone()
        }
    }

    pub fn appeal_id(&self) -> &AppealId {
        &self.appeal_id
    }

    pub fn appeal_type(&self) -> AppealType {
        self.appeal_type
    }

    pub fn student_id(&self) -> &MatricId {
        &self.student_id
    }

    pub fn academic_year(&self) -> &str {
        &self.academic_year
    }

    pub fn student_workload(&self) -> u32 {
        self.student_workload
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn previous_module(&self) -> Option<&ModuleCode> {
        self.previous_module.as_ref()
    }

    pub fn new_module(&self) -> Option<&ModuleCode> {
        self.new_module.as_ref()
    }

    pub fn module_to_add(&self) -> Option<&ModuleCode> {
        self.module_to_add.as_ref()
    }

    pub fn module_to_drop(&self) -> Option<&ModuleCode> {
        self.module_to_drop.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.result != AppealResult::Pending
    }

    pub fn result(&self) -> AppealResult {
        self.result
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn is_same_appeal(&self, other: &Appeal) -> bool {
        self.appeal_id == other.appeal_id
    }
}

impl Entity for Appeal {
    const KIND: &'static str = "appeal";

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_appeal(other)
    }
}

impl fmt::Display for Appeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Type: {} Student: {} Academic year: {} Workload: {} Description: {}",
            self.appeal_id,
            self.appeal_type,
            self.student_id,
            self.academic_year,
            self.student_workload,
            self.description
        )?;
        let modules = [
            ("Previous module", &self.previous_module),
            ("New module", &self.new_module),
            ("Module to add", &self.module_to_add),
            ("Module to drop", &self.module_to_drop),
        ];
        for (label, module) in modules {
            if let Some(code) = module {
                write!(f, " {}: {}", label, code)?;
            }
        }
        write!(
            f,
            " Resolved: {} Result: {} Remark: {}",
            self.is_resolved(),
            self.result,
            self.remark
        )
    }
}
