use super::CommandResult;
use crate::err::CommandError;
use crate::index::Index;
use crate::model::appeal::Appeal;
use crate::model::module::{Module, ModuleCode};
use crate::model::student::Student;
use crate::model::Model;

pub const COMMAND_WORD: &str = "clash";

pub const USAGE: &str = "clash: Checks for timetable clashes. Exactly one of the three forms \
     must be given.\n\
     Parameters: a/APPEAL_INDEX | mod/CODE_OR_INDEX mod/CODE_OR_INDEX | s/STUDENT_INDEX\n\
     Example: clash mod/CS2103 mod/CS2101";

/// What to check for clashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClashTarget {
    /// the module an appeal asks for, against the student's timetable
    Appeal(Index),
    ModuleCodes(ModuleCode, ModuleCode),
    /// positions in the displayed module list
    ModuleIndices(Index, Index),
    /// every pair within a student's current modules
    Student(Index),
}

/// Reports shared time slots. Never changes the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClashCommand {
    target: ClashTarget,
}

impl ClashCommand {
    pub fn new(target: ClashTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &ClashTarget {
        &self.target
    }

    pub fn execute(&self, model: &Model) -> Result<CommandResult, CommandError> {
        let feedback = match &self.target {
            ClashTarget::ModuleCodes(first, second) => {
                let first = find_module(model, first)?;
                let second = find_module(model, second)?;
                module_pair_feedback(first, second)
            }
            ClashTarget::ModuleIndices(first, second) => {
                let first = model
                    .filtered_module(*first)
                    .ok_or(CommandError::InvalidModuleIndex)?;
                let second = model
                    .filtered_module(*second)
                    .ok_or(CommandError::InvalidModuleIndex)?;
                module_pair_feedback(first, second)
            }
            ClashTarget::Student(index) => {
                let student = model
                    .filtered_student(*index)
                    .ok_or(CommandError::InvalidStudentIndex)?;
                student_feedback(model, student)?
            }
            ClashTarget::Appeal(index) => {
                let appeal = model
                    .filtered_appeal(*index)
                    .ok_or(CommandError::InvalidAppealIndex)?;
                appeal_feedback(model, appeal)?
            }
        };
        Ok(CommandResult::new(feedback))
    }
}

fn find_module<'a>(model: &'a Model, code: &ModuleCode) -> Result<&'a Module, CommandError> {
    model
        .mams()
        .find_module(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))
}

fn modules_of<'a>(model: &'a Model, student: &Student) -> Result<Vec<&'a Module>, CommandError> {
    student
        .current_modules()
        .iter()
        .map(|code| find_module(model, code))
        .collect()
}

/// `None` when the two modules share no slot
fn clash_line(first: &Module, second: &Module) -> Option<String> {
    let slots = first.clashing_slots(second);
    if slots.is_empty() {
        return None;
    }
    let slots: Vec<String> = slots.iter().map(u16::to_string).collect();
    Some(format!(
        "{} and {} at time slots: {}",
        first.code(),
        second.code(),
        slots.join(", ")
    ))
}

fn module_pair_feedback(first: &Module, second: &Module) -> String {
    if first.is_same_module(second) {
        return format!(
            "Both values refer to {}, nothing to compare",
            first.code()
        );
    }
    match clash_line(first, second) {
        Some(line) => format!("Clash detected between {}", line),
        None => format!("No clash between {} and {}", first.code(), second.code()),
    }
}

fn student_feedback(model: &Model, student: &Student) -> Result<String, CommandError> {
    let modules = modules_of(model, student)?;
    let mut lines = Vec::new();
    for (i, first) in modules.iter().enumerate() {
        for second in &modules[i + 1..] {
            lines.extend(clash_line(first, second));
        }
    }

    let owner = format!("{} ({})", student.name(), student.matric_id());
    if lines.is_empty() {
        Ok(format!("No clashes found for {}", owner))
    } else {
        Ok(format!("Clashes for {}:\n{}", owner, lines.join("\n")))
    }
}

fn appeal_feedback(model: &Model, appeal: &Appeal) -> Result<String, CommandError> {
    let Some(candidate) = appeal.new_module().or(appeal.module_to_add()) else {
        return Ok(format!(
            "Appeal {} does not add a module, nothing to check for clashes",
            appeal.appeal_id()
        ));
    };
    let student = model
        .mams()
        .find_student(appeal.student_id())
        .ok_or_else(|| CommandError::StudentNotFound(appeal.student_id().to_string()))?;
    let candidate_module = find_module(model, candidate)?;

    // modules the appeal gives up do not count, nor does the candidate itself
    let leaving = [appeal.previous_module(), appeal.module_to_drop()];
    let lines: Vec<String> = modules_of(model, student)?
        .into_iter()
        .filter(|m| !leaving.contains(&Some(m.code())))
        .filter(|m| !m.is_same_module(candidate_module))
        .filter_map(|m| clash_line(candidate_module, m))
        .collect();

    let subject = format!("appeal {} adding {}", appeal.appeal_id(), candidate);
    if lines.is_empty() {
        Ok(format!("No clashes found for {}", subject))
    } else {
        Ok(format!("Clashes for {}:\n{}", subject, lines.join("\n")))
    }
}
