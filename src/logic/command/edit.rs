use std::collections::BTreeSet;

use log::info;

use super::CommandResult;
use crate::err::CommandError;
use crate::index::Index;
use crate::model::student::{Credits, MatricId, Name, PrevMods, Student};
use crate::model::tag::Tag;
use crate::model::{show_all, Model};

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the student identified by the index number \
     used in the displayed student list. Existing values will be overwritten by the input values.\n\
     Parameters: INDEX (must be a positive integer) [n/NAME] [c/CREDITS] [pm/PREVMODS] \
     [m/MATRICID] [t/TAG]...\n\
     Example: edit 1 c/24 pm/CS1010, CS2030";

/// The fields to change on a student. `None` leaves a field as it is.
///
/// `tags: Some(empty set)` clears every tag, which is not the same as
/// `tags: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub credits: Option<Credits>,
    pub prev_mods: Option<PrevMods>,
    pub matric_id: Option<MatricId>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditStudentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.credits.is_some()
            || self.prev_mods.is_some()
            || self.matric_id.is_some()
            || self.tags.is_some()
    }

    /// Builds the successor of `student` with this patch applied.
    pub fn apply_to(&self, student: &Student) -> Student {
        Student::new(
            self.name.clone().unwrap_or_else(|| student.name().clone()),
            self.credits.unwrap_or(student.credits()),
            self.prev_mods
                .clone()
                .unwrap_or_else(|| student.prev_mods().clone()),
            self.matric_id
                .clone()
                .unwrap_or_else(|| student.matric_id().clone()),
            self.tags.clone().unwrap_or_else(|| student.tags().clone()),
        )
        .with_current_modules(student.current_modules().to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditStudentDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditStudentDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_student(self.index)
            .ok_or(CommandError::InvalidStudentIndex)?
            .clone();
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_student(&edited) && model.has_student(&edited) {
            return Err(CommandError::DuplicateStudent);
        }

        model.set_student(&target, edited.clone())?;
        model.update_filtered_student_list(show_all());
        info!("Edited student {}", edited.matric_id());

        Ok(CommandResult::new(format!("Edited Student: {}", edited)))
    }
}
