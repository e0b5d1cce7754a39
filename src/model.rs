pub mod appeal;
pub mod module;
pub mod student;
pub mod tag;
pub mod unique_list;

use appeal::Appeal;
use module::{Module, ModuleCode};
use student::{MatricId, Student};
use unique_list::UniqueList;

use crate::err::ModelError;
use crate::index::Index;

/// The filter applied to a displayed list
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// A predicate that keeps every element
pub fn show_all<T>() -> Predicate<T> {
    Box::new(|_| true)
}

/// All stored data. Duplicates are not allowed within any of the lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mams {
    students: UniqueList<Student>,
    appeals: UniqueList<Appeal>,
    modules: UniqueList<Module>,
}

impl Mams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from plain lists, failing on the first duplicate found.
    pub fn from_parts(
        students: Vec<Student>,
        appeals: Vec<Appeal>,
        modules: Vec<Module>,
    ) -> Result<Self, ModelError> {
        let mut mams = Self::new();
        mams.students.set_all(students)?;
        mams.appeals.set_all(appeals)?;
        mams.modules.set_all(modules)?;
        Ok(mams)
    }

    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains(student)
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), ModelError> {
        self.students.add(student)
    }

    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), ModelError> {
        self.students.set(target, edited)
    }

    pub fn remove_student(&mut self, student: &Student) -> Result<(), ModelError> {
        self.students.remove(student)
    }

    pub fn has_appeal(&self, appeal: &Appeal) -> bool {
        self.appeals.contains(appeal)
    }

    pub fn add_appeal(&mut self, appeal: Appeal) -> Result<(), ModelError> {
        self.appeals.add(appeal)
    }

    pub fn set_appeal(&mut self, target: &Appeal, resolved: Appeal) -> Result<(), ModelError> {
        self.appeals.set(target, resolved)
    }

    pub fn has_module(&self, module: &Module) -> bool {
        self.modules.contains(module)
    }

    pub fn add_module(&mut self, module: Module) -> Result<(), ModelError> {
        self.modules.add(module)
    }

    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn appeals(&self) -> &[Appeal] {
        self.appeals.as_slice()
    }

    pub fn modules(&self) -> &[Module] {
        self.modules.as_slice()
    }

    pub fn find_student(&self, matric_id: &MatricId) -> Option<&Student> {
        self.students.iter().find(|s| s.matric_id() == matric_id)
    }

    pub fn find_module(&self, code: &ModuleCode) -> Option<&Module> {
        self.modules.iter().find(|m| m.code() == code)
    }
}

/// In-memory state a command runs against: the stored data plus one active
/// filter per list.
///
/// Displayed lists are never cached, every call re-applies the current filter
/// to the current data. Indices given by the user always refer to these
/// filtered lists.
pub struct Model {
    mams: Mams,
    student_filter: Predicate<Student>,
    appeal_filter: Predicate<Appeal>,
    module_filter: Predicate<Module>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Mams::new())
    }
}

impl Model {
    pub fn new(mams: Mams) -> Self {
        Self {
            mams,
            student_filter: show_all(),
            appeal_filter: show_all(),
            module_filter: show_all(),
        }
    }

    pub fn mams(&self) -> &Mams {
        &self.mams
    }

    /// Replaces all data and clears every filter
    pub fn set_mams(&mut self, mams: Mams) {
        *self = Self::new(mams);
    }

    // students

    pub fn has_student(&self, student: &Student) -> bool {
        self.mams.has_student(student)
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), ModelError> {
        self.mams.add_student(student)
    }

    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), ModelError> {
        self.mams.set_student(target, edited)
    }

    pub fn filtered_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.mams
            .students()
            .iter()
            .filter(move |s| (self.student_filter)(*s))
    }

    /// The student shown at `index` in the displayed list
    pub fn filtered_student(&self, index: Index) -> Option<&Student> {
        self.filtered_students().nth(index.zero_based())
    }

    pub fn update_filtered_student_list(&mut self, predicate: Predicate<Student>) {
        self.student_filter = predicate;
    }

    // appeals

    pub fn has_appeal(&self, appeal: &Appeal) -> bool {
        self.mams.has_appeal(appeal)
    }

    pub fn add_appeal(&mut self, appeal: Appeal) -> Result<(), ModelError> {
        self.mams.add_appeal(appeal)
    }

    pub fn set_appeal(&mut self, target: &Appeal, resolved: Appeal) -> Result<(), ModelError> {
        self.mams.set_appeal(target, resolved)
    }

    pub fn filtered_appeals(&self) -> impl Iterator<Item = &Appeal> + '_ {
        self.mams
            .appeals()
            .iter()
            .filter(move |a| (self.appeal_filter)(*a))
    }

    pub fn filtered_appeal(&self, index: Index) -> Option<&Appeal> {
        self.filtered_appeals().nth(index.zero_based())
    }

    pub fn update_filtered_appeal_list(&mut self, predicate: Predicate<Appeal>) {
        self.appeal_filter = predicate;
    }

    // modules

    pub fn add_module(&mut self, module: Module) -> Result<(), ModelError> {
        self.mams.add_module(module)
    }

    pub fn filtered_modules(&self) -> impl Iterator<Item = &Module> + '_ {
        self.mams
            .modules()
            .iter()
            .filter(move |m| (self.module_filter)(*m))
    }

    pub fn filtered_module(&self, index: Index) -> Option<&Module> {
        self.filtered_modules().nth(index.zero_based())
    }

    pub fn update_filtered_module_list(&mut self, predicate: Predicate<Module>) {
        self.module_filter = predicate;
    }
}
