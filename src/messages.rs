//! User visible messages shared by several commands.

pub const UNKNOWN_COMMAND: &str = "Unknown command";
pub const NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const DUPLICATE_STUDENT: &str = "This student already exists in MAMS.";
pub const INVALID_STUDENT_DISPLAYED_INDEX: &str = "The student index provided is invalid";
pub const INVALID_APPEAL_DISPLAYED_INDEX: &str = "The appeal index provided is invalid";
pub const INVALID_MODULE_DISPLAYED_INDEX: &str = "The module index provided is invalid";
pub const INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

pub fn students_listed_overview(count: usize) -> String {
    format!("{} students listed!", count)
}
