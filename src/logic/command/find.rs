use super::CommandResult;
use crate::messages;
use crate::model::student::Student;
use crate::model::Model;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all students whose names contain any of the specified \
     keywords (case-insensitive) and displays them as a list with index numbers.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\n\
     Example: find alice bob charlie";

/// Shows only students with a name word matching one of the keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        let keywords = self.keywords.clone();
        model.update_filtered_student_list(Box::new(move |student: &Student| {
            name_matches(student, &keywords)
        }));
        CommandResult::new(messages::students_listed_overview(
            model.filtered_students().count(),
        ))
    }
}

fn name_matches(student: &Student, keywords: &[String]) -> bool {
    student
        .name()
        .as_str()
        .split_whitespace()
        .any(|word| keywords.contains(&word.to_lowercase()))
}
