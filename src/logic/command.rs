pub mod approve;
pub mod clash;
pub mod edit;
pub mod find;
pub mod reject;

use approve::ApproveCommand;
use clash::ClashCommand;
use edit::EditCommand;
use find::FindCommand;
use reject::RejectCommand;

use crate::err::CommandError;
use crate::model::{show_all, Model};

pub const LIST_WORD: &str = "list";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const LIST_SUCCESS: &str = "Listed all students, appeals and modules";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting MAMS as requested ...";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

/// What a command reports back once it has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    /// the usage text should be shown to the user
    pub show_help: bool,
    /// the session should end
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Every command the interpreter understands, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Approve(ApproveCommand),
    Reject(RejectCommand),
    Edit(EditCommand),
    Clash(ClashCommand),
    Find(FindCommand),
    List,
    Help,
    Exit,
}

impl Command {
    /// Runs the command.
    ///
    /// Either the whole effect is applied and a result is returned, or an
    /// error is returned and `model` is exactly as it was.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Approve(command) => command.execute(model),
            Self::Reject(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Clash(command) => command.execute(model),
            Self::Find(command) => Ok(command.execute(model)),
            Self::List => {
                model.update_filtered_student_list(show_all());
                model.update_filtered_appeal_list(show_all());
                model.update_filtered_module_list(show_all());
                Ok(CommandResult::new(LIST_SUCCESS))
            }
            Self::Help => Ok(CommandResult {
                feedback_to_user: help_text(),
                show_help: true,
                exit: false,
            }),
            Self::Exit => Ok(CommandResult {
                feedback_to_user: EXIT_ACKNOWLEDGEMENT.to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }

    /// Whether a successful run changes stored data
    pub fn mutates_data(&self) -> bool {
        matches!(self, Self::Approve(_) | Self::Reject(_) | Self::Edit(_))
    }
}

/// Usage of every command, one block per command
pub fn help_text() -> String {
    [
        approve::USAGE,
        reject::USAGE,
        edit::USAGE,
        clash::USAGE,
        find::USAGE,
        "list: Lists all students, appeals and modules.",
        HELP_USAGE,
        "exit: Exits MAMS.",
    ]
    .join("\n\n")
}
