use crate::messages;

/// Errors raised while turning a raw command line into a command.
///
/// None of these ever reach the model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed command, carries the usage text of the command involved
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },
    /// The command word matches no known command
    #[error("{}", messages::UNKNOWN_COMMAND)]
    UnknownCommand,
    /// A field value broke the format rule of its own type
    #[error("{0}")]
    Constraint(String),
    /// `edit` was given an index but no field
    #[error("{}", messages::NOT_EDITED)]
    NotEdited,
}

impl ParseError {
    pub fn invalid_format(usage: &str) -> Self {
        Self::InvalidFormat {
            usage: usage.to_string(),
        }
    }
}

/// Invariant violations reported by the unique collections.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An element with the same identity is already stored
    #[error("Operation would result in duplicate {kind}s")]
    Duplicate { kind: &'static str },
    /// The target element is not stored
    #[error("The {kind} could not be found")]
    NotFound { kind: &'static str },
}

/// Errors raised while executing a parsed command against the model.
///
/// The model is left untouched whenever one of these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", messages::INVALID_STUDENT_DISPLAYED_INDEX)]
    InvalidStudentIndex,
    #[error("{}", messages::INVALID_APPEAL_DISPLAYED_INDEX)]
    InvalidAppealIndex,
    #[error("{}", messages::INVALID_MODULE_DISPLAYED_INDEX)]
    InvalidModuleIndex,
    #[error("{}", messages::DUPLICATE_STUDENT)]
    DuplicateStudent,
    /// No module with this code exists
    #[error("Module {0} does not exist in MAMS")]
    ModuleNotFound(String),
    /// No student with this matric id exists
    #[error("No student with matric ID {0} exists in MAMS")]
    StudentNotFound(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised while reading or writing the data file.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// The data file could not be read or written
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a well-formed MAMS document
    #[error("failed to decode data file: {0}")]
    Json(#[from] serde_json::Error),
    /// The file decodes but breaks a model invariant
    #[error("illegal value in data file: {0}")]
    IllegalValue(String),
}

impl From<ModelError> for StorageError {
    fn from(err: ModelError) -> Self {
        Self::IllegalValue(err.to_string())
    }
}

impl From<tempfile::PersistError> for StorageError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}

/// Top level error type
#[derive(thiserror::Error, Debug)]
pub enum MamsError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// An environment setting has an unusable value
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    /// Terminal or log file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MamsError>;
