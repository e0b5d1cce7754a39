use super::approve::resolve_appeal;
use super::CommandResult;
use crate::err::CommandError;
use crate::index::Index;
use crate::model::appeal::AppealResult;
use crate::model::Model;

pub const COMMAND_WORD: &str = "reject";

pub const USAGE: &str = "reject: Rejects the appeal identified by the index number used in \
     the displayed appeal list.\n\
     Parameters: INDEX (must be a positive integer) [r/REMARK]\n\
     Example: reject 2 r/Workload is already at the maximum";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectCommand {
    index: Index,
    remark: String,
}

impl RejectCommand {
    pub fn new(index: Index, remark: impl Into<String>) -> Self {
        Self {
            index,
            remark: remark.into(),
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        resolve_appeal(model, self.index, &self.remark, AppealResult::Rejected)
    }
}
