use log::info;

use super::CommandResult;
use crate::err::CommandError;
use crate::index::Index;
use crate::model::appeal::AppealResult;
use crate::model::{show_all, Model};

pub const COMMAND_WORD: &str = "approve";

pub const USAGE: &str = "approve: Approves the appeal identified by the index number used in \
     the displayed appeal list.\n\
     Parameters: INDEX (must be a positive integer) [r/REMARK]\n\
     Example: approve 1 r/Module has reached full capacity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCommand {
    index: Index,
    remark: String,
}

impl ApproveCommand {
    pub fn new(index: Index, remark: impl Into<String>) -> Self {
        Self {
            index,
            remark: remark.into(),
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        resolve_appeal(model, self.index, &self.remark, AppealResult::Approved)
    }
}

/// Moves the displayed appeal at `index` from pending to `outcome`.
///
/// An appeal that is already resolved is left as it is and reported as such.
pub(super) fn resolve_appeal(
    model: &mut Model,
    index: Index,
    remark: &str,
    outcome: AppealResult,
) -> Result<CommandResult, CommandError> {
    let target = model
        .filtered_appeal(index)
        .ok_or(CommandError::InvalidAppealIndex)?
        .clone();

    match target.result() {
        AppealResult::Approved => Ok(CommandResult::new(format!(
            "Appeal {} was approved already",
            target.appeal_id()
        ))),
        AppealResult::Rejected => Ok(CommandResult::new(format!(
            "Appeal {} was rejected already",
            target.appeal_id()
        ))),
        AppealResult::Pending => {
            let resolved = target.resolved_as(outcome, remark);
            model.set_appeal(&target, resolved.clone())?;
            model.update_filtered_appeal_list(show_all());
            info!("Appeal {} resolved as {}", resolved.appeal_id(), outcome);

            let verb = match outcome {
                AppealResult::Rejected => "Rejected",
                _ => "Approved",
            };
            Ok(CommandResult::new(format!("{} appeal: {}", verb, resolved)))
        }
    }
}
