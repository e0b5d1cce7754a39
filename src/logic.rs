pub mod command;
pub mod parser;

use log::info;

use command::CommandResult;
use parser::MamsParser;

use crate::err::Result;
use crate::model::Model;
use crate::storage::JsonMamsStorage;

/// Runs user input against the model and keeps the data file in sync.
pub struct LogicManager {
    model: Model,
    storage: JsonMamsStorage,
    parser: MamsParser,
}

impl LogicManager {
    pub fn new(model: Model, storage: JsonMamsStorage, parser: MamsParser) -> Self {
        Self {
            model,
            storage,
            parser,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Parses and runs one line of input.
    ///
    /// The data file is rewritten after every command that changed data. A
    /// failed save is returned as an error but the change stays in memory.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult> {
        info!("[USER COMMAND][{}]", command_text);
        let command = self.parser.parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates_data() {
            self.storage.save_mams(self.model.mams())?;
        }
        Ok(result)
    }
}
