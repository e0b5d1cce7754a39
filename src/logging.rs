use std::fs::OpenOptions;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::Config;
use crate::err::Result;

/// Installs the global logger: stderr always, plus the configured log file.
pub fn init(config: &Config) -> Result<()> {
    let log_config = ConfigBuilder::new()
        .set_target_level(simplelog::LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.log_level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        loggers.push(WriteLogger::new(config.log_level, log_config, file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
