use std::io::{self, BufRead, Write};

use log::{debug, info};

use mams::config::Config;
use mams::err::Result;
use mams::logging;
use mams::logic::parser::MamsParser;
use mams::logic::LogicManager;
use mams::model::Model;
use mams::storage::{self, JsonMamsStorage};

const PROMPT: &str = "mams> ";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;
    info!("Starting MAMS with data file {}", config.data_file.display());

    let storage = JsonMamsStorage::new(config.data_file.clone());
    let model = Model::new(storage::load_initial_mams(&storage));
    let mut logic = LogicManager::new(model, storage, MamsParser::new(&config.department_code));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        line.clear();
        // EOF ends the session like `exit`
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                writeln!(stdout, "{}", result.feedback_to_user)?;
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                debug!("command failed: {:?}", e);
                writeln!(stdout, "{}", e)?;
            }
        }
    }

    info!("Closing MAMS");
    Ok(())
}
