use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::err::StorageError;
use crate::model::appeal::Appeal;
use crate::model::module::Module;
use crate::model::student::Student;
use crate::model::Mams;
use crate::sample_data;

/// On-disk layout of the data file
#[derive(Debug, Default, Serialize, Deserialize)]
struct MamsDocument {
    #[serde(default)]
    students: Vec<Student>,
    #[serde(default)]
    appeals: Vec<Appeal>,
    #[serde(default)]
    modules: Vec<Module>,
}

impl From<&Mams> for MamsDocument {
    fn from(mams: &Mams) -> Self {
        Self {
            students: mams.students().to_vec(),
            appeals: mams.appeals().to_vec(),
            modules: mams.modules().to_vec(),
        }
    }
}

/// Keeps the whole registry in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonMamsStorage {
    path: PathBuf,
}

impl JsonMamsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the registry back.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the file does not exist yet
    pub fn read_mams(&self) -> Result<Option<Mams>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: MamsDocument =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                // field constraint messages surface as data errors
                if e.is_data() {
                    StorageError::IllegalValue(e.to_string())
                } else {
                    StorageError::Json(e)
                }
            })?;
        let mams = Mams::from_parts(document.students, document.appeals, document.modules)?;
        Ok(Some(mams))
    }

    /// Writes the registry, replacing the previous file in one step.
    pub fn save_mams(&self, mams: &Mams) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // create the data directory if it doesn't exist
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &MamsDocument::from(mams))?;
            writer.flush()?;
        }
        tmp.persist(&self.path)?;
        info!("Saved MAMS data to {}", self.path.display());
        Ok(())
    }
}

/// The registry to start a session with.
///
/// A missing file starts from the bundled sample data, an unreadable one from
/// an empty registry.
pub fn load_initial_mams(storage: &JsonMamsStorage) -> Mams {
    match storage.read_mams() {
        Ok(Some(mams)) => mams,
        Ok(None) => {
            info!(
                "Data file {} not found, starting with sample data",
                storage.path().display()
            );
            sample_data::sample_mams().unwrap_or_else(|e| {
                warn!("Sample data is invalid ({}), starting empty", e);
                Mams::new()
            })
        }
        Err(e) => {
            warn!(
                "Data file {} could not be read ({}), starting with an empty MAMS",
                storage.path().display(),
                e
            );
            Mams::new()
        }
    }
}
