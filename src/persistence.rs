// File: src/persistence.rs
use crate::core::statistics::StatisticsStore;
use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SerializableStateRef<'a> {
    format_version: u32,
    statistics: &'a StatisticsStore,
}

#[derive(Deserialize)]
struct SerializableState {
    format_version: u32,
    statistics: StatisticsStore,
}

/// Writes the trained counts atomically: the model is encoded into a temp
/// file beside `path` and then renamed over it.
pub fn save_to_disk(statistics: &StatisticsStore, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableStateRef {
        format_version: MODEL_FORMAT_VERSION,
        statistics,
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), posts = statistics.total_posts(), "saved model");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<StatisticsStore> {
    let file = File::open(path).map_err(|source| ClassifierError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    if state.format_version != MODEL_FORMAT_VERSION {
        return Err(ClassifierError::IncompatibleModel {
            found: state.format_version,
            expected: MODEL_FORMAT_VERSION,
        });
    }

    tracing::debug!(path = %path.display(), posts = state.statistics.total_posts(), "loaded model");
    Ok(state.statistics)
}
