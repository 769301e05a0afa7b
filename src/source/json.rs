use super::DataSource;
use crate::error::LoadError;
use crate::model::{Hotel, Parking, Snapshot, Spot, StatusRef, TypeRef};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a JSON snapshot file.
///
/// The file holds one object with optional `hotels`, `parkings`, `spots`,
/// `statuses`, `types`, `guests`, `places` and `occupants` members; missing
/// members load as empty.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read.
/// Returns [`LoadError::InvalidSnapshot`] if the content does not decode.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|source| LoadError::InvalidSnapshot {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        hotels = snapshot.hotels.len(),
        parkings = snapshot.parkings.len(),
        spots = snapshot.spots.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// [`DataSource`] backed by a snapshot file, re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonSnapshot {
    fn list_hotels(&self) -> Result<Vec<Hotel>, LoadError> {
        Ok(load_snapshot(&self.path)?.hotels)
    }

    fn list_parkings(&self) -> Result<Vec<Parking>, LoadError> {
        Ok(load_snapshot(&self.path)?.parkings)
    }

    fn list_spots(&self) -> Result<Vec<Spot>, LoadError> {
        Ok(load_snapshot(&self.path)?.spots)
    }

    fn list_statuses(&self) -> Result<Vec<StatusRef>, LoadError> {
        Ok(load_snapshot(&self.path)?.statuses)
    }

    fn list_types(&self) -> Result<Vec<TypeRef>, LoadError> {
        Ok(load_snapshot(&self.path)?.types)
    }

    /// One read for the whole snapshot, slot board data included.
    fn snapshot(&self) -> Result<Snapshot, LoadError> {
        load_snapshot(&self.path)
    }
}
