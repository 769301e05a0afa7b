use crate::error::ExportError;
use crate::resolve::SpotRow;
use std::fs::File;
use std::path::Path;
use tracing::info;

pub fn export_csv<P: AsRef<Path>>(rows: &[SpotRow], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Number", "Parking", "Floor", "Section", "Types", "Statuses"])?;

    for row in rows {
        writer.write_record([
            &row.number.to_string(),
            &row.parking,
            &row.floor,
            &row.section,
            &row.types,
            &row.statuses,
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    info!(path = %path_ref.display(), rows = rows.len(), "CSV export written");
    Ok(())
}
