// src/services/csv_export.rs
// DOCUMENTATION: CSV export of search results
// PURPOSE: Serialize the results table as UTF-8 CSV for download

use crate::errors::ScrapeError;
use crate::models::{PlaceRecord, COLUMNS};

/// File name offered for downloads and written by the CLI
pub const EXPORT_FILE_NAME: &str = "Scraped_Places.csv";

/// Render places as CSV: header row, then one row per place in order
pub fn export_csv(places: &[PlaceRecord]) -> Result<Vec<u8>, ScrapeError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for place in places {
        writer.write_record(place.to_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| ScrapeError::ExportError(e.to_string()))
}
