use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kyouen::puzzle::{validate_records, PuzzleRecord};
use tracing::{debug, info, warn};

/// Reads a JSON array of puzzle records.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<PuzzleRecord>> {
    let file =
        File::open(path).with_context(|| format!("Could not open '{}'", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("'{}' is not a list of puzzle records", path.display()))?;
    Ok(records)
}

/// Validates the records and logs the outcome for each of them.
///
/// Returns the number of invalid records.
pub fn check_records(records: &[PuzzleRecord]) -> usize {
    let mut num_invalid = 0;
    for (record, result) in records.iter().zip(validate_records(records)) {
        match result {
            Ok(kyouen) => {
                debug!(stage_no = record.stage_no, creator = %record.creator, shape = %kyouen.shape, "Valid puzzle");
            }
            Err(err) => {
                num_invalid += 1;
                warn!(stage_no = record.stage_no, creator = %record.creator, "Invalid puzzle");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    warn!("{}", err_dyn);
                    err_dyn = src_err;
                }
                warn!("{}", err_dyn);
            }
        }
    }
    info!(
        num_records = records.len(),
        num_invalid, "Validated puzzle records"
    );
    num_invalid
}
