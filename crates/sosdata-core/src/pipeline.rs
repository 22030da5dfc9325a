// crates/sosdata-core/src/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::info;

use crate::columns::merge_columns;
use crate::error::{PipelineError, Result};
use crate::reader::read_sheet;
use crate::sites::normalize_sites;

/// Fixed output name, written into the input directory.
pub const MERGED_FILE_NAME: &str = "merged_sos_data.csv";

/// Run every sheet in `dir` through the full pipeline (orient, rename,
/// clean, merge categories, normalize sites) and stack the results into one
/// dataset. Every directory entry is processed; a file that cannot be read
/// as a sheet aborts the whole run. Entries are visited in sorted path
/// order so the output row order is deterministic.
pub fn merge_directory(dir: &Path) -> Result<DataFrame> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    let mut frames: Vec<LazyFrame> = Vec::with_capacity(paths.len());
    for path in &paths {
        info!(file = %path.display(), "processing sheet");
        let sheet = read_sheet(path)?;
        let mut sheet = merge_columns(&sheet)?;
        normalize_sites(&mut sheet)?;
        info!(file = %path.display(), rows = sheet.height(), "sheet normalized");
        frames.push(sheet.lazy());
    }

    if frames.is_empty() {
        return Err(PipelineError::Processing(format!(
            "no input files found in '{}'",
            dir.display()
        )));
    }

    let merged = concat(
        &frames,
        UnionArgs {
            diagonal: true,
            to_supertypes: true,
            ..Default::default()
        },
    )?
    .collect()?;
    Ok(merged)
}

/// Write the merged dataset as CSV into `dir` under [`MERGED_FILE_NAME`],
/// with a leading unnamed row-index column.
pub fn write_merged(merged: &DataFrame, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(MERGED_FILE_NAME);
    let mut indexed = merged.clone().lazy().with_row_index("", None).collect()?;
    let mut file = fs::File::create(&path)?;
    CsvWriter::new(&mut file).finish(&mut indexed)?;
    Ok(path)
}
