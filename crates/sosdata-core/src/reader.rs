// crates/sosdata-core/src/reader.rs

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::columns::rename_columns;
use crate::error::{PipelineError, Result};
use crate::orient::orient_sheet;
use crate::schema::{DATE_COLUMN, NULL_SENTINELS, SITE_COLUMN};

/// Read one year's sheet from disk and normalize it into events-as-rows
/// form with canonical column labels. Any read or layout failure is fatal
/// for the whole run; there is no per-file recovery.
pub fn read_sheet(path: &Path) -> Result<DataFrame> {
    let content = std::fs::read(path)?;
    read_sheet_bytes(&content)
}

pub fn read_sheet_bytes(content: &[u8]) -> Result<DataFrame> {
    let cursor = Cursor::new(content);

    let sentinels: Vec<PlSmallStr> = NULL_SENTINELS.iter().map(|s| (*s).into()).collect();
    let parse_options =
        CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(sentinels)));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(cursor)
        .finish()?;

    let df = orient_sheet(df)?;
    let df = rename_columns(df)?;
    clean_sheet(df)
}

/// Every sheet must carry a site and a date per event. Rows missing either
/// are dropped, which is also what discards the trailing summary rows some
/// years append. Remaining gaps are treated as "nothing reported" and
/// filled with zero.
fn clean_sheet(df: DataFrame) -> Result<DataFrame> {
    for required in [SITE_COLUMN, DATE_COLUMN] {
        if df.column(required).is_err() {
            return Err(PipelineError::Processing(format!(
                "sheet has no '{required}' column after renaming"
            )));
        }
    }

    let fills: Vec<Expr> = df
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().as_str();
            let dtype = column.dtype();
            if dtype.is_float() || dtype.is_integer() {
                col(name).fill_null(lit(0))
            } else if dtype == &DataType::String {
                col(name).fill_null(lit("0"))
            } else {
                col(name)
            }
        })
        .collect();

    let cleaned = df
        .lazy()
        .filter(
            col(SITE_COLUMN)
                .is_not_null()
                .and(col(DATE_COLUMN).is_not_null()),
        )
        .with_columns(fills)
        .collect()?;
    Ok(cleaned)
}
