// crates/sosdata-core/src/columns.rs

use polars::prelude::*;
use tracing::warn;

use crate::error::Result;
use crate::schema::{COLUMN_ALIASES, MERGE_GROUPS};

/// Rewrite historical column labels to their canonical names. Exact-label
/// matching only; aliases with no matching column are skipped, and columns
/// outside the alias map are left untouched.
pub fn rename_columns(df: DataFrame) -> Result<DataFrame> {
    let (old, new): (Vec<&str>, Vec<&str>) = COLUMN_ALIASES.iter().copied().unzip();
    Ok(df.lazy().rename(&old, &new, false).collect()?)
}

/// Sum historical item-category columns into their canonical category,
/// following the merge groups in [`crate::schema`]. Operates on a copy; the
/// input sheet is left unmodified. Row count never changes here, only
/// column count and column sums.
pub fn merge_columns(sheet: &DataFrame) -> Result<DataFrame> {
    let mut df = sheet.clone();
    for (target, sources) in MERGE_GROUPS {
        merge_group(&mut df, target, sources)?;
    }
    Ok(df)
}

fn merge_group(df: &mut DataFrame, target: &str, sources: &[&str]) -> Result<()> {
    if df.column(target).is_err() {
        let zeros = vec![0.0f64; df.height()];
        df.hstack_mut(&mut [Series::new(target.into(), zeros).into()])?;
    }

    let mut totals = column_totals(df.column(target)?)?;
    let mut merged_any = false;

    for &source in sources {
        let Ok(column) = df.column(source) else {
            warn!("{source} not in data frame");
            continue;
        };
        if source == target {
            continue;
        }
        // Text-typed columns are never summed, by policy: a count stored as
        // text stays in its source column rather than being guessed at.
        let dtype = column.dtype();
        if !(dtype.is_float() || dtype.is_integer()) {
            continue;
        }
        for (total, value) in totals.iter_mut().zip(column_totals(column)?) {
            *total += value;
        }
        df.drop_in_place(source)?;
        merged_any = true;
    }

    if merged_any {
        df.replace(target, Series::new(target.into(), totals))?;
    }
    Ok(())
}

/// Column values as f64, nulls counting as zero.
fn column_totals(column: &Column) -> Result<Vec<f64>> {
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted
        .f64()?
        .iter()
        .map(|value| value.unwrap_or(0.0))
        .collect())
}
