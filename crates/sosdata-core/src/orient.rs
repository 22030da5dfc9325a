// crates/sosdata-core/src/orient.rs

use polars::prelude::*;

use crate::error::Result;

/// Column summed into by [`consolidate_other`] when a sheet carries one
/// free-text "Other:" item per column.
const OTHER_SUM: &str = "Other Sum";

/// Some of the older sheets have items as rows and cleanup events as
/// columns. Those sheets come in with an unlabeled first header cell, which
/// the reader surfaces as an empty or "Unnamed"-prefixed column name. When
/// that happens, the first column holds the item labels and the frame is
/// transposed so items become columns and events become rows. Sheets that
/// are already events-as-rows pass through untouched.
pub fn orient_sheet(df: DataFrame) -> Result<DataFrame> {
    let has_placeholder = df
        .get_column_names()
        .iter()
        .any(|name| is_placeholder(name.as_str()));
    if !has_placeholder {
        return Ok(df);
    }

    let columns = df.get_columns();
    let labels = columns[0].str()?;
    let events = &columns[1..];

    // Items with no label correspond to pandas' NaN columns after
    // transposing; they carry no category and are dropped.
    let kept_items: Vec<(usize, &str)> = labels
        .iter()
        .enumerate()
        .filter_map(|(row, label)| label.map(|l| (row, l)))
        .collect();

    // One output row per event column, skipping events with no values at
    // all (these are entirely blank spreadsheet columns).
    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(events.len());
    for event in events {
        let mut row = Vec::with_capacity(kept_items.len());
        for &(item_row, _) in &kept_items {
            row.push(cell_to_string(event.get(item_row)?));
        }
        if row.iter().any(Option::is_some) {
            rows.push(row);
        }
    }

    let mut out_columns = Vec::with_capacity(kept_items.len());
    for (slot, &(_, label)) in kept_items.iter().enumerate() {
        let values: Vec<Option<String>> = rows.iter().map(|row| row[slot].clone()).collect();
        out_columns.push(build_column(label, values));
    }

    consolidate_other(DataFrame::new(out_columns)?)
}

fn is_placeholder(name: &str) -> bool {
    name.is_empty() || name.starts_with("Unnamed")
}

fn cell_to_string(value: AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        other => Some(other.to_string()),
    }
}

/// The raw event columns hold item counts, dates and site names all mixed
/// together, so they read in as strings. After transposing, each item
/// column is homogeneous again: columns whose values all parse as numbers
/// become Float64, the rest stay text.
fn build_column(label: &str, values: Vec<Option<String>>) -> Column {
    let numeric = values.iter().flatten().count() > 0
        && values
            .iter()
            .flatten()
            .all(|v| v.trim().parse::<f64>().is_ok());
    if numeric {
        let parsed: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|v| v.trim().parse().ok()))
            .collect();
        Series::new(label.into(), parsed).into()
    } else {
        Series::new(label.into(), values).into()
    }
}

/// Transposed sheets list every write-in "Other" item as its own column,
/// starting at the column labeled exactly "Other:". Sum that column and
/// everything to its right into a single "Other Sum" column and drop the
/// originals, so the merged dataset does not end up with hundreds of
/// one-off categories.
fn consolidate_other(df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let Some(other_idx) = names.iter().position(|name| name == "Other:") else {
        return Ok(df);
    };

    let tail = &names[other_idx..];
    let mut sums = vec![0.0f64; df.height()];
    for name in tail {
        // Non-strict cast: write-in text in an "Other" column counts as
        // nothing rather than failing the sheet.
        let casted = df.column(name)?.cast(&DataType::Float64)?;
        for (row, value) in casted.f64()?.iter().enumerate() {
            if let Some(value) = value {
                sums[row] += value;
            }
        }
    }

    let mut out = df.drop_many(tail.iter().map(String::as_str));
    out.hstack_mut(&mut [Series::new(OTHER_SUM.into(), sums).into()])?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transposed_fixture() -> DataFrame {
        df!(
            "Unnamed: 0" => ["Bottle Caps", "Straws"],
            "Event A" => ["5", "3"],
            "Event B" => ["2", "1"],
        )
        .unwrap()
    }

    #[test]
    fn transposes_items_as_rows_sheets() {
        let out = orient_sheet(transposed_fixture()).unwrap();
        assert_eq!(
            out.get_column_names()
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            ["Bottle Caps", "Straws"]
        );
        assert_eq!(out.height(), 2);
        let caps = out.column("Bottle Caps").unwrap().f64().unwrap();
        let straws = out.column("Straws").unwrap().f64().unwrap();
        // Row 0 is Event A, row 1 is Event B.
        assert_eq!(caps.get(0), Some(5.0));
        assert_eq!(straws.get(0), Some(3.0));
        assert_eq!(caps.get(1), Some(2.0));
        assert_eq!(straws.get(1), Some(1.0));
    }

    #[test]
    fn orient_is_a_no_op_without_placeholder_columns() {
        let df = df!(
            "Cleanup Site" => ["Seacliff"],
            "Bottle Caps" => [5i64],
        )
        .unwrap();
        let out = orient_sheet(df.clone()).unwrap();
        assert!(out.equals(&df));
    }

    #[test]
    fn orient_is_idempotent_to_detect() {
        let once = orient_sheet(transposed_fixture()).unwrap();
        let twice = orient_sheet(once.clone()).unwrap();
        assert!(twice.equals(&once));
    }

    #[test]
    fn drops_unlabeled_items_and_empty_events() {
        let df = df!(
            "" => [Some("Date"), None, Some("Straws")],
            "Event A" => [Some("2020-01-01"), Some("9"), Some("3")],
            "Event B" => [None::<&str>, None, None],
        )
        .unwrap();
        let out = orient_sheet(df).unwrap();
        // The unlabeled item row and the all-blank Event B are gone.
        assert_eq!(out.height(), 1);
        assert_eq!(
            out.get_column_names()
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            ["Date", "Straws"]
        );
        let date = out.column("Date").unwrap().str().unwrap();
        assert_eq!(date.get(0), Some("2020-01-01"));
    }

    #[test]
    fn sums_other_columns_into_other_sum() {
        let df = df!(
            "Unnamed: 0" => ["Straws", "Other:", "Other: rope", "Other: foam"],
            "Event A" => [Some("3"), Some("1"), None, Some("2")],
            "Event B" => [Some("1"), Some("4"), Some("2"), None],
        )
        .unwrap();
        let out = orient_sheet(df).unwrap();
        assert!(out.column("Other:").is_err());
        assert!(out.column("Other: rope").is_err());
        assert!(out.column("Other: foam").is_err());
        let sum = out.column("Other Sum").unwrap().f64().unwrap();
        assert_eq!(sum.get(0), Some(3.0));
        assert_eq!(sum.get(1), Some(6.0));
    }
}
