use super::model::{DataError, ObservationTable};

// ---------------------------------------------------------------------------
// Threshold split on a numeric covariate
// ---------------------------------------------------------------------------

/// The two groups produced by [`partition_by_threshold`].
#[derive(Debug, Clone)]
pub struct Partition {
    /// Rows whose covariate is strictly greater than the threshold.
    pub above: ObservationTable,
    /// Rows whose covariate is strictly less than the threshold.
    pub below: ObservationTable,
    /// Rows equal to the threshold, which belong to neither group.
    pub excluded: usize,
}

/// Split `table` by comparing `column` against `threshold`.
///
/// Both comparisons are strict, so a row exactly on the threshold lands in
/// neither group. Relative row order is kept in both groups.
pub fn partition_by_threshold(
    table: &ObservationTable,
    column: &str,
    threshold: f64,
) -> Result<Partition, DataError> {
    let values = table.numeric_column(column)?;

    let above = indices_where(&values, |v| v > threshold);
    let below = indices_where(&values, |v| v < threshold);
    let excluded = values.len() - above.len() - below.len();

    Ok(Partition {
        above: table.select_rows(&above),
        below: table.select_rows(&below),
        excluded,
    })
}

fn indices_where(values: &[f64], pred: impl Fn(f64) -> bool) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| pred(v))
        .map(|(i, _)| i)
        .collect()
}
