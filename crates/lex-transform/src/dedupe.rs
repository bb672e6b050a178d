use std::collections::BTreeSet;

/// Removes duplicate rows, keeping each row's first occurrence in order.
///
/// Rows are compared on every field; an absent (`None`) field never equals
/// an empty string.
pub fn dedupe_rows<T: Ord>(rows: Vec<T>) -> Vec<T> {
    let keep = first_occurrence_mask(&rows);
    rows.into_iter()
        .zip(keep)
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}

fn first_occurrence_mask<T: Ord>(rows: &[T]) -> Vec<bool> {
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(rows.len());
    for row in rows {
        keep.push(seen.insert(row));
    }
    keep
}
