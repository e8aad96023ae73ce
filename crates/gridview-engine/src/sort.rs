use gridview_types::{ColumnDescriptor, Record, SortDirection};
use std::cmp::Ordering;

/// Sort records by one column key.
///
/// The value-getter is the matching column descriptor's accessor when one
/// exists, otherwise a direct field read. Comparison is case-insensitive
/// lexicographic over textual forms; ties keep their original relative
/// order (stable). Records without a value sort last in both directions,
/// so missing data never clutters the top of either sort order.
///
/// Deliberately not numeric- or date-aware: "10" sorts before "2", while
/// ISO-format date strings order correctly. Columns relying on this must
/// not be silently "fixed" to typed comparison.
pub fn apply_sort(
    records: Vec<Record>,
    sort_key: &str,
    direction: SortDirection,
    columns: &[ColumnDescriptor],
) -> Vec<Record> {
    let mut keyed: Vec<(Option<String>, Record)> = records
        .into_iter()
        .map(|record| (sort_text(&record, sort_key, columns), record))
        .collect();

    keyed.sort_by(|a, b| compare_sort_keys(&a.0, &b.0, direction));
    keyed.into_iter().map(|(_, record)| record).collect()
}

fn sort_text(record: &Record, sort_key: &str, columns: &[ColumnDescriptor]) -> Option<String> {
    let raw = match columns.iter().find(|column| column.key == sort_key) {
        Some(column) => column.accessor.resolve(record),
        None => record.text(sort_key),
    };
    raw.map(|value| value.to_lowercase())
}

fn compare_sort_keys(
    a: &Option<String>,
    b: &Option<String>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Nulls last regardless of direction
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match direction {
            SortDirection::Ascending => x.cmp(y),
            SortDirection::Descending => x.cmp(y).reverse(),
        },
    }
}
