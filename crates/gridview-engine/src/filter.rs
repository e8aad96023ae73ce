use gridview_types::{FILTER_ALL, Record};
use std::collections::BTreeMap;

/// Discrete per-field equality filters.
///
/// Pairs whose value is empty or the [`FILTER_ALL`] sentinel are skipped.
/// A record is retained when its coerced field text equals the selected
/// value exactly, for every remaining pair (logical AND). The filters are
/// independent predicates, so application order never affects the result.
pub fn apply_field_filters(
    mut records: Vec<Record>,
    active_filters: &BTreeMap<String, String>,
) -> Vec<Record> {
    let active: Vec<(&String, &String)> = active_filters
        .iter()
        .filter(|(_, value)| !value.is_empty() && value.as_str() != FILTER_ALL)
        .collect();

    if active.is_empty() {
        return records;
    }

    records.retain(|record| {
        active
            .iter()
            .all(|(field, value)| record.text(field.as_str()).as_deref() == Some(value.as_str()))
    });
    records
}
