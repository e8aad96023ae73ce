use gridview_types::Record;

/// Zero-based page slice for cards mode.
///
/// Out-of-range pages yield an empty slice, never an error; the caller is
/// responsible for clamping `page` back into range when the filtered set
/// shrinks. A `page_size` of zero is clamped to 1. Table mode pages
/// independently inside the table renderer and does not use this.
pub fn paginate(records: &[Record], page: usize, page_size: usize) -> &[Record] {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Number of card pages needed for `total` records
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}
