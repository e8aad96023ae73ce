use gridview_types::{Breakpoints, ColumnDescriptor};
use std::collections::BTreeMap;

/// Columns always visible on narrow viewports by declaration order
pub const LEADING_VISIBLE_COLUMNS: usize = 4;

/// Decide, per column, whether it renders at the current viewport width.
///
/// At or above the wide breakpoint every column is visible regardless of
/// `hideable`. Below it, a column is visible when it is not hideable, its
/// key is in the always-visible set, or it is among the first
/// [`LEADING_VISIBLE_COLUMNS`] declared columns. This is not user-togglable
/// state; it is recomputed in full on every viewport-width change.
pub fn compute_column_visibility(
    columns: &[ColumnDescriptor],
    viewport_width: u32,
    breakpoints: &Breakpoints,
    always_visible_keys: &[String],
) -> BTreeMap<String, bool> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let visible = viewport_width >= breakpoints.wide
                || !column.hideable
                || always_visible_keys.iter().any(|key| key == &column.key)
                || index < LEADING_VISIBLE_COLUMNS;
            (column.key.clone(), visible)
        })
        .collect()
}
