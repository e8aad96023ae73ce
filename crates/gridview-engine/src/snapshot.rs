use crate::options::FilterOption;
use gridview_types::{Density, Record, SortDirection, ViewMode};
use serde::Serialize;

/// Derived option list for one declared filter control
#[derive(Debug, Clone, Serialize)]
pub struct FilterControl {
    pub field: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

/// Render-ready output of one [`ListState`](crate::ListState) and record set.
///
/// `records` holds the card-page slice in cards mode and the full
/// filtered, sorted set in table mode (the table renderer pages on its
/// own). `page` and `page_count` describe cards-mode pagination. Filter
/// option lists are derived from the full input record set, so they track
/// the data rather than collapsing to the already-filtered subset.
#[derive(Debug, Clone, Serialize)]
pub struct ListSnapshot {
    pub entity: String,
    pub effective_mode: ViewMode,
    pub density: Density,
    pub sort_key: String,
    pub sort_direction: SortDirection,

    /// Record count after search and filters, before pagination
    pub total: usize,

    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,

    /// Keys of the columns that should render, in declaration order
    pub visible_columns: Vec<String>,

    pub filters: Vec<FilterControl>,
    pub records: Vec<Record>,
}
