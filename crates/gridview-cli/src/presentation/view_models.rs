use gridview_types::{Density, SortDirection, ViewMode};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnViewModel {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowViewModel {
    pub id: String,

    /// One entry per visible column, in column order; `None` when the
    /// record has no value for that column
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveFilterViewModel {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListViewModel {
    pub entity: String,
    pub effective_mode: ViewMode,
    pub density: Density,
    pub sort_key: String,
    pub sort_direction: SortDirection,
    pub search_term: Option<String>,
    pub active_filters: Vec<ActiveFilterViewModel>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub columns: Vec<ColumnViewModel>,
    pub rows: Vec<RowViewModel>,
}

impl ListViewModel {
    pub fn is_narrowed(&self) -> bool {
        self.search_term.is_some() || !self.active_filters.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrefsViewModel {
    pub entity: String,
    pub view_mode: String,
    pub view_mode_persisted: bool,
    pub density: String,
    pub density_persisted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityViewModel {
    pub name: String,
    pub columns: Vec<ColumnViewModel>,
    pub filters: Vec<String>,
    pub search_fields: Vec<String>,
    pub default_sort_field: String,
    pub default_sort_direction: SortDirection,
}
