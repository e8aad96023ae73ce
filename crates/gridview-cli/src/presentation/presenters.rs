use crate::presentation::view_models::{
    ActiveFilterViewModel, ColumnViewModel, EntityViewModel, ListViewModel, PrefsViewModel,
    RowViewModel,
};
use gridview_engine::{ListSnapshot, ListState};
use gridview_types::{
    DEFAULT_PREFIX, Density, ListConfig, PrefStore, Record, SETTING_DENSITY, SETTING_VIEW_MODE,
    ViewMode, pref_key,
};

/// Convert an engine snapshot into the list view model.
///
/// Cell values resolve through the column accessors, so derived columns
/// (joined display names) render the same way they sort.
pub fn present_list(state: &ListState, snapshot: &ListSnapshot) -> ListViewModel {
    let config = state.config();

    let columns: Vec<ColumnViewModel> = snapshot
        .visible_columns
        .iter()
        .map(|key| ColumnViewModel {
            key: key.clone(),
            label: config
                .column(key)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| key.clone()),
        })
        .collect();

    let rows = snapshot
        .records
        .iter()
        .map(|record| RowViewModel {
            id: record.id.clone(),
            cells: snapshot
                .visible_columns
                .iter()
                .map(|key| resolve_cell(config, record, key))
                .collect(),
        })
        .collect();

    let search_term = if state.search_term().is_empty() {
        None
    } else {
        Some(state.search_term().to_string())
    };

    let active_filters = state
        .active_filters()
        .iter()
        .map(|(field, value)| ActiveFilterViewModel {
            field: field.clone(),
            value: value.clone(),
        })
        .collect();

    ListViewModel {
        entity: snapshot.entity.clone(),
        effective_mode: snapshot.effective_mode,
        density: snapshot.density,
        sort_key: snapshot.sort_key.clone(),
        sort_direction: snapshot.sort_direction,
        search_term,
        active_filters,
        total: snapshot.total,
        page: snapshot.page,
        page_count: snapshot.page_count,
        page_size: snapshot.page_size,
        columns,
        rows,
    }
}

fn resolve_cell(config: &ListConfig, record: &Record, key: &str) -> Option<String> {
    match config.column(key) {
        Some(column) => column.accessor.resolve(record),
        None => record.text(key),
    }
}

/// Read the persisted display preferences for one entity, marking which
/// values fall back to the documented defaults
pub fn present_prefs(entity: &str, store: &dyn PrefStore) -> PrefsViewModel {
    let view_key = pref_key(DEFAULT_PREFIX, entity, SETTING_VIEW_MODE);
    let density_key = pref_key(DEFAULT_PREFIX, entity, SETTING_DENSITY);

    let stored_view = store.get(&view_key);
    let stored_density = store.get(&density_key);

    PrefsViewModel {
        entity: entity.to_string(),
        view_mode_persisted: stored_view.is_some(),
        view_mode: stored_view.unwrap_or_else(|| ViewMode::default().as_str().to_string()),
        density_persisted: stored_density.is_some(),
        density: stored_density.unwrap_or_else(|| Density::default().as_str().to_string()),
    }
}

pub fn present_entity(config: &ListConfig) -> EntityViewModel {
    EntityViewModel {
        name: config.entity_name.clone(),
        columns: config
            .columns
            .iter()
            .map(|c| ColumnViewModel {
                key: c.key.clone(),
                label: c.label.clone(),
            })
            .collect(),
        filters: config.filters.iter().map(|f| f.field.clone()).collect(),
        search_fields: config.search_fields.clone(),
        default_sort_field: config.default_sort_field.clone(),
        default_sort_direction: config.default_sort_direction,
    }
}
