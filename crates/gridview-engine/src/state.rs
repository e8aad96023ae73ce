use crate::filter::apply_field_filters;
use crate::options::derive_filter_options;
use crate::paginate::{page_count, paginate};
use crate::search::apply_text_search;
use crate::snapshot::{FilterControl, ListSnapshot};
use crate::sort::apply_sort;
use crate::view_mode::resolve_view_mode;
use crate::visibility::compute_column_visibility;
use gridview_types::{
    DEFAULT_PREFIX, Density, ListConfig, PrefStore, Record, SETTING_DENSITY, SETTING_VIEW_MODE,
    SortDirection, ViewMode, pref_key,
};
use std::collections::BTreeMap;

/// Mutable view-state of one list screen instance.
///
/// Owns the single source of truth for sort state; switching view modes
/// preserves it. Created on screen mount, dropped on unmount; no two
/// instances share state. View mode and density are rehydrated from the
/// preference store at creation, everything else starts at the configured
/// defaults.
#[derive(Debug)]
pub struct ListState {
    config: ListConfig,
    search_term: String,
    active_filters: BTreeMap<String, String>,
    sort_key: String,
    sort_direction: SortDirection,
    view_mode: ViewMode,
    density: Density,
    card_page: usize,
    card_page_size: usize,
    viewport_width: u32,
}

impl ListState {
    /// Fresh state with documented defaults (`table`, `compact`), no
    /// preference rehydration. Viewport starts at the wide breakpoint.
    pub fn new(config: ListConfig) -> Self {
        Self {
            search_term: String::new(),
            active_filters: BTreeMap::new(),
            sort_key: config.default_sort_field.clone(),
            sort_direction: config.default_sort_direction,
            view_mode: ViewMode::default(),
            density: Density::default(),
            card_page: 0,
            card_page_size: config.card_page_size.max(1),
            viewport_width: config.breakpoints.wide,
            config,
        }
    }

    /// Fresh state with view mode and density rehydrated from the store.
    /// Unparseable or absent values fall back to the defaults.
    pub fn with_prefs(config: ListConfig, store: &dyn PrefStore) -> Self {
        let mut state = Self::new(config);

        let view_key = pref_key(DEFAULT_PREFIX, &state.config.entity_name, SETTING_VIEW_MODE);
        if let Some(mode) = store.get(&view_key).and_then(|v| v.parse().ok()) {
            state.view_mode = mode;
        }

        let density_key = pref_key(DEFAULT_PREFIX, &state.config.entity_name, SETTING_DENSITY);
        if let Some(density) = store.get(&density_key).and_then(|v| v.parse().ok()) {
            state.density = density;
        }

        state
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_filters(&self) -> &BTreeMap<String, String> {
        &self.active_filters
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The persisted user preference (not the effective render mode)
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn card_page(&self) -> usize {
        self.card_page
    }

    pub fn card_page_size(&self) -> usize {
        self.card_page_size
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.card_page = 0;
    }

    /// Select a filter value. Empty or "all" clears the field's filter.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.is_empty() || value == gridview_types::FILTER_ALL {
            self.active_filters.remove(&field);
        } else {
            self.active_filters.insert(field, value);
        }
        self.card_page = 0;
    }

    pub fn clear_filter(&mut self, field: &str) {
        self.active_filters.remove(field);
        self.card_page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
        self.card_page = 0;
    }

    /// Explicit sort assignment (programmatic callers)
    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.sort_key = key.into();
        self.sort_direction = direction;
    }

    /// Column-header click semantics: clicking the current sort key flips
    /// the direction, clicking a new key sorts ascending. Ignored for
    /// columns declared not sortable.
    pub fn sort_by(&mut self, key: &str) {
        if let Some(column) = self.config.column(key)
            && !column.sortable
        {
            return;
        }

        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_key = key.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_card_page(&mut self, page: usize) {
        self.card_page = page;
    }

    /// Changing the page size always resets to the first page
    pub fn set_card_page_size(&mut self, size: usize) {
        self.card_page_size = size.max(1);
        self.card_page = 0;
    }

    /// One-shot view mode override; does not touch the persisted preference
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Explicit user toggle; persists the new preference fire-and-forget
    pub fn toggle_view_mode(&mut self, store: &dyn PrefStore) {
        self.view_mode = self.view_mode.flip();
        let key = pref_key(DEFAULT_PREFIX, &self.config.entity_name, SETTING_VIEW_MODE);
        store.set(&key, self.view_mode.as_str());
    }

    pub fn set_density(&mut self, density: Density, store: &dyn PrefStore) {
        self.density = density;
        let key = pref_key(DEFAULT_PREFIX, &self.config.entity_name, SETTING_DENSITY);
        store.set(&key, self.density.as_str());
    }

    /// Push-based viewport input; platform resize listening stays outside
    /// the engine
    pub fn on_viewport_change(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// The actually-rendered mode after reconciling preference and width
    pub fn effective_mode(&self) -> ViewMode {
        resolve_view_mode(self.view_mode, self.viewport_width, self.config.breakpoints.mobile)
    }

    /// Compute the derived, render-ready view of `records`.
    ///
    /// Pure with respect to `self` and `records`; safe to recompute on
    /// every keystroke, filter selection, sort click, or resize.
    pub fn snapshot(&self, records: &[Record]) -> ListSnapshot {
        let searched =
            apply_text_search(records.to_vec(), &self.search_term, &self.config.search_fields);
        let filtered = apply_field_filters(searched, &self.active_filters);
        let sorted = apply_sort(filtered, &self.sort_key, self.sort_direction, &self.config.columns);

        let effective_mode = self.effective_mode();
        let total = sorted.len();

        let visibility = compute_column_visibility(
            &self.config.columns,
            self.viewport_width,
            &self.config.breakpoints,
            &self.config.always_visible_keys,
        );
        let visible_columns = self
            .config
            .columns
            .iter()
            .filter(|column| visibility.get(&column.key).copied().unwrap_or(true))
            .map(|column| column.key.clone())
            .collect();

        let filters = self
            .config
            .filters
            .iter()
            .map(|filter| FilterControl {
                field: filter.field.clone(),
                label: filter.label.clone(),
                options: derive_filter_options(records, &filter.field),
            })
            .collect();

        let page_records = match effective_mode {
            ViewMode::Cards => paginate(&sorted, self.card_page, self.card_page_size).to_vec(),
            ViewMode::Table => sorted,
        };

        ListSnapshot {
            entity: self.config.entity_name.clone(),
            effective_mode,
            density: self.density,
            sort_key: self.sort_key.clone(),
            sort_direction: self.sort_direction,
            total,
            page: self.card_page,
            page_count: page_count(total, self.card_page_size),
            page_size: self.card_page_size,
            visible_columns,
            filters,
            records: page_records,
        }
    }
}
