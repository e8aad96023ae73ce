use gridview_engine::ListState;
use gridview_prefs::{MemoryStore, SqliteStore};
use gridview_testing::{assert_ids, sample_requests};
use gridview_types::{
    ColumnDescriptor, Density, FilterDescriptor, ListConfig, PrefStore, SortDirection, ViewMode,
};

fn request_config() -> ListConfig {
    let mut config = ListConfig::new("requests");
    config.columns = vec![
        ColumnDescriptor::new("status", "Status"),
        ColumnDescriptor::new("address", "Address"),
        ColumnDescriptor::new("customerName", "Customer"),
        ColumnDescriptor::new("leadSource", "Lead Source"),
        ColumnDescriptor::new("product", "Product"),
        ColumnDescriptor::new("message", "Message"),
        ColumnDescriptor::new("createdAt", "Created"),
    ];
    config.filters = vec![
        FilterDescriptor::new("status", "Status"),
        FilterDescriptor::new("leadSource", "Lead Source"),
    ];
    config.search_fields = vec!["message".to_string(), "address".to_string()];
    config.default_sort_field = "createdAt".to_string();
    config.default_sort_direction = SortDirection::Descending;
    config
}

#[test]
fn archived_kitchen_search_narrows_to_one_record() {
    // Five requests with statuses New, New, Archived, Quoted, Archived;
    // only one archived request mentions a kitchen.
    let records = sample_requests();
    let mut state = ListState::new(request_config());

    state.set_filter("status", "Archived");
    let snapshot = state.snapshot(&records);
    assert_eq!(snapshot.total, 2);

    state.set_search("kitchen");
    let snapshot = state.snapshot(&records);
    assert_eq!(snapshot.total, 1);
    assert_ids(&snapshot.records, &["req-003"]);
}

#[test]
fn default_sort_is_newest_first() {
    let records = sample_requests();
    let state = ListState::new(request_config());

    let snapshot = state.snapshot(&records);
    assert_ids(
        &snapshot.records,
        &["req-001", "req-002", "req-004", "req-003", "req-005"],
    );
}

#[test]
fn filter_options_follow_the_data() {
    let records = sample_requests();
    let state = ListState::new(request_config());

    let snapshot = state.snapshot(&records);
    let by_field: Vec<(&str, Vec<&str>)> = snapshot
        .filters
        .iter()
        .map(|control| {
            (
                control.field.as_str(),
                control.options.iter().map(|o| o.value.as_str()).collect(),
            )
        })
        .collect();

    assert_eq!(
        by_field,
        vec![
            ("status", vec!["Archived", "New", "Quoted"]),
            ("leadSource", vec!["Phone", "Referral", "Website"]),
        ]
    );
}

#[test]
fn fresh_screen_defaults_then_toggle_persists() {
    let store = MemoryStore::new();

    let mut state = ListState::with_prefs(request_config(), &store);
    assert_eq!(state.view_mode(), ViewMode::Table);
    assert_eq!(state.density(), Density::Compact);

    state.toggle_view_mode(&store);
    assert_eq!(store.get("admin-requests-view-mode"), Some("cards".to_string()));
}

#[test]
fn preferences_survive_a_remount_via_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();

    {
        let mut state = ListState::with_prefs(request_config(), &store);
        state.toggle_view_mode(&store);
        state.set_density(Density::Comfortable, &store);
    }

    // Same screen mounts again: prefs rehydrate, everything else resets
    let mut state = ListState::with_prefs(request_config(), &store);
    state.set_search("deck");
    assert_eq!(state.view_mode(), ViewMode::Cards);
    assert_eq!(state.density(), Density::Comfortable);
    assert_eq!(state.card_page(), 0);

    let remounted = ListState::with_prefs(request_config(), &store);
    assert!(remounted.search_term().is_empty());
}

#[test]
fn entity_namespaces_do_not_collide() {
    let store = MemoryStore::new();

    let mut requests = ListState::with_prefs(request_config(), &store);
    requests.toggle_view_mode(&store);

    let mut quotes_config = request_config();
    quotes_config.entity_name = "quotes".to_string();
    let quotes = ListState::with_prefs(quotes_config, &store);

    assert_eq!(requests.view_mode(), ViewMode::Cards);
    assert_eq!(quotes.view_mode(), ViewMode::Table);
}

#[test]
fn card_pagination_covers_the_filtered_set() {
    let records = sample_requests();
    let mut state = ListState::new(request_config());
    state.set_view_mode(ViewMode::Cards);
    state.set_card_page_size(2);

    let mut seen = Vec::new();
    let first = state.snapshot(&records);
    for page in 0..first.page_count {
        state.set_card_page(page);
        let snapshot = state.snapshot(&records);
        seen.extend(snapshot.records.iter().map(|r| r.id.clone()));
    }

    assert_eq!(seen.len(), records.len());
    assert_eq!(
        seen,
        vec!["req-001", "req-002", "req-004", "req-003", "req-005"]
    );
}
