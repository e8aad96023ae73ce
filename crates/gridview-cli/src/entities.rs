use gridview_types::{ColumnDescriptor, FilterDescriptor, ListConfig, Record, SortDirection};
use serde_json::{Value, json};

/// Names of the built-in entity configurations, in display order
pub const ENTITY_NAMES: [&str; 3] = ["requests", "quotes", "projects"];

/// Look up a built-in entity configuration by name
pub fn config_for(name: &str) -> Option<ListConfig> {
    match name {
        "requests" => Some(requests_config()),
        "quotes" => Some(quotes_config()),
        "projects" => Some(projects_config()),
        _ => None,
    }
}

/// Customer display name: the stored `customerName` when present,
/// otherwise joined from `firstName`/`lastName`
fn customer_name(record: &Record) -> Option<Value> {
    if let Some(name) = record.text("customerName") {
        return Some(json!(name));
    }
    match (record.text("firstName"), record.text("lastName")) {
        (Some(first), Some(last)) => Some(json!(format!("{} {}", first, last))),
        (Some(one), None) | (None, Some(one)) => Some(json!(one)),
        (None, None) => None,
    }
}

fn requests_config() -> ListConfig {
    let mut config = ListConfig::new("requests");
    config.columns = vec![
        ColumnDescriptor::new("address", "Address"),
        ColumnDescriptor::new("status", "Status").hideable(false),
        ColumnDescriptor::derived("customerName", "Customer", customer_name),
        ColumnDescriptor::new("product", "Product"),
        ColumnDescriptor::new("leadSource", "Lead Source"),
        ColumnDescriptor::new("message", "Message").sortable(false),
        ColumnDescriptor::new("createdAt", "Created"),
    ];
    config.filters = vec![
        FilterDescriptor::new("status", "Status"),
        FilterDescriptor::new("leadSource", "Lead Source"),
    ];
    config.search_fields = vec![
        "address".to_string(),
        "customerName".to_string(),
        "message".to_string(),
        "product".to_string(),
    ];
    config.default_sort_field = "createdAt".to_string();
    config.default_sort_direction = SortDirection::Descending;
    config
}

fn quotes_config() -> ListConfig {
    let mut config = ListConfig::new("quotes");
    config.columns = vec![
        ColumnDescriptor::new("quoteNumber", "Quote #").hideable(false),
        ColumnDescriptor::new("status", "Status").hideable(false),
        ColumnDescriptor::derived("customerName", "Customer", customer_name),
        ColumnDescriptor::new("totalAmount", "Total"),
        ColumnDescriptor::new("validUntil", "Valid Until"),
        ColumnDescriptor::new("createdAt", "Created"),
    ];
    config.filters = vec![FilterDescriptor::new("status", "Status")];
    config.search_fields = vec!["quoteNumber".to_string(), "customerName".to_string()];
    config.default_sort_field = "createdAt".to_string();
    config.default_sort_direction = SortDirection::Descending;
    config
}

fn projects_config() -> ListConfig {
    let mut config = ListConfig::new("projects");
    config.columns = vec![
        ColumnDescriptor::new("title", "Project").hideable(false),
        ColumnDescriptor::new("status", "Status").hideable(false),
        ColumnDescriptor::new("address", "Address"),
        ColumnDescriptor::new("assignedTo", "Assigned To"),
        ColumnDescriptor::new("startDate", "Start"),
        ColumnDescriptor::new("budget", "Budget"),
    ];
    config.filters = vec![
        FilterDescriptor::new("status", "Status"),
        FilterDescriptor::new("assignedTo", "Assigned To"),
    ];
    config.search_fields = vec!["title".to_string(), "address".to_string()];
    config.default_sort_field = "startDate".to_string();
    config.default_sort_direction = SortDirection::Descending;
    config
}
