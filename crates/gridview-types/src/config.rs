use crate::display::SortDirection;
use crate::error::{Error, Result};
use crate::record::{value_text, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Sentinel filter value meaning "no restriction on this field"
pub const FILTER_ALL: &str = "all";

/// Card-mode page size used when a screen does not configure one
pub const DEFAULT_CARD_PAGE_SIZE: usize = 10;

/// Columns kept visible on narrow viewports regardless of declaration order
pub const DEFAULT_ALWAYS_VISIBLE_KEYS: [&str; 3] = ["status", "address", "actions"];

/// Derivation function for column values that need resolution beyond a
/// direct field read (e.g. joining a foreign-key display name)
pub type DeriveFn = Arc<dyn Fn(&Record) -> Option<Value> + Send + Sync>;

/// How a column obtains its value from a record
#[derive(Clone)]
pub enum Accessor {
    /// Read the named field directly
    Field(String),
    /// Compute the value from the whole record
    Derived(DeriveFn),
}

impl Accessor {
    /// Resolve the textual form of this column's value for a record
    pub fn resolve(&self, record: &Record) -> Option<String> {
        match self {
            Accessor::Field(name) => record.text(name),
            Accessor::Derived(derive) => derive(record).as_ref().and_then(value_text),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Declares how one field of a record is displayed, sorted, and hidden
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// Logical field name; sort-state identity. Unique per configuration.
    pub key: String,

    /// Human-facing column header / card label
    pub label: String,

    pub accessor: Accessor,
    pub sortable: bool,
    pub hideable: bool,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            accessor: Accessor::Field(key.clone()),
            key,
            label: label.into(),
            sortable: true,
            hideable: true,
        }
    }

    pub fn derived(
        key: impl Into<String>,
        label: impl Into<String>,
        derive: impl Fn(&Record) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            accessor: Accessor::Derived(Arc::new(derive)),
            sortable: true,
            hideable: true,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }
}

/// Declares one discrete-value filter control.
///
/// Legal values are derived from the current record set at render time,
/// plus the implicit [`FILTER_ALL`] sentinel; there is no fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub field: String,
    pub label: String,
}

impl FilterDescriptor {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }
}

/// Viewport thresholds in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Below this width the effective view mode is forced to cards
    pub mobile: u32,

    /// At or above this width every column is visible
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768,
            wide: 1024,
        }
    }
}

/// Full configuration surface one list screen supplies to the engine
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Entity-type name; used for user-facing labels and as the
    /// preference-key namespace, so two entity types never collide
    pub entity_name: String,

    pub columns: Vec<ColumnDescriptor>,
    pub filters: Vec<FilterDescriptor>,

    /// Fields matched by free-text search, in order
    pub search_fields: Vec<String>,

    pub default_sort_field: String,
    pub default_sort_direction: SortDirection,

    pub breakpoints: Breakpoints,
    pub always_visible_keys: Vec<String>,
    pub card_page_size: usize,
}

impl ListConfig {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            search_fields: Vec::new(),
            default_sort_field: "id".to_string(),
            default_sort_direction: SortDirection::Ascending,
            breakpoints: Breakpoints::default(),
            always_visible_keys: DEFAULT_ALWAYS_VISIBLE_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            card_page_size: DEFAULT_CARD_PAGE_SIZE,
        }
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Reject configurations the engine cannot interpret unambiguously
    pub fn validate(&self) -> Result<()> {
        if self.entity_name.is_empty() {
            return Err(Error::InvalidConfig("entity_name must not be empty".to_string()));
        }

        let mut keys = HashSet::new();
        for column in &self.columns {
            if !keys.insert(column.key.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate column key: {}",
                    column.key
                )));
            }
        }

        let mut fields = HashSet::new();
        for filter in &self.filters {
            if !fields.insert(filter.field.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate filter field: {}",
                    filter.field
                )));
            }
        }

        Ok(())
    }
}
