// Engine module - derived list view-state computation
// This layer sits between raw record sets (types) and presentation

pub mod filter;
pub mod options;
pub mod paginate;
pub mod search;
pub mod snapshot;
pub mod sort;
pub mod state;
pub mod view_mode;
pub mod visibility;

pub use filter::apply_field_filters;
pub use options::{FilterOption, derive_filter_options};
pub use paginate::{page_count, paginate};
pub use search::apply_text_search;
pub use snapshot::{FilterControl, ListSnapshot};
pub use sort::apply_sort;
pub use state::ListState;
pub use view_mode::resolve_view_mode;
pub use visibility::{LEADING_VISIBLE_COLUMNS, compute_column_visibility};
