use crate::config::Config;
use crate::entities;
use crate::presentation::{presenters, views};
use crate::record_loader::load_records;
use crate::types::{OutputFormat, ViewModeArg};
use anyhow::{Context, Result};
use gridview_engine::ListState;
use gridview_types::{PrefStore, SortDirection};
use is_terminal::IsTerminal;
use std::path::Path;

/// Terminal cells approximate logical px at a nominal glyph width
const PX_PER_CELL: u32 = 8;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    store: &dyn PrefStore,
    file_config: &Config,
    file: &Path,
    entity: &str,
    search: Option<String>,
    filters: &[String],
    sort: Option<String>,
    desc: bool,
    view: Option<ViewModeArg>,
    page: usize,
    page_size: Option<usize>,
    width: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let mut list_config = entities::config_for(entity).with_context(|| {
        format!(
            "Unknown entity '{}'. Run 'gridview entities' to see the built-in configurations.",
            entity
        )
    })?;
    file_config.apply_to(&mut list_config);

    let records = load_records(file)?;

    let mut state = ListState::with_prefs(list_config, store);

    if let Some(term) = search {
        state.set_search(term);
    }

    for spec in filters {
        match parse_filter(spec) {
            Some((field, value)) => state.set_filter(field, value),
            None => eprintln!(
                "Warning: ignoring malformed --filter '{}' (expected FIELD=VALUE)",
                spec
            ),
        }
    }

    if let Some(key) = sort {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        state.set_sort(key, direction);
    }

    if let Some(mode) = view {
        state.set_view_mode(mode.into());
    }

    // Page size first: changing it resets the page
    if let Some(size) = page_size {
        state.set_card_page_size(size);
    }
    state.set_card_page(page);

    let fallback = state.config().breakpoints.wide;
    state.on_viewport_change(resolve_viewport_width(width, fallback));

    let snapshot = state.snapshot(&records);
    let view_model = presenters::present_list(&state, &snapshot);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_model)?),
        OutputFormat::Plain => print!("{}", views::ListView::new(&view_model)),
    }

    Ok(())
}

fn parse_filter(spec: &str) -> Option<(String, String)> {
    let (field, value) = spec.split_once('=')?;
    if field.is_empty() {
        return None;
    }
    Some((field.to_string(), value.to_string()))
}

/// Explicit width wins; otherwise derive from the attached terminal,
/// and fall back to the wide breakpoint when output is piped
fn resolve_viewport_width(explicit: Option<u32>, fallback: u32) -> u32 {
    if let Some(width) = explicit {
        return width;
    }

    if std::io::stdout().is_terminal()
        && let Some((terminal_size::Width(cols), _)) = terminal_size::terminal_size()
    {
        return u32::from(cols) * PX_PER_CELL;
    }

    fallback
}
