use crate::config::Config;
use crate::entities;
use crate::record_loader::load_records;
use crate::types::ExportFormat;
use anyhow::{Context, Result};
use gridview_engine::{ListSnapshot, ListState};
use gridview_types::{ListConfig, SortDirection, ViewMode};
use std::io::Write;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    file_config: &Config,
    file: &Path,
    entity: &str,
    output: ExportFormat,
    out: Option<&Path>,
    search: Option<String>,
    filters: &[String],
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    let mut list_config = entities::config_for(entity).with_context(|| {
        format!(
            "Unknown entity '{}'. Run 'gridview entities' to see the built-in configurations.",
            entity
        )
    })?;
    file_config.apply_to(&mut list_config);

    let records = load_records(file)?;

    // Exports always cover the full filtered set: table mode at the wide
    // breakpoint, so no pagination and every column visible
    let mut state = ListState::new(list_config);
    state.set_view_mode(ViewMode::Table);

    if let Some(term) = search {
        state.set_search(term);
    }
    for spec in filters {
        if let Some((field, value)) = spec.split_once('=') {
            state.set_filter(field, value);
        } else {
            eprintln!(
                "Warning: ignoring malformed --filter '{}' (expected FIELD=VALUE)",
                spec
            );
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

    let snapshot = state.snapshot(&records);

    match output {
        ExportFormat::Csv => write_csv(&snapshot, state.config(), out)?,
        ExportFormat::Json => {
            let content = serde_json::to_string_pretty(&snapshot.records)?;
            match out {
                Some(path) => std::fs::write(path, content)
                    .with_context(|| format!("Failed to write export: {}", path.display()))?,
                None => println!("{}", content),
            }
        }
    }

    if let Some(path) = out {
        eprintln!("Exported {} {} to {}", snapshot.total, entity, path.display());
    }

    Ok(())
}

fn write_csv(snapshot: &ListSnapshot, config: &ListConfig, out: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match out {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to write export: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    let headers: Vec<&str> = config.columns.iter().map(|c| c.label.as_str()).collect();
    csv_writer.write_record(&headers)?;

    for record in &snapshot.records {
        let row: Vec<String> = config
            .columns
            .iter()
            .map(|column| column.accessor.resolve(record).unwrap_or_default())
            .collect();
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
