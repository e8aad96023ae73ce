use crate::entities;
use crate::record_loader::load_records;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gridview_engine::derive_filter_options;
use std::path::Path;

pub fn handle(file: &Path, entity: &str, field: &str, format: OutputFormat) -> Result<()> {
    let config = entities::config_for(entity).with_context(|| {
        format!(
            "Unknown entity '{}'. Run 'gridview entities' to see the built-in configurations.",
            entity
        )
    })?;

    if !config.filters.iter().any(|f| f.field == field) {
        eprintln!(
            "Warning: '{}' is not a declared filter for {}; deriving options anyway",
            field, entity
        );
    }

    let records = load_records(file)?;
    let options = derive_filter_options(&records, field);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
        OutputFormat::Plain => {
            if options.is_empty() {
                println!("No values found for '{}'.", field);
            } else {
                for option in &options {
                    println!("{}", option.value);
                }
                println!();
                println!("{} distinct values", options.len());
            }
        }
    }

    Ok(())
}
