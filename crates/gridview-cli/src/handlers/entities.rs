use crate::entities::{ENTITY_NAMES, config_for};
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(format: OutputFormat) -> Result<()> {
    let view_models: Vec<_> = ENTITY_NAMES
        .iter()
        .filter_map(|name| config_for(name))
        .map(|config| presenters::present_entity(&config))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_models)?),
        OutputFormat::Plain => {
            for entity in &view_models {
                println!("{}", entity.name);

                let columns: Vec<&str> =
                    entity.columns.iter().map(|c| c.key.as_str()).collect();
                println!("  columns: {}", columns.join(", "));
                println!("  filters: {}", entity.filters.join(", "));
                println!("  search:  {}", entity.search_fields.join(", "));
                println!(
                    "  sort:    {} ({})",
                    entity.default_sort_field, entity.default_sort_direction
                );
                println!();
            }
        }
    }

    Ok(())
}
