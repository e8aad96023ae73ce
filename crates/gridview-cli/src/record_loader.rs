use anyhow::{Context, Result};
use gridview_types::Record;
use std::collections::HashSet;
use std::path::Path;

/// Load a JSON array of records from disk.
///
/// Duplicate ids are a caller invariant, not something the engine
/// detects; surface them as a warning rather than failing the command.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;

    let records: Vec<Record> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            eprintln!(
                "Warning: duplicate record id '{}' in {}",
                record.id,
                path.display()
            );
        }
    }

    Ok(records)
}
