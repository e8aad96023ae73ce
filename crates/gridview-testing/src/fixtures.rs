//! Canned renovation-business record sets and a record builder.
//!
//! The sample sets mirror the admin screens the engine serves: requests,
//! quotes, and projects with realistic statuses, lead sources, and
//! ISO-format timestamps.

use anyhow::{Context, Result};
use gridview_types::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Fluent builder over [`Record`] for test data
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// New record with a random unique id
    pub fn new() -> Self {
        Self {
            record: Record::new(Uuid::new_v4().to_string()),
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            record: Record::new(id),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.fields.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Five renovation requests with statuses New, New, Archived, Quoted,
/// Archived; exactly one archived request mentions a kitchen.
pub fn sample_requests() -> Vec<Record> {
    vec![
        RecordBuilder::with_id("req-001")
            .field("status", "New")
            .field("address", "12 Oak Lane")
            .field("customerName", "Dana Reyes")
            .field("leadSource", "Website")
            .field("product", "Windows")
            .field("message", "Two cracked windows on the street side")
            .field("createdAt", "2025-05-04T09:12:00Z")
            .build(),
        RecordBuilder::with_id("req-002")
            .field("status", "New")
            .field("address", "400 Birch Street")
            .field("customerName", "Ezra Bell")
            .field("leadSource", "Referral")
            .field("product", "Decking")
            .field("message", "New deck and railing for the back yard")
            .field("createdAt", "2025-05-02T14:40:00Z")
            .build(),
        RecordBuilder::with_id("req-003")
            .field("status", "Archived")
            .field("address", "7 Kitchener Road")
            .field("customerName", "Mara Voss")
            .field("leadSource", "Website")
            .field("product", "Kitchen")
            .field("message", "Full Kitchen Renovation with new cabinets")
            .field("createdAt", "2025-04-18T11:05:00Z")
            .build(),
        RecordBuilder::with_id("req-004")
            .field("status", "Quoted")
            .field("address", "88 Harbor View")
            .field("customerName", "Theo Marsh")
            .field("leadSource", "Phone")
            .field("product", "Bathroom")
            .field("message", "Walk-in shower conversion")
            .field("createdAt", "2025-04-29T08:30:00Z")
            .build(),
        RecordBuilder::with_id("req-005")
            .field("status", "Archived")
            .field("address", "15 Meadow Court")
            .field("customerName", "Iris Chen")
            .field("leadSource", "Website")
            .field("product", "Roofing")
            .field("message", "Shingle replacement after storm damage")
            .field("createdAt", "2025-03-11T16:55:00Z")
            .build(),
    ]
}

/// Three quotes in mixed states, including one without a total
pub fn sample_quotes() -> Vec<Record> {
    vec![
        RecordBuilder::with_id("quo-101")
            .field("quoteNumber", "Q-2025-0101")
            .field("status", "Draft")
            .field("customerName", "Dana Reyes")
            .field("totalAmount", 8400)
            .field("validUntil", "2025-07-01")
            .field("createdAt", "2025-05-06T10:00:00Z")
            .build(),
        RecordBuilder::with_id("quo-102")
            .field("quoteNumber", "Q-2025-0102")
            .field("status", "Sent")
            .field("customerName", "Theo Marsh")
            .field("totalAmount", 12750)
            .field("validUntil", "2025-06-15")
            .field("createdAt", "2025-05-01T09:20:00Z")
            .build(),
        RecordBuilder::with_id("quo-103")
            .field("quoteNumber", "Q-2025-0103")
            .field("status", "Accepted")
            .field("customerName", "Mara Voss")
            .field("totalAmount", Value::Null)
            .field("validUntil", "2025-06-30")
            .field("createdAt", "2025-04-21T13:45:00Z")
            .build(),
    ]
}

/// Three projects, one missing an assignee
pub fn sample_projects() -> Vec<Record> {
    vec![
        RecordBuilder::with_id("prj-201")
            .field("title", "Marsh bathroom conversion")
            .field("status", "In Progress")
            .field("address", "88 Harbor View")
            .field("assignedTo", "Crew A")
            .field("startDate", "2025-05-12")
            .field("budget", 13000)
            .build(),
        RecordBuilder::with_id("prj-202")
            .field("title", "Voss kitchen renovation")
            .field("status", "Scheduled")
            .field("address", "7 Kitchener Road")
            .field("assignedTo", "Crew B")
            .field("startDate", "2025-06-02")
            .field("budget", 27500)
            .build(),
        RecordBuilder::with_id("prj-203")
            .field("title", "Chen roof replacement")
            .field("status", "Completed")
            .field("address", "15 Meadow Court")
            .field("assignedTo", Value::Null)
            .field("startDate", "2025-03-20")
            .field("budget", 9800)
            .build(),
    ]
}

/// Write a record set as a pretty-printed JSON array, the format the CLI
/// `list` command reads
pub fn write_records_file(path: &Path, records: &[Record]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write records file: {}", path.display()))?;
    Ok(())
}
