//! Shared fixtures and assertion helpers for gridview tests.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_ids, ids};
pub use fixtures::{RecordBuilder, sample_projects, sample_quotes, sample_requests, write_records_file};
