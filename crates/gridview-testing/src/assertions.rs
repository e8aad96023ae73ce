use gridview_types::Record;

/// Record ids in order, for terse list assertions
pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Assert a record list holds exactly these ids, in order
pub fn assert_ids(records: &[Record], expected: &[&str]) {
    assert_eq!(ids(records), expected, "record ids mismatch");
}
