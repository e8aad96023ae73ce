use gridview_types::Record;
use serde::Serialize;

/// One selectable value of a discrete filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Distinct, non-null, non-empty values of a field across the given
/// record set, sorted ascending lexicographically.
///
/// Option lists always reflect the current data, not a fixed vocabulary;
/// the implicit "all" sentinel is a UI affordance and is not included.
pub fn derive_filter_options(records: &[Record], field: &str) -> Vec<FilterOption> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|record| record.text(field))
        .filter(|value| !value.is_empty())
        .collect();
    values.sort();
    values.dedup();

    values
        .into_iter()
        .map(|value| FilterOption {
            label: value.clone(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn distinct_sorted_values() {
        let records = vec![
            Record::new("r1").with_field("status", "Quoted"),
            Record::new("r2").with_field("status", "Archived"),
            Record::new("r3").with_field("status", "Quoted"),
            Record::new("r4").with_field("status", "New"),
        ];

        let options = derive_filter_options(&records, "status");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Archived", "New", "Quoted"]);
    }

    #[test]
    fn labels_mirror_values() {
        let records = vec![Record::new("r1").with_field("leadSource", "Website")];
        let options = derive_filter_options(&records, "leadSource");
        assert_eq!(options[0].label, options[0].value);
    }

    #[test]
    fn skips_null_empty_and_missing() {
        let records = vec![
            Record::new("r1").with_field("status", ""),
            Record::new("r2").with_field("status", Value::Null),
            Record::new("r3"),
            Record::new("r4").with_field("status", "New"),
        ];

        let options = derive_filter_options(&records, "status");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "New");
    }

    #[test]
    fn numbers_become_strings() {
        let records = vec![
            Record::new("r1").with_field("floors", 2),
            Record::new("r2").with_field("floors", 10),
        ];

        let values: Vec<String> = derive_filter_options(&records, "floors")
            .into_iter()
            .map(|o| o.value)
            .collect();
        // Lexicographic, so "10" sorts before "2"
        assert_eq!(values, vec!["10", "2"]);
    }

    #[test]
    fn empty_record_set_yields_no_options() {
        assert!(derive_filter_options(&[], "status").is_empty());
    }
}
