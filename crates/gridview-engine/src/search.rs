use gridview_types::Record;

/// Free-text search across the configured fields.
///
/// An empty term or an empty field list is a no-op and returns the input
/// unchanged. Otherwise a record is retained when at least one field's
/// textual form contains the term as a case-insensitive, unanchored
/// substring. Missing, null, and nested values never match.
pub fn apply_text_search(
    mut records: Vec<Record>,
    search_term: &str,
    search_fields: &[String],
) -> Vec<Record> {
    if search_term.is_empty() || search_fields.is_empty() {
        return records;
    }

    let needle = search_term.to_lowercase();
    records.retain(|record| {
        search_fields.iter().any(|field| {
            record
                .text(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests() -> Vec<Record> {
        vec![
            Record::new("r1")
                .with_field("message", "Kitchen Renovation")
                .with_field("address", "12 Oak Lane"),
            Record::new("r2")
                .with_field("message", "New deck and railing")
                .with_field("address", "400 Birch Street"),
            Record::new("r3").with_field("address", "7 Kitchener Road"),
        ]
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_term_is_a_no_op() {
        let records = requests();
        let result = apply_text_search(records.clone(), "", &fields(&["message"]));
        assert_eq!(result, records);
    }

    #[test]
    fn empty_field_list_is_a_no_op() {
        let records = requests();
        let result = apply_text_search(records.clone(), "kitchen", &[]);
        assert_eq!(result, records);
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let result = apply_text_search(requests(), "kitch", &fields(&["message"]));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1"]);
    }

    #[test]
    fn matches_any_of_the_search_fields() {
        let result = apply_text_search(requests(), "kitch", &fields(&["message", "address"]));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn missing_field_never_matches() {
        let result = apply_text_search(requests(), "deck", &fields(&["missing"]));
        assert!(result.is_empty());
    }

    #[test]
    fn no_match_excludes_all() {
        let result = apply_text_search(requests(), "zzz", &fields(&["message", "address"]));
        assert!(result.is_empty());
    }

    #[test]
    fn numeric_fields_match_via_textual_form() {
        let records = vec![Record::new("r1").with_field("budget", 25000)];
        let result = apply_text_search(records, "250", &fields(&["budget"]));
        assert_eq!(result.len(), 1);
    }
}
