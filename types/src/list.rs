use crate::Employee;

/// Derive the visible subset for a query: records whose name or email,
/// lower-cased, contains the lower-cased query as a substring. A query
/// that is empty after trimming yields the whole list in its original
/// fetch order; a non-empty query is matched untrimmed.
pub fn filter_employees(records: &[Employee], query: &str) -> Vec<Employee> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&query)
                || record.email.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Drop exactly the record with the given id, if present.
pub fn remove_employee(records: &mut Vec<Employee>, id: &str) {
    records.retain(|record| record.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Designation;

    fn employee(id: &str, name: &str, email: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: "1".into(),
            address: "x".into(),
            designation: Designation::Hr,
            image: None,
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee("1", "Ann", "ann@x.com"),
            employee("2", "Bob", "bob@x.com"),
        ]
    }

    #[test]
    fn matches_name_substring_case_insensitively() {
        let visible = filter_employees(&sample(), "an");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ann");

        let visible = filter_employees(&sample(), "ANN");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ann");
    }

    #[test]
    fn matches_email_substring() {
        let visible = filter_employees(&sample(), "bob@");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bob");
    }

    #[test]
    fn empty_and_whitespace_queries_return_everything_in_order() {
        for query in ["", "   ", "\t"] {
            let visible = filter_employees(&sample(), query);
            assert_eq!(visible, sample(), "query {query:?}");
        }
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(filter_employees(&sample(), "zelda").is_empty());
    }

    #[test]
    fn preserves_fetch_order_among_matches() {
        let records = vec![
            employee("1", "Anna", "anna@x.com"),
            employee("2", "Bob", "bob@x.com"),
            employee("3", "Joanna", "jo@x.com"),
        ];

        let visible = filter_employees(&records, "anna");
        let names: Vec<_> = visible.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Anna", "Joanna"]);
    }

    #[test]
    fn remove_drops_exactly_the_matching_record() {
        let mut records = sample();
        remove_employee(&mut records, "1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bob");

        // Unknown ids leave the list untouched.
        remove_employee(&mut records, "nope");
        assert_eq!(records.len(), 1);
    }
}
