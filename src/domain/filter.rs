use super::entry::Entry;

/// Criteria for the view listing. Each field may be empty; empty criteria
/// match everything. Never persisted and never sent to the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub company: String,
    pub status: String,
    pub date: String,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.status.is_empty() && self.date.is_empty()
    }

    /// All three predicates ANDed:
    /// - company: case-insensitive substring containment
    /// - status: exact equality
    /// - date: prefix match against the serialized date string
    pub fn matches(&self, entry: &Entry) -> bool {
        let company_ok = self.company.is_empty()
            || entry
                .company
                .to_lowercase()
                .contains(&self.company.to_lowercase());
        let status_ok = self.status.is_empty() || entry.status == self.status;
        let date_ok = self.date.is_empty() || entry.date.starts_with(&self.date);

        company_ok && status_ok && date_ok
    }
}

/// Computes the visible subset of `entries`. Stable: input order is
/// preserved, never resorted.
pub fn filter(entries: &[Entry], criteria: &SearchCriteria) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(company: &str, status: &str, date: &str) -> Entry {
        Entry {
            id: Some(1),
            company: company.to_string(),
            status: status.to_string(),
            image_url: String::new(),
            note: "some note".to_string(),
            date: date.to_string(),
        }
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry("Acme", "applied", "2024-05-01T10:00"),
            entry("Acme", "interview", "2024-05-02T14:30"),
            entry("Globex", "offer", "2024-04-20T09:00"),
            entry("initech", "rejected", "2024-05-01T16:15"),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_all_in_order() {
        let entries = sample_entries();
        let result = filter(&entries, &SearchCriteria::default());
        assert_eq!(result, entries);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = sample_entries();
        let criteria = SearchCriteria {
            company: "acme".to_string(),
            ..Default::default()
        };
        let once = filter(&entries, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_company_match_is_case_insensitive() {
        let entries = vec![entry("Acme", "applied", "2024-05-01T10:00")];
        let criteria = SearchCriteria {
            company: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&entries, &criteria).len(), 1);

        let criteria = SearchCriteria {
            company: "INITECH".to_string(),
            ..Default::default()
        };
        let entries = sample_entries();
        let result = filter(&entries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].company, "initech");
    }

    #[test]
    fn test_company_match_is_substring() {
        let entries = sample_entries();
        let criteria = SearchCriteria {
            company: "lob".to_string(),
            ..Default::default()
        };
        let result = filter(&entries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].company, "Globex");
    }

    #[test]
    fn test_status_match_is_exact() {
        let entries = sample_entries();
        let criteria = SearchCriteria {
            status: "applied".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&entries, &criteria).len(), 1);

        // substring of a real status does not match
        let criteria = SearchCriteria {
            status: "applie".to_string(),
            ..Default::default()
        };
        assert!(filter(&entries, &criteria).is_empty());
    }

    #[test]
    fn test_date_match_uses_prefix_semantics() {
        let entries = vec![entry("Acme", "applied", "2024-05-01T10:00")];

        let criteria = SearchCriteria {
            date: "2024-05-01".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&entries, &criteria).len(), 1);

        let criteria = SearchCriteria {
            date: "2024-05-02".to_string(),
            ..Default::default()
        };
        assert!(filter(&entries, &criteria).is_empty());
    }

    #[test]
    fn test_combined_criteria_are_anded() {
        let entries = sample_entries();
        let criteria = SearchCriteria {
            company: "Acme".to_string(),
            status: "interview".to_string(),
            ..Default::default()
        };
        let result = filter(&entries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, "interview");
    }

    #[test]
    fn test_result_preserves_input_order() {
        let entries = sample_entries();
        let criteria = SearchCriteria {
            date: "2024-05".to_string(),
            ..Default::default()
        };
        let result = filter(&entries, &criteria);
        let companies: Vec<&str> = result.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Acme", "initech"]);
    }

    #[test]
    fn test_arbitrary_status_text_is_allowed() {
        let entries = vec![entry("Acme", "ghosted", "2024-05-01T10:00")];
        let criteria = SearchCriteria {
            status: "ghosted".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&entries, &criteria).len(), 1);
    }
}
