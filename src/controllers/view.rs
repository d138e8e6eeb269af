use crate::domain::{filter, Entry, EntryRepository, SearchCriteria};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// State machine behind the view listing: one fetch at load time, then a
/// static snapshot filtered through the search criteria. There is no
/// refetching after the initial load.
pub struct ViewController<R: EntryRepository> {
    repo: R,
    entries: Vec<Entry>,
    pub criteria: SearchCriteria,
    state: LoadState,
}

impl<R: EntryRepository> ViewController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            criteria: SearchCriteria::default(),
            state: LoadState::Loading,
        }
    }

    pub fn load(&mut self) {
        match self.repo.list_all() {
            Ok(entries) => {
                self.entries = entries;
                self.state = LoadState::Ready;
            }
            Err(err) => self.state = LoadState::Failed(err.to_string()),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn set_criteria(&mut self, criteria: SearchCriteria) {
        self.criteria = criteria;
    }

    /// The visible subset under the current criteria, recomputed on demand.
    pub fn visible(&self) -> Vec<Entry> {
        filter(&self.entries, &self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryError;

    struct FakeRepository {
        result: Result<Vec<Entry>, RepositoryError>,
    }

    impl EntryRepository for FakeRepository {
        fn list_all(&self) -> Result<Vec<Entry>, RepositoryError> {
            self.result.clone()
        }

        fn get(&self, _id: i64) -> Result<Entry, RepositoryError> {
            Err(RepositoryError::Fetch)
        }

        fn create(&self, _draft: &Entry) -> Result<(), RepositoryError> {
            Err(RepositoryError::Save)
        }

        fn update(&self, _id: i64, _entry: &Entry) -> Result<(), RepositoryError> {
            Err(RepositoryError::Save)
        }

        fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
            Err(RepositoryError::Delete)
        }
    }

    fn entry(id: i64, company: &str, status: &str) -> Entry {
        Entry {
            id: Some(id),
            company: company.to_string(),
            status: status.to_string(),
            image_url: String::new(),
            note: "some note".to_string(),
            date: "2024-05-01T10:00".to_string(),
        }
    }

    #[test]
    fn test_starts_loading_then_ready() {
        let repo = FakeRepository {
            result: Ok(vec![entry(1, "Acme", "applied")]),
        };
        let mut controller = ViewController::new(repo);
        assert_eq!(*controller.state(), LoadState::Loading);

        controller.load();
        assert_eq!(*controller.state(), LoadState::Ready);
        assert_eq!(controller.visible().len(), 1);
    }

    #[test]
    fn test_failed_load_surfaces_error_state() {
        let repo = FakeRepository {
            result: Err(RepositoryError::Fetch),
        };
        let mut controller = ViewController::new(repo);
        controller.load();

        assert_eq!(
            *controller.state(),
            LoadState::Failed("Failed to fetch entries. Please try again later.".to_string())
        );
        assert!(controller.visible().is_empty());
    }

    #[test]
    fn test_criteria_changes_recompute_visible_subset() {
        let repo = FakeRepository {
            result: Ok(vec![
                entry(1, "Acme", "applied"),
                entry(2, "Acme", "interview"),
                entry(3, "Globex", "offer"),
            ]),
        };
        let mut controller = ViewController::new(repo);
        controller.load();
        assert_eq!(controller.visible().len(), 3);

        controller.set_criteria(SearchCriteria {
            company: "Acme".to_string(),
            status: "interview".to_string(),
            ..Default::default()
        });
        let visible = controller.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(2));

        controller.set_criteria(SearchCriteria::default());
        assert_eq!(controller.visible().len(), 3);
    }
}
