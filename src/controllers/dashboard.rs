use crate::domain::{Entry, EntryRepository};

const SAVED_MESSAGE: &str = "Entry saved successfully.";

/// State machine behind the dashboard: the entry collection, the
/// in-progress draft, and the last error/success messages.
///
/// A draft carrying an id submits as an update; a draft without one submits
/// as a create. Loading an existing record into the draft is the only way to
/// enter update mode.
pub struct DashboardController<R: EntryRepository> {
    repo: R,
    pub entries: Vec<Entry>,
    pub draft: Entry,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<R: EntryRepository> DashboardController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            draft: Entry::default(),
            error: None,
            success: None,
        }
    }

    /// Refetch the full collection. On failure the previous snapshot is kept
    /// and the error message is set.
    pub fn refresh(&mut self) {
        match self.repo.list_all() {
            Ok(entries) => self.entries = entries,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Load an existing entry, id included, into the draft.
    pub fn start_update(&mut self, entry: Entry) {
        self.draft = entry;
    }

    pub fn entry_by_id(&self, id: i64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == Some(id))
    }

    /// Validate and submit the draft. Invalid drafts set the error message
    /// and never reach the repository. A successful save clears the draft,
    /// sets the success message, and refetches the collection. A failed save
    /// keeps the draft so the user can retry.
    pub fn submit(&mut self) -> bool {
        if let Err(err) = self.draft.validate() {
            self.error = Some(err.to_string());
            return false;
        }

        let result = match self.draft.id {
            Some(id) => self.repo.update(id, &self.draft),
            None => self.repo.create(&self.draft),
        };

        match result {
            Ok(()) => {
                self.draft = Entry::default();
                self.error = None;
                self.success = Some(SAVED_MESSAGE.to_string());
                self.refresh();
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    pub fn delete(&mut self, id: i64) -> bool {
        match self.repo.delete(id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}
