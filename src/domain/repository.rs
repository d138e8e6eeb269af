use super::entry::Entry;
use super::error::RepositoryError;

/// Transport seam for the tracker service. The HTTP implementation lives in
/// `infrastructure::api`; tests drive the controllers with an in-memory fake.
pub trait EntryRepository {
    /// Fetch the full collection. No filtering, sorting, or pagination.
    fn list_all(&self) -> Result<Vec<Entry>, RepositoryError>;

    /// Fetch a single entry by id.
    fn get(&self, id: i64) -> Result<Entry, RepositoryError>;

    /// Create from a draft without an id. The response body is ignored
    /// beyond success; callers refetch the collection.
    fn create(&self, draft: &Entry) -> Result<(), RepositoryError>;

    /// Full-record replace by id.
    fn update(&self, id: i64, entry: &Entry) -> Result<(), RepositoryError>;

    /// Remove by id.
    fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
