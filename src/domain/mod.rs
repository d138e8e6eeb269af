pub mod entry;
pub mod error;
pub mod filter;
pub mod repository;

pub use entry::{Entry, STATUS_OPTIONS};
pub use error::{RepositoryError, ValidationError};
pub use filter::{filter, SearchCriteria};
pub use repository::EntryRepository;
