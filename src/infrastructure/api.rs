use log::error;
use reqwest::blocking::{Client, Response};

use crate::domain::{Entry, EntryRepository, RepositoryError};

/// HTTP client for the tracker service's `/products` collection.
///
/// Every transport or server failure collapses into the coarse
/// `RepositoryError` for its operation class; the cause is logged here and
/// never shown to the user.
pub struct ApiRepository {
    base_url: String,
    client: Client,
}

impl ApiRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn entry_url(&self, id: i64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    fn check_response(response: Response) -> Result<Response, String> {
        if response.status().is_success() {
            return Ok(response);
        }
        Err(format!(
            "server returned {}: {}",
            response.status(),
            response.text().unwrap_or_default()
        ))
    }
}

impl EntryRepository for ApiRepository {
    fn list_all(&self) -> Result<Vec<Entry>, RepositoryError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .map_err(|e| {
                error!("Error fetching entries: {}", e);
                RepositoryError::Fetch
            })?;

        Self::check_response(response)
            .map_err(|e| {
                error!("Error fetching entries: {}", e);
                RepositoryError::Fetch
            })?
            .json::<Vec<Entry>>()
            .map_err(|e| {
                error!("Error decoding entry list: {}", e);
                RepositoryError::Fetch
            })
    }

    fn get(&self, id: i64) -> Result<Entry, RepositoryError> {
        let response = self.client.get(self.entry_url(id)).send().map_err(|e| {
            error!("Error fetching entry {}: {}", id, e);
            RepositoryError::Fetch
        })?;

        Self::check_response(response)
            .map_err(|e| {
                error!("Error fetching entry {}: {}", id, e);
                RepositoryError::Fetch
            })?
            .json::<Entry>()
            .map_err(|e| {
                error!("Error decoding entry {}: {}", id, e);
                RepositoryError::Fetch
            })
    }

    fn create(&self, draft: &Entry) -> Result<(), RepositoryError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .map_err(|e| {
                error!("Error saving entry: {}", e);
                RepositoryError::Save
            })?;

        Self::check_response(response).map_err(|e| {
            error!("Error saving entry: {}", e);
            RepositoryError::Save
        })?;
        Ok(())
    }

    fn update(&self, id: i64, entry: &Entry) -> Result<(), RepositoryError> {
        let response = self
            .client
            .put(self.entry_url(id))
            .json(entry)
            .send()
            .map_err(|e| {
                error!("Error saving entry {}: {}", id, e);
                RepositoryError::Save
            })?;

        Self::check_response(response).map_err(|e| {
            error!("Error saving entry {}: {}", id, e);
            RepositoryError::Save
        })?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let response = self.client.delete(self.entry_url(id)).send().map_err(|e| {
            error!("Error deleting entry {}: {}", id, e);
            RepositoryError::Delete
        })?;

        Self::check_response(response).map_err(|e| {
            error!("Error deleting entry {}: {}", id, e);
            RepositoryError::Delete
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let repo = ApiRepository::new("http://127.0.0.1:8000/");
        assert_eq!(repo.collection_url(), "http://127.0.0.1:8000/products");
        assert_eq!(repo.entry_url(7), "http://127.0.0.1:8000/products/7");
    }
}
