use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Statuses offered by the interactive prompts. The data layer does not
/// enforce this set; the filter criterion accepts any text.
pub const STATUS_OPTIONS: [&str; 4] = ["applied", "interview", "offer", "rejected"];

pub const MIN_NOTE_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Assigned by the server on create; `None` for an unsaved draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company: String,
    pub status: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub note: String,
    pub date: String,
}

impl Entry {
    pub fn draft(
        company: String,
        status: String,
        image_url: String,
        note: String,
        date: String,
    ) -> Self {
        Self {
            id: None,
            company,
            status,
            image_url,
            note,
            date,
        }
    }

    pub fn has_status(&self) -> bool {
        !self.status.is_empty()
    }

    pub fn has_sufficient_note(&self) -> bool {
        self.note.chars().count() >= MIN_NOTE_LEN
    }

    /// Checks the draft before it may be handed to the repository.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_status() {
            return Err(ValidationError::MissingStatus);
        }
        if !self.has_sufficient_note() {
            return Err(ValidationError::NoteTooShort);
        }
        Ok(())
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::draft(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Entry {
        Entry::draft(
            "Acme".to_string(),
            "applied".to_string(),
            "https://acme.example/logo.png".to_string(),
            "first contact".to_string(),
            "2024-01-01T09:00".to_string(),
        )
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_missing_status_rejected() {
        let mut entry = valid_draft();
        entry.status = String::new();
        assert!(matches!(
            entry.validate(),
            Err(ValidationError::MissingStatus)
        ));
    }

    #[test]
    fn test_short_note_rejected() {
        let mut entry = valid_draft();
        entry.note = "hi".to_string();
        assert!(matches!(entry.validate(), Err(ValidationError::NoteTooShort)));
    }

    #[test]
    fn test_note_length_counts_chars() {
        let mut entry = valid_draft();
        entry.note = "日本語でも".to_string();
        assert!(entry.has_sufficient_note());
    }

    #[test]
    fn test_status_checked_before_note() {
        let entry = Entry::default();
        assert!(matches!(
            entry.validate(),
            Err(ValidationError::MissingStatus)
        ));
    }

    #[test]
    fn test_wire_field_name() {
        let mut entry = valid_draft();
        entry.id = Some(7);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_draft_omits_id_on_wire() {
        let json = serde_json::to_string(&valid_draft()).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
