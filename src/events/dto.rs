use serde::Deserialize;

use crate::error::AppError;

pub const MIN_EVENT_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Body of create and update requests. Any `ownerId` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRequest {
    pub name: String,
    pub description: String,
    /// `DD/MM/YYYY`; normalized when persisted.
    pub date: String,
    #[serde(default)]
    pub location: String,
}

impl EventRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().chars().count() < MIN_EVENT_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Name must be at least {MIN_EVENT_NAME_LEN} characters"
            )));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
            return Err(AppError::Validation(format!(
                "Description must be at least {MIN_DESCRIPTION_LEN} characters"
            )));
        }
        if self.date.trim().is_empty() {
            return Err(AppError::Validation("Date is required".into()));
        }
        Ok(())
    }
}
