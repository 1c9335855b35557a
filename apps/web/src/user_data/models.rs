use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserDataRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub biography: String,
    pub client_profile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the pages and `GET /api/user-data` see. Empty strings when the user has no row yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDataView {
    pub biography: String,
    pub client_profile: String,
}

impl From<UserDataRow> for UserDataView {
    fn from(row: UserDataRow) -> Self {
        Self {
            biography: row.biography,
            client_profile: row.client_profile,
        }
    }
}

/// The two autosaved text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserDataField {
    Biography,
    ClientProfile,
}

impl UserDataField {
    /// Column name in `user_data`. Also the path segment in `/api/user-data/{field}`.
    pub fn column(self) -> &'static str {
        match self {
            UserDataField::Biography => "biography",
            UserDataField::ClientProfile => "client_profile",
        }
    }

    /// Maximum length in characters.
    pub fn max_chars(self) -> usize {
        match self {
            UserDataField::Biography => 1000,
            UserDataField::ClientProfile => 6000,
        }
    }

    /// Warning shown when the limit is exceeded.
    pub fn limit_message(self) -> String {
        match self {
            UserDataField::Biography => format!(
                "A biografia deve ter no máximo {} caracteres",
                self.max_chars()
            ),
            UserDataField::ClientProfile => format!(
                "O perfil do cliente deve ter no máximo {} caracteres",
                self.max_chars()
            ),
        }
    }

    /// Accepts values at or below the limit.
    pub fn validate(self, value: &str) -> Result<(), AppError> {
        if value.chars().count() > self.max_chars() {
            return Err(AppError::Validation(self.limit_message()));
        }
        Ok(())
    }
}
