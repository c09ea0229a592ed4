use super::error::ValidationError;
use super::models::Role;
use strum_macros::{Display, EnumIter};

/// Text inputs of the create-user form, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DraftField {
    #[strum(to_string = "first name")]
    FirstName,
    #[strum(to_string = "last name")]
    LastName,
    #[strum(to_string = "email")]
    Email,
}

impl DraftField {
    /// Value of the `name` attribute on the bound input.
    pub fn input_name(self) -> &'static str {
        match self {
            DraftField::FirstName => "firstName",
            DraftField::LastName => "lastName",
            DraftField::Email => "email",
        }
    }
}

/// Uncommitted form state for a not-yet-created user.
///
/// Every input writes straight through to one field, so the draft is always
/// what the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

/// A draft that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl UserDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Email => self.email = value,
        }
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Back to an empty draft with the default role.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks the required fields in form order and reports the first blank one.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let first_name = required(&self.first_name, DraftField::FirstName)?;
        let last_name = required(&self.last_name, DraftField::LastName)?;
        let email = required(&self.email, DraftField::Email)?;

        Ok(ValidDraft {
            first_name,
            last_name,
            email,
            role: self.role,
        })
    }
}

fn required(value: &str, field: DraftField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}
