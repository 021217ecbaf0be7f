//! Field-level errors returned inside mutation payloads.

use async_graphql::SimpleObject;

use crate::i18n::AddressValidationError;

pub const INVALID_CREDENTIALS: &str = "Please, enter valid credentials";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const EMAIL_TAKEN: &str = "User with this Email already exists.";

/// A validation failure tied to an input field.
///
/// `field` is `None` for errors about the request as a whole.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Error")]
pub struct FieldError {
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Error for an ID that does not name an existing node of the expected type.
    pub fn node_not_found(field: impl Into<String>, id: &str) -> Self {
        Self::new(field, format!("Couldn't resolve to a node: {id}"))
    }
}

impl From<AddressValidationError> for FieldError {
    fn from(error: AddressValidationError) -> Self {
        Self::new(error.field, error.message)
    }
}
