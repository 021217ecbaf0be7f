//! Mutation root and helpers shared by the mutation groups.
//!
//! Resolvers stay thin: guards check read-only mode and permissions, then a
//! plain async function does the work and returns an `AppError` for
//! anything that is not a field validation failure.

mod account;
mod address;
mod auth;
mod customer;
mod staff;

use std::collections::BTreeSet;

use async_graphql::{ID, MergedObject};
use chrono::Utc;

use shopkeep_core::{Email, Permission, UserId};

pub use account::{AccountMutation, CustomerPasswordResetInput, SetPasswordInput};
pub use address::{AddressCreateInput, AddressMutation};
pub use auth::AuthMutation;
pub use customer::{CustomerInput, CustomerMutation, CustomerRegisterInput, UserCreateInput};
pub use staff::{StaffCreateInput, StaffInput, StaffMutation};

use super::errors::{FieldError, INVALID_EMAIL};
use super::types::AddressInput;
use crate::error::Result;
use crate::i18n;
use crate::models::{AddressData, User};
use crate::services::email::{self, PasswordResetEmail};
use crate::state::AppState;

/// Root mutation type.
#[derive(MergedObject, Default)]
pub struct Mutation(
    AuthMutation,
    CustomerMutation,
    StaffMutation,
    AccountMutation,
    AddressMutation,
);

/// Parse an email, recording a field error on failure.
fn parse_email(raw: &str, errors: &mut Vec<FieldError>) -> Option<Email> {
    Email::parse(raw)
        .map_err(|_| errors.push(FieldError::new("email", INVALID_EMAIL)))
        .ok()
}

/// Look up a user by global ID. Malformed IDs and IDs of other node types
/// resolve to `None`.
async fn find_user(state: &AppState, id: &ID) -> Result<Option<User>> {
    let Some(user_id) = UserId::from_global_id(id) else {
        return Ok(None);
    };
    Ok(state.store().user_by_id(user_id).await?)
}

/// Validate an optional address input merged over `current`.
fn clean_address(
    input: Option<AddressInput>,
    current: Option<&AddressData>,
    errors: &mut Vec<FieldError>,
) -> Option<AddressData> {
    let input = input?;
    match i18n::normalize_address(input.into_raw(current)) {
        Ok(address) => Some(address),
        Err(failures) => {
            errors.extend(failures.into_iter().map(FieldError::from));
            None
        }
    }
}

/// Parse permission codenames, recording a field error for unknown ones.
fn parse_permissions(
    codenames: Option<Vec<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<BTreeSet<Permission>> {
    let codenames = codenames?;
    let mut permissions = BTreeSet::new();
    for codename in codenames {
        match Permission::from_codename(&codename) {
            Ok(permission) => {
                permissions.insert(permission);
            }
            Err(_) => errors.push(FieldError::new(
                "permissions",
                format!("Select a valid choice. {codename} is not one of the available choices."),
            )),
        }
    }
    Some(permissions)
}

/// Empty notes clear the stored note.
fn clean_note(note: Option<String>) -> Option<Option<String>> {
    note.map(|note| {
        let note = note.trim().to_owned();
        (!note.is_empty()).then_some(note)
    })
}

/// Email a password reset link to `user` in the background.
fn send_password_reset(state: &AppState, user: &User) {
    let token = state.reset_tokens().make_token(user, Utc::now());
    let message = PasswordResetEmail::new(&state.config().password_reset_url, user, &token);
    tracing::info!(user_id = %user.id, "Dispatching password reset email");
    email::dispatch(state.mailer(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permissions() {
        let mut errors = Vec::new();
        let permissions = parse_permissions(
            Some(vec![
                "account.manage_users".to_owned(),
                "account.manage_everything".to_owned(),
            ]),
            &mut errors,
        );

        assert_eq!(permissions, Some(BTreeSet::from([Permission::ManageUsers])));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("permissions"));
        assert_eq!(parse_permissions(None, &mut errors), None);
    }

    #[test]
    fn test_clean_note() {
        assert_eq!(clean_note(None), None);
        assert_eq!(clean_note(Some("  ".to_owned())), Some(None));
        assert_eq!(
            clean_note(Some(" VIP ".to_owned())),
            Some(Some("VIP".to_owned()))
        );
    }

    #[test]
    fn test_parse_email_records_error() {
        let mut errors = Vec::new();
        assert!(parse_email("not-an-email", &mut errors).is_none());
        assert_eq!(errors, vec![FieldError::new("email", INVALID_EMAIL)]);
        assert!(parse_email("Someone@Example.com", &mut errors).is_some());
        assert_eq!(errors.len(), 1);
    }
}
