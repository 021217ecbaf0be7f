//! Business rules shared by the user mutations.
//!
//! Each check takes the acting user, the target user and the errors
//! collected so far, and returns the list with its own errors appended.

use std::collections::BTreeSet;

use shopkeep_core::Permission;

use super::errors::FieldError;
use crate::models::User;

/// Rules common to every user deletion.
///
/// Nobody but a superuser may delete their own account, and superuser
/// accounts may only be deleted by their owner.
#[must_use]
pub fn clean_user_delete(actor: &User, target: &User, mut errors: Vec<FieldError>) -> Vec<FieldError> {
    let is_self = actor.id == target.id;
    if is_self && !actor.is_superuser {
        errors.push(FieldError::new("id", "You cannot delete your own account."));
    } else if !is_self && target.is_superuser {
        errors.push(FieldError::new(
            "id",
            "Only superuser can delete his own account.",
        ));
    }
    errors
}

/// `customerDelete` only removes customers.
#[must_use]
pub fn clean_customer_delete(actor: &User, target: &User, errors: Vec<FieldError>) -> Vec<FieldError> {
    let mut errors = clean_user_delete(actor, target, errors);
    if target.is_staff {
        errors.push(FieldError::new("id", "Cannot delete a staff account."));
    }
    errors
}

/// `staffDelete` only removes staff members.
#[must_use]
pub fn clean_staff_delete(actor: &User, target: &User, errors: Vec<FieldError>) -> Vec<FieldError> {
    let mut errors = clean_user_delete(actor, target, errors);
    if !target.is_staff {
        errors.push(FieldError::new("id", "Cannot delete a non-staff user."));
    }
    errors
}

/// Deactivation rules. Only `Some(false)` is checked.
#[must_use]
pub fn clean_is_active(
    is_active: Option<bool>,
    target: &User,
    actor: &User,
    mut errors: Vec<FieldError>,
) -> Vec<FieldError> {
    if is_active != Some(false) {
        return errors;
    }

    if target.id == actor.id {
        errors.push(FieldError::new(
            "isActive",
            "Cannot deactivate your own account.",
        ));
    } else if target.is_superuser && !actor.is_superuser {
        errors.push(FieldError::new(
            "isActive",
            "Cannot deactivate superuser's account.",
        ));
    }
    errors
}

/// Permissions can only be granted to staff users.
#[must_use]
pub fn clean_permissions(
    target: &User,
    permissions: Option<&BTreeSet<Permission>>,
    mut errors: Vec<FieldError>,
) -> Vec<FieldError> {
    let grants_any = permissions.is_some_and(|set| !set.is_empty());
    if grants_any && !target.is_staff {
        errors.push(FieldError::new(
            "permissions",
            "Only staff users can be granted permissions.",
        ));
    }
    errors
}
