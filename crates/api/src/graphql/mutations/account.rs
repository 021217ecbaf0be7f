//! Password set and reset.

use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};
use chrono::Utc;

use shopkeep_core::{Email, Permission};

use super::{find_user, send_password_reset};
use crate::error;
use crate::graphql::context;
use crate::graphql::errors::FieldError;
use crate::graphql::guards::{PermissionGuard, WritableGuard};
use crate::graphql::types::{ErrorsPayload, UserPayload};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

const INVALID_RESET_TOKEN: &str = "Invalid or expired token.";
const UNKNOWN_EMAIL: &str = "User with this email doesn't exist";

#[derive(Debug, InputObject)]
pub struct SetPasswordInput {
    /// Token from the password reset link.
    pub token: String,
    pub password: String,
}

#[derive(Debug, InputObject)]
pub struct CustomerPasswordResetInput {
    pub email: String,
}

#[derive(Default)]
pub struct AccountMutation;

#[Object]
impl AccountMutation {
    /// Set a new password using a password reset token.
    #[graphql(guard = "WritableGuard")]
    async fn set_password(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: SetPasswordInput,
    ) -> Result<UserPayload> {
        set_password(context::state(ctx)?, &id, input)
            .await
            .map_err(|e| e.extend())
    }

    /// Send a password reset link on behalf of a user.
    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn password_reset(&self, ctx: &Context<'_>, email: String) -> Result<ErrorsPayload> {
        staff_password_reset(context::state(ctx)?, &email)
            .await
            .map_err(|e| e.extend())
    }

    /// Request a password reset link. Succeeds whether or not the email is
    /// registered.
    #[graphql(guard = "WritableGuard")]
    async fn customer_password_reset(
        &self,
        ctx: &Context<'_>,
        input: CustomerPasswordResetInput,
    ) -> Result<ErrorsPayload> {
        customer_password_reset(context::state(ctx)?, &input.email)
            .await
            .map_err(|e| e.extend())
    }
}

async fn set_password(
    state: &AppState,
    id: &ID,
    input: SetPasswordInput,
) -> error::Result<UserPayload> {
    let Some(user) = find_user(state, id).await? else {
        return Ok(UserPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };
    if !state
        .reset_tokens()
        .check_token(&user, &input.token, Utc::now())
    {
        return Ok(UserPayload::failed(vec![FieldError::new(
            "token",
            INVALID_RESET_TOKEN,
        )]));
    }

    let auth = AuthService::new(state.store(), state.tokens());
    match auth.set_password(&user, &input.password).await {
        Ok(()) => {}
        Err(AuthError::WeakPassword(message)) => {
            return Ok(UserPayload::failed(vec![FieldError::new("password", message)]));
        }
        Err(e) => return Err(e.into()),
    }
    tracing::info!(user_id = %user.id, "Password set from reset token");

    let user = state.store().user_by_id(user.id).await?.unwrap_or(user);
    Ok(UserPayload::ok(user))
}

async fn staff_password_reset(state: &AppState, email: &str) -> error::Result<ErrorsPayload> {
    let user = match Email::parse(email) {
        Ok(email) => state.store().user_by_email(&email).await?,
        Err(_) => None,
    };
    let Some(user) = user else {
        return Ok(ErrorsPayload {
            errors: vec![FieldError::new("email", UNKNOWN_EMAIL)],
        });
    };

    send_password_reset(state, &user);
    Ok(ErrorsPayload::default())
}

async fn customer_password_reset(state: &AppState, email: &str) -> error::Result<ErrorsPayload> {
    let user = match Email::parse(email) {
        Ok(email) => state.store().user_by_email(&email).await?,
        Err(_) => None,
    };

    match user.filter(|u| u.is_active) {
        Some(user) => send_password_reset(state, &user),
        None => tracing::debug!("Password reset requested for unknown email"),
    }
    Ok(ErrorsPayload::default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use url::Url;

    use shopkeep_core::Permission;

    use crate::graphql::test_support::{TestApi, assert_permission_denied, data};

    /// Pull the token out of an emailed reset link.
    fn token_from_link(link: &str) -> String {
        let url = Url::parse(link).unwrap();
        url.query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
            .unwrap()
    }

    fn set_password_query(id: &str, token: &str, password: &str) -> String {
        format!(
            r#"mutation {{
                setPassword(id: "{id}", input: {{ token: "{token}", password: "{password}" }}) {{
                    errors {{ field message }}
                    user {{ email }}
                }}
            }}"#
        )
    }

    #[tokio::test]
    async fn test_password_reset_then_set_password() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api.customer("customer@example.com", Some("old-password")).await;

        let response = api
            .as_user(
                &staff,
                r#"mutation { passwordReset(email: "customer@example.com") { errors { field message } } }"#,
            )
            .await;
        assert_eq!(data(response)["passwordReset"]["errors"], json!([]));

        let sent = api.wait_for_emails(1).await;
        assert_eq!(sent[0].to, "customer@example.com");
        let token = token_from_link(&sent[0].reset_url);
        let id = customer.id.to_global_id();

        let response = api
            .anonymous(&set_password_query(id.as_str(), &token, "new-password"))
            .await;
        let payload = &data(response)["setPassword"];
        assert_eq!(payload["errors"], json!([]));
        assert_eq!(payload["user"]["email"], "customer@example.com");
        assert!(api.login("customer@example.com", "new-password").await);

        // The hash changed, so the same token no longer works.
        let response = api
            .anonymous(&set_password_query(id.as_str(), &token, "third-password"))
            .await;
        assert_eq!(
            data(response)["setPassword"]["errors"],
            json!([{ "field": "token", "message": "Invalid or expired token." }])
        );
        assert!(api.login("customer@example.com", "new-password").await);
    }

    #[tokio::test]
    async fn test_set_password_rejects_weak_password() {
        let api = TestApi::new();
        let customer = api.customer("customer@example.com", None).await;
        let token = api.reset_token_for(&customer);

        let response = api
            .anonymous(&set_password_query(
                customer.id.to_global_id().as_str(),
                &token,
                "short",
            ))
            .await;
        assert_eq!(
            data(response)["setPassword"]["errors"],
            json!([{
                "field": "password",
                "message": "This password is too short. It must contain at least 8 characters."
            }])
        );
    }

    #[tokio::test]
    async fn test_password_reset_unknown_email() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;

        let response = api
            .as_user(
                &staff,
                r#"mutation { passwordReset(email: "nobody@example.com") { errors { field message } } }"#,
            )
            .await;
        assert_eq!(
            data(response)["passwordReset"]["errors"],
            json!([{ "field": "email", "message": "User with this email doesn't exist" }])
        );
    }

    #[tokio::test]
    async fn test_password_reset_requires_permission() {
        let api = TestApi::new();
        api.customer("customer@example.com", None).await;

        let response = api
            .anonymous(r#"mutation { passwordReset(email: "customer@example.com") { errors { field } } }"#)
            .await;
        assert_permission_denied(response);
    }

    #[tokio::test]
    async fn test_customer_password_reset_does_not_reveal_accounts() {
        let api = TestApi::new();
        api.customer("customer@example.com", None).await;

        for email in ["customer@example.com", "nobody@example.com"] {
            let response = api
                .anonymous(&format!(
                    r#"mutation {{ customerPasswordReset(input: {{ email: "{email}" }}) {{ errors {{ field }} }} }}"#
                ))
                .await;
            assert_eq!(data(response)["customerPasswordReset"]["errors"], json!([]));
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = api.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "customer@example.com");
    }
}
