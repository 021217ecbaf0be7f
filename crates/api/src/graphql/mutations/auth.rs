//! Token mutations. These stay available in read-only mode.

use async_graphql::{Context, ErrorExtensions, Object, Result};
use chrono::Utc;

use shopkeep_core::Email;

use crate::error::{self, AppError};
use crate::graphql::context;
use crate::graphql::errors::{FieldError, INVALID_CREDENTIALS};
use crate::graphql::types::{
    TokenCreatePayload, TokenPayload, TokenRefreshPayload, TokenVerifyPayload, UserNode,
};
use crate::services::auth::{AuthError, AuthService, TokenError};
use crate::state::AppState;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Exchange email and password for an auth token.
    async fn token_create(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<TokenCreatePayload> {
        create_token(context::state(ctx)?, &email, &password)
            .await
            .map_err(|e| e.extend())
    }

    /// Check a token and return its payload.
    async fn token_verify(&self, ctx: &Context<'_>, token: String) -> Result<TokenVerifyPayload> {
        verify_token(context::state(ctx)?, &token)
            .await
            .map_err(|e| e.extend())
    }

    /// Issue a new token from one still inside its refresh window.
    async fn token_refresh(&self, ctx: &Context<'_>, token: String) -> Result<TokenRefreshPayload> {
        refresh_token(context::state(ctx)?, &token).map_err(|e| e.extend())
    }
}

async fn create_token(
    state: &AppState,
    email: &str,
    password: &str,
) -> error::Result<TokenCreatePayload> {
    let auth = AuthService::new(state.store(), state.tokens());
    match auth.login_with_password(email, password).await {
        Ok((user, token)) => Ok(TokenCreatePayload {
            errors: Vec::new(),
            token: Some(token),
            user: Some(UserNode(user)),
        }),
        Err(AuthError::InvalidCredentials) => Ok(TokenCreatePayload {
            errors: vec![FieldError::non_field(INVALID_CREDENTIALS)],
            ..TokenCreatePayload::default()
        }),
        Err(e) => Err(e.into()),
    }
}

/// Field error for a token that failed verification, or an internal error
/// when the signer itself is broken.
fn token_field_error(error: TokenError) -> error::Result<FieldError> {
    match error {
        TokenError::Key => Err(AppError::Auth(AuthError::Token(error))),
        other => Ok(FieldError::new("token", other.to_string())),
    }
}

async fn verify_token(state: &AppState, token: &str) -> error::Result<TokenVerifyPayload> {
    let claims = match state.tokens().verify(token, Utc::now()) {
        Ok(claims) => claims,
        Err(e) => {
            return Ok(TokenVerifyPayload {
                errors: vec![token_field_error(e)?],
                ..TokenVerifyPayload::default()
            });
        }
    };

    let user = match Email::parse(&claims.email) {
        Ok(email) => state.store().user_by_email(&email).await?,
        Err(_) => None,
    };
    let Some(user) = user.filter(|u| u.is_active) else {
        return Ok(TokenVerifyPayload {
            errors: vec![FieldError::non_field(INVALID_CREDENTIALS)],
            ..TokenVerifyPayload::default()
        });
    };

    Ok(TokenVerifyPayload {
        errors: Vec::new(),
        payload: Some(TokenPayload::from(claims)),
        user: Some(UserNode(user)),
    })
}

fn refresh_token(state: &AppState, token: &str) -> error::Result<TokenRefreshPayload> {
    match state.tokens().refresh(token, Utc::now()) {
        Ok((token, claims)) => Ok(TokenRefreshPayload {
            errors: Vec::new(),
            token: Some(token),
            payload: Some(claims.into()),
        }),
        Err(e) => Ok(TokenRefreshPayload {
            errors: vec![token_field_error(e)?],
            ..TokenRefreshPayload::default()
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::graphql::test_support::{TestApi, data};

    #[tokio::test]
    async fn test_token_create_with_valid_credentials() {
        let api = TestApi::new();
        let user = api.customer("test@example.com", Some("password")).await;
        api.grant(&user, &[shopkeep_core::Permission::ManageUsers]).await;

        let response = api
            .anonymous(
                r#"mutation {
                    tokenCreate(email: "test@example.com", password: "password") {
                        token
                        errors { field message }
                        user { id email permissions { code name } }
                    }
                }"#,
            )
            .await;

        let payload = &data(response)["tokenCreate"];
        assert!(payload["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(payload["errors"], json!([]));
        assert_eq!(payload["user"]["email"], "test@example.com");
        assert_eq!(payload["user"]["id"], user.id.to_global_id().as_str());
        assert_eq!(
            payload["user"]["permissions"],
            json!([{ "code": "MANAGE_USERS", "name": "Manage customers." }])
        );

        let stored = api.reload(&user).await;
        assert!(stored.last_login.is_some());
    }

    #[tokio::test]
    async fn test_token_create_with_wrong_credentials() {
        let api = TestApi::new();
        api.customer("test@example.com", Some("password")).await;

        for (email, password) in [
            ("test@example.com", "wrong-password"),
            ("missing@example.com", "password"),
        ] {
            let response = api
                .anonymous(&format!(
                    r#"mutation {{
                        tokenCreate(email: "{email}", password: "{password}") {{
                            token
                            errors {{ field message }}
                        }}
                    }}"#
                ))
                .await;

            let payload = &data(response)["tokenCreate"];
            assert_eq!(payload["token"], json!(null));
            assert_eq!(
                payload["errors"],
                json!([{ "field": null, "message": "Please, enter valid credentials" }])
            );
        }
    }

    #[tokio::test]
    async fn test_token_verify_and_refresh() {
        let api = TestApi::new();
        let user = api.customer("test@example.com", Some("password")).await;
        let token = api.token_for(&user);

        let response = api
            .anonymous(&format!(
                r#"mutation {{
                    tokenVerify(token: "{token}") {{
                        payload {{ email origIat }}
                        user {{ email }}
                        errors {{ field message }}
                    }}
                    tokenRefresh(token: "{token}") {{
                        token
                        payload {{ email }}
                        errors {{ field }}
                    }}
                }}"#
            ))
            .await;

        let data = data(response);
        assert_eq!(data["tokenVerify"]["payload"]["email"], "test@example.com");
        assert_eq!(data["tokenVerify"]["user"]["email"], "test@example.com");
        assert_eq!(data["tokenVerify"]["errors"], json!([]));
        assert!(data["tokenRefresh"]["token"].is_string());
        assert_eq!(data["tokenRefresh"]["payload"]["email"], "test@example.com");
    }

    #[tokio::test]
    async fn test_token_verify_rejects_garbage() {
        let api = TestApi::new();
        let response = api
            .anonymous(
                r#"mutation {
                    tokenVerify(token: "not.a.token") {
                        payload { email }
                        errors { field message }
                    }
                }"#,
            )
            .await;

        let payload = &data(response)["tokenVerify"];
        assert_eq!(payload["payload"], json!(null));
        assert_eq!(
            payload["errors"],
            json!([{ "field": "token", "message": "Error decoding signature" }])
        );
    }
}
