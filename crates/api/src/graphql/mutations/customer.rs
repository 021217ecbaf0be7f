//! Customer registration and management.

use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};

use shopkeep_core::Permission;

use super::{clean_address, clean_note, find_user, parse_email, send_password_reset};
use crate::db::RepositoryError;
use crate::error;
use crate::graphql::context;
use crate::graphql::errors::{EMAIL_TAKEN, FieldError, INVALID_EMAIL};
use crate::graphql::guards::{PermissionGuard, WritableGuard};
use crate::graphql::types::{AddressInput, UserPayload};
use crate::graphql::validators::{clean_customer_delete, clean_is_active};
use crate::models::{NewUser, User, UserChanges};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

#[derive(Debug, InputObject)]
pub struct CustomerRegisterInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, InputObject)]
pub struct UserCreateInput {
    pub email: String,
    pub note: Option<String>,
    pub default_billing_address: Option<AddressInput>,
    pub default_shipping_address: Option<AddressInput>,
    /// Email the customer a link to set their password.
    pub send_password_email: Option<bool>,
}

#[derive(Debug, InputObject)]
pub struct CustomerInput {
    pub email: Option<String>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
    pub default_billing_address: Option<AddressInput>,
    pub default_shipping_address: Option<AddressInput>,
}

#[derive(Default)]
pub struct CustomerMutation;

#[Object]
impl CustomerMutation {
    /// Sign up as a customer.
    #[graphql(guard = "WritableGuard")]
    async fn customer_register(
        &self,
        ctx: &Context<'_>,
        input: CustomerRegisterInput,
    ) -> Result<UserPayload> {
        register(context::state(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn customer_create(&self, ctx: &Context<'_>, input: UserCreateInput) -> Result<UserPayload> {
        create(context::state(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn customer_update(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: CustomerInput,
    ) -> Result<UserPayload> {
        let actor = context::require_caller(ctx)?;
        update(context::state(ctx)?, actor, &id, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn customer_delete(&self, ctx: &Context<'_>, id: ID) -> Result<UserPayload> {
        let actor = context::require_caller(ctx)?;
        delete(context::state(ctx)?, actor, &id)
            .await
            .map_err(|e| e.extend())
    }
}

async fn register(state: &AppState, input: CustomerRegisterInput) -> error::Result<UserPayload> {
    let auth = AuthService::new(state.store(), state.tokens());
    let error = match auth
        .register_with_password(&input.email, &input.password)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Customer registered");
            return Ok(UserPayload::ok(user));
        }
        Err(AuthError::InvalidEmail(_)) => FieldError::new("email", INVALID_EMAIL),
        Err(AuthError::UserAlreadyExists) => FieldError::new("email", EMAIL_TAKEN),
        Err(AuthError::WeakPassword(message)) => FieldError::new("password", message),
        Err(e) => return Err(e.into()),
    };
    Ok(UserPayload::failed(vec![error]))
}

/// Map an email uniqueness conflict to a field error.
pub(super) fn email_conflict(error: RepositoryError) -> error::Result<UserPayload> {
    match error {
        RepositoryError::Conflict(_) => Ok(UserPayload::failed(vec![FieldError::new(
            "email",
            EMAIL_TAKEN,
        )])),
        other => Err(other.into()),
    }
}

async fn create(state: &AppState, input: UserCreateInput) -> error::Result<UserPayload> {
    let mut errors = Vec::new();
    let email = parse_email(&input.email, &mut errors);
    let billing = clean_address(input.default_billing_address, None, &mut errors);
    let shipping = clean_address(input.default_shipping_address, None, &mut errors);
    let Some(email) = email.filter(|_| errors.is_empty()) else {
        return Ok(UserPayload::failed(errors));
    };

    let mut new_user = NewUser::customer(email);
    new_user.note = clean_note(input.note).flatten();
    new_user.default_billing_address = billing;
    new_user.default_shipping_address = shipping;

    let user = match state.store().create_user(new_user).await {
        Ok(user) => user,
        Err(e) => return email_conflict(e),
    };
    tracing::info!(user_id = %user.id, "Customer created");

    if input.send_password_email.unwrap_or(false) {
        send_password_reset(state, &user);
    }
    Ok(UserPayload::ok(user))
}

async fn update(
    state: &AppState,
    actor: &User,
    id: &ID,
    input: CustomerInput,
) -> error::Result<UserPayload> {
    let Some(target) = find_user(state, id).await? else {
        return Ok(UserPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    let store = state.store();
    let current_billing = match target.default_billing_address_id {
        Some(address_id) => store.address_by_id(address_id).await?,
        None => None,
    };
    let current_shipping = match target.default_shipping_address_id {
        Some(address_id) => store.address_by_id(address_id).await?,
        None => None,
    };

    let mut errors = clean_is_active(input.is_active, &target, actor, Vec::new());
    let changes = UserChanges {
        email: input
            .email
            .as_deref()
            .and_then(|raw| parse_email(raw, &mut errors)),
        note: clean_note(input.note),
        is_active: input.is_active,
        permissions: None,
        default_billing_address: clean_address(
            input.default_billing_address,
            current_billing.as_ref().map(|address| &address.data),
            &mut errors,
        ),
        default_shipping_address: clean_address(
            input.default_shipping_address,
            current_shipping.as_ref().map(|address| &address.data),
            &mut errors,
        ),
    };
    if !errors.is_empty() {
        return Ok(UserPayload::failed(errors));
    }
    if changes.is_empty() {
        return Ok(UserPayload::ok(target));
    }

    match store.update_user(target.id, changes).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Customer updated");
            Ok(UserPayload::ok(user))
        }
        Err(e) => email_conflict(e),
    }
}

async fn delete(state: &AppState, actor: &User, id: &ID) -> error::Result<UserPayload> {
    let Some(target) = find_user(state, id).await? else {
        return Ok(UserPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    let errors = clean_customer_delete(actor, &target, Vec::new());
    if !errors.is_empty() {
        return Ok(UserPayload::failed(errors));
    }

    state.store().delete_user(target.id).await?;
    tracing::info!(user_id = %target.id, "Customer deleted");
    Ok(UserPayload::ok(target))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use shopkeep_core::Permission;

    use crate::graphql::test_support::{TestApi, assert_permission_denied, data};

    #[tokio::test]
    async fn test_customer_register() {
        let api = TestApi::new();
        let query = r#"mutation {
            customerRegister(input: {email: "new@example.com", password: "secret-password"}) {
                errors { field message }
                user { email isStaff isActive }
            }
        }"#;

        let payload = data(api.anonymous(query).await)["customerRegister"].clone();
        assert_eq!(payload["errors"], json!([]));
        assert_eq!(
            payload["user"],
            json!({ "email": "new@example.com", "isStaff": false, "isActive": true })
        );

        let again = data(api.anonymous(query).await)["customerRegister"].clone();
        assert_eq!(
            again["errors"],
            json!([{ "field": "email", "message": "User with this Email already exists." }])
        );
    }

    #[tokio::test]
    async fn test_customer_register_weak_password() {
        let api = TestApi::new();
        let response = api
            .anonymous(
                r#"mutation {
                    customerRegister(input: {email: "new@example.com", password: "short"}) {
                        errors { field message }
                        user { email }
                    }
                }"#,
            )
            .await;

        let payload = &data(response)["customerRegister"];
        assert_eq!(payload["user"], json!(null));
        assert_eq!(
            payload["errors"],
            json!([{
                "field": "password",
                "message": "This password is too short. It must contain at least 8 characters."
            }])
        );
    }

    #[tokio::test]
    async fn test_customer_create_with_addresses() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;

        let response = api
            .as_user(
                &staff,
                r#"mutation {
                    customerCreate(input: {
                        email: "api_user@example.com",
                        note: "Test user",
                        sendPasswordEmail: true,
                        defaultBillingAddress: {
                            firstName: "John", lastName: "Doe",
                            streetAddress1: "Tęczowa 7", city: "Wroclaw",
                            postalCode: "53-601", country: "PL"
                        },
                        defaultShippingAddress: {
                            firstName: "John", lastName: "Doe",
                            streetAddress1: "1600 Amphitheatre Pkwy", city: "Mountain View",
                            countryArea: "CA", postalCode: "94043", country: "US"
                        }
                    }) {
                        errors { field message }
                        user {
                            email note isActive
                            defaultBillingAddress { city postalCode country { code country } }
                            defaultShippingAddress { city countryArea }
                            addresses { totalCount edges { node { id } } }
                        }
                    }
                }"#,
            )
            .await;

        let payload = &data(response)["customerCreate"];
        assert_eq!(payload["errors"], json!([]));
        let user = &payload["user"];
        assert_eq!(user["email"], "api_user@example.com");
        assert_eq!(user["note"], "Test user");
        assert_eq!(
            user["defaultBillingAddress"],
            json!({ "city": "Wroclaw", "postalCode": "53-601", "country": { "code": "PL", "country": "Poland" } })
        );
        assert_eq!(
            user["defaultShippingAddress"],
            json!({ "city": "MOUNTAIN VIEW", "countryArea": "CA" })
        );
        assert_eq!(user["addresses"]["totalCount"], 2);
        assert_eq!(user["addresses"]["edges"].as_array().unwrap().len(), 2);

        let sent = api.wait_for_emails(1).await;
        assert_eq!(sent[0].to, "api_user@example.com");
    }

    #[tokio::test]
    async fn test_customer_create_reports_address_errors() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;

        let response = api
            .as_user(
                &staff,
                r#"mutation {
                    customerCreate(input: {
                        email: "api_user@example.com",
                        defaultBillingAddress: { city: "Wroclaw", postalCode: "53601", country: "PL" }
                    }) {
                        errors { field message }
                        user { email }
                    }
                }"#,
            )
            .await;

        let payload = &data(response)["customerCreate"];
        assert_eq!(payload["user"], json!(null));
        assert_eq!(
            payload["errors"],
            json!([
                { "field": "streetAddress1", "message": "This field is required." },
                { "field": "postalCode", "message": "This value is not valid for the address." }
            ])
        );
        assert!(api.user_by_email("api_user@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_customer_mutations_require_permission() {
        let api = TestApi::new();
        let customer = api.customer("customer@example.com", None).await;
        let staff = api.staff("staff@example.com", &[]).await;
        let id = customer.id.to_global_id();

        for caller in [None, Some(&staff)] {
            for query in [
                r#"mutation { customerCreate(input: {email: "x@example.com"}) { errors { field } } }"#.to_owned(),
                format!(r#"mutation {{ customerUpdate(id: "{id}", input: {{note: "x"}}) {{ errors {{ field }} }} }}"#),
                format!(r#"mutation {{ customerDelete(id: "{id}") {{ errors {{ field }} }} }}"#),
            ] {
                let response = match caller {
                    Some(user) => api.as_user(user, &query).await,
                    None => api.anonymous(&query).await,
                };
                assert_permission_denied(response);
            }
        }

        let unchanged = api.reload(&customer).await;
        assert_eq!(unchanged.note, None);
    }

    #[tokio::test]
    async fn test_customer_update_updates_default_address_in_place() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api
            .customer_with_billing("customer@example.com", "PL", "Wroclaw", "53-601")
            .await;
        let billing_id = customer.default_billing_address_id.unwrap();

        let response = api
            .as_user(
                &staff,
                &format!(
                    r#"mutation {{
                        customerUpdate(id: "{}", input: {{
                            email: "renamed@example.com",
                            isActive: false,
                            defaultBillingAddress: {{ city: "Krakow", postalCode: "30-001" }}
                        }}) {{
                            errors {{ field message }}
                            user {{ email isActive defaultBillingAddress {{ id city postalCode streetAddress1 }} }}
                        }}
                    }}"#,
                    customer.id.to_global_id()
                ),
            )
            .await;

        let payload = &data(response)["customerUpdate"];
        assert_eq!(payload["errors"], json!([]));
        assert_eq!(payload["user"]["email"], "renamed@example.com");
        assert_eq!(payload["user"]["isActive"], false);
        assert_eq!(
            payload["user"]["defaultBillingAddress"],
            json!({
                "id": billing_id.to_global_id().as_str(),
                "city": "Krakow",
                "postalCode": "30-001",
                "streetAddress1": "Tęczowa 7"
            })
        );
    }

    #[tokio::test]
    async fn test_customer_update_duplicate_email() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api.customer("customer@example.com", None).await;

        let response = api
            .as_user(
                &staff,
                &format!(
                    r#"mutation {{
                        customerUpdate(id: "{}", input: {{ email: "staff@example.com" }}) {{
                            errors {{ field message }}
                        }}
                    }}"#,
                    customer.id.to_global_id()
                ),
            )
            .await;

        assert_eq!(
            data(response)["customerUpdate"]["errors"],
            json!([{ "field": "email", "message": "User with this Email already exists." }])
        );
    }

    #[tokio::test]
    async fn test_customer_delete() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api
            .customer_with_billing("customer@example.com", "PL", "Wroclaw", "53-601")
            .await;
        let query = format!(
            r#"mutation {{ customerDelete(id: "{}") {{ errors {{ field message }} user {{ email }} }} }}"#,
            customer.id.to_global_id()
        );

        let payload = data(api.as_user(&staff, &query).await)["customerDelete"].clone();
        assert_eq!(payload["errors"], json!([]));
        assert_eq!(payload["user"]["email"], "customer@example.com");
        assert!(api.user_by_email("customer@example.com").await.is_none());
        assert!(
            api.address(customer.default_billing_address_id.unwrap())
                .await
                .is_none()
        );

        let missing = data(api.as_user(&staff, &query).await)["customerDelete"].clone();
        assert_eq!(
            missing["errors"],
            json!([{
                "field": "id",
                "message": format!("Couldn't resolve to a node: {}", customer.id.to_global_id())
            }])
        );
    }

    #[tokio::test]
    async fn test_customer_delete_rejects_staff_and_self() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let colleague = api.staff("colleague@example.com", &[]).await;

        for (target, expected) in [
            (&colleague, vec!["Cannot delete a staff account."]),
            (
                &staff,
                vec![
                    "You cannot delete your own account.",
                    "Cannot delete a staff account.",
                ],
            ),
        ] {
            let response = api
                .as_user(
                    &staff,
                    &format!(
                        r#"mutation {{ customerDelete(id: "{}") {{ errors {{ field message }} }} }}"#,
                        target.id.to_global_id()
                    ),
                )
                .await;
            let errors = data(response)["customerDelete"]["errors"].clone();
            let messages: Vec<&str> = errors
                .as_array()
                .unwrap()
                .iter()
                .map(|e| e["message"].as_str().unwrap())
                .collect();
            assert_eq!(messages, expected);
            assert!(api.user_by_email(target.email.as_str()).await.is_some());
        }
    }
}
