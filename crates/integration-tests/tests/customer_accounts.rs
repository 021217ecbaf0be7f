//! Customer self-service over HTTP: sign up, log in, refresh, reset the
//! password.

use serde_json::json;
use shopkeep_integration_tests::{RESET_PAGE, TestServer, reset_link_params};

const REGISTER: &str = "mutation Register($email: String!, $password: String!) {
    customerRegister(input: { email: $email, password: $password }) {
        errors { field message }
        user { email isStaff isActive }
    }
}";

const ME: &str = "query { me { email isStaff } }";

#[tokio::test]
async fn test_register_login_and_me() {
    let server = TestServer::start().await;

    let body = server
        .graphql(
            REGISTER,
            json!({ "email": "jane@Example.COM", "password": "correct-horse" }),
            None,
        )
        .await;
    assert_eq!(
        body["data"]["customerRegister"],
        json!({
            "errors": [],
            "user": { "email": "jane@example.com", "isStaff": false, "isActive": true }
        })
    );

    let token = server.login("jane@example.com", "correct-horse").await;

    let body = server.graphql(ME, json!({}), Some(&token)).await;
    assert_eq!(
        body["data"]["me"],
        json!({ "email": "jane@example.com", "isStaff": false })
    );

    let body = server.graphql(ME, json!({}), None).await;
    assert_eq!(body["data"]["me"], json!(null));
}

#[tokio::test]
async fn test_register_twice_reports_email_taken() {
    let server = TestServer::start().await;
    let variables = json!({ "email": "jane@example.com", "password": "correct-horse" });

    server.graphql(REGISTER, variables.clone(), None).await;
    let body = server.graphql(REGISTER, variables, None).await;

    assert_eq!(
        body["data"]["customerRegister"],
        json!({
            "errors": [{ "field": "email", "message": "User with this Email already exists." }],
            "user": null
        })
    );
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let server = TestServer::start().await;
    server
        .graphql(
            REGISTER,
            json!({ "email": "jane@example.com", "password": "correct-horse" }),
            None,
        )
        .await;

    let body = server
        .graphql(
            r#"mutation { tokenCreate(email: "jane@example.com", password: "battery-staple") {
                token errors { field message }
            } }"#,
            json!({}),
            None,
        )
        .await;
    assert_eq!(
        body["data"]["tokenCreate"],
        json!({
            "token": null,
            "errors": [{ "field": null, "message": "Please, enter valid credentials" }]
        })
    );
}

#[tokio::test]
async fn test_token_verify_and_refresh() {
    let server = TestServer::start().await;
    server
        .graphql(
            REGISTER,
            json!({ "email": "jane@example.com", "password": "correct-horse" }),
            None,
        )
        .await;
    let token = server.login("jane@example.com", "correct-horse").await;

    let body = server
        .graphql(
            "mutation Verify($token: String!) {
                tokenVerify(token: $token) { errors { message } payload { email } user { email } }
            }",
            json!({ "token": token }),
            None,
        )
        .await;
    assert_eq!(
        body["data"]["tokenVerify"],
        json!({
            "errors": [],
            "payload": { "email": "jane@example.com" },
            "user": { "email": "jane@example.com" }
        })
    );

    let body = server
        .graphql(
            "mutation Refresh($token: String!) {
                tokenRefresh(token: $token) { errors { message } token payload { email origIat } }
            }",
            json!({ "token": token }),
            None,
        )
        .await;
    let refreshed = &body["data"]["tokenRefresh"];
    assert_eq!(refreshed["errors"], json!([]));
    assert_eq!(refreshed["payload"]["email"], "jane@example.com");

    let new_token = refreshed["token"].as_str().unwrap();
    let body = server.graphql(ME, json!({}), Some(new_token)).await;
    assert_eq!(body["data"]["me"]["email"], "jane@example.com");
}

#[tokio::test]
async fn test_password_reset_flow() {
    let server = TestServer::start().await;
    server
        .graphql(
            REGISTER,
            json!({ "email": "jane@example.com", "password": "correct-horse" }),
            None,
        )
        .await;

    let body = server
        .graphql(
            r#"mutation { customerPasswordReset(input: { email: "jane@example.com" }) { errors { message } } }"#,
            json!({}),
            None,
        )
        .await;
    assert_eq!(body["data"]["customerPasswordReset"]["errors"], json!([]));

    let sent = server.wait_for_emails(1).await;
    assert_eq!(sent[0].to, "jane@example.com");
    assert!(sent[0].reset_url.starts_with(RESET_PAGE));
    let (id, token) = reset_link_params(&sent[0].reset_url);

    let body = server
        .graphql(
            "mutation SetPassword($id: ID!, $token: String!, $password: String!) {
                setPassword(id: $id, input: { token: $token, password: $password }) {
                    errors { field message }
                    user { email }
                }
            }",
            json!({ "id": id, "token": token, "password": "battery-staple" }),
            None,
        )
        .await;
    assert_eq!(
        body["data"]["setPassword"],
        json!({ "errors": [], "user": { "email": "jane@example.com" } })
    );

    server.login("jane@example.com", "battery-staple").await;
}

#[tokio::test]
async fn test_password_reset_for_unknown_email_sends_nothing() {
    let server = TestServer::start().await;

    let body = server
        .graphql(
            r#"mutation { customerPasswordReset(input: { email: "ghost@example.com" }) { errors { message } } }"#,
            json!({}),
            None,
        )
        .await;
    assert_eq!(body["data"]["customerPasswordReset"]["errors"], json!([]));

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(server.sent_emails().is_empty());
}

#[tokio::test]
async fn test_read_only_server_refuses_sign_up() {
    let server = TestServer::start_read_only().await;

    let body = server
        .graphql(
            REGISTER,
            json!({ "email": "jane@example.com", "password": "correct-horse" }),
            None,
        )
        .await;
    assert_eq!(body["data"], json!(null));
    assert_eq!(body["errors"][0]["extensions"]["code"], "READ_ONLY");
}
