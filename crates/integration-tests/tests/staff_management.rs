//! Staff administration over HTTP, starting from a bootstrapped superuser.

use serde_json::{Value, json};
use shopkeep_core::Permission;
use shopkeep_integration_tests::{TestServer, reset_link_params};

const STAFF_CREATE: &str = "mutation Create($input: StaffCreateInput!) {
    staffCreate(input: $input) {
        errors { field message }
        user { id email isStaff permissions { code } }
    }
}";

const STAFF_USERS: &str = "query { staffUsers(first: 10) { totalCount edges { node { email } } } }";

async fn superuser_token(server: &TestServer) -> String {
    server
        .create_staff("root@example.com", "root-password", true, &[])
        .await;
    server.login("root@example.com", "root-password").await
}

fn emails(connection: &Value) -> Vec<&str> {
    connection["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|edge| edge["node"]["email"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_superuser_onboards_staff_member() {
    let server = TestServer::start().await;
    let root = superuser_token(&server).await;

    let body = server
        .graphql(
            STAFF_CREATE,
            json!({ "input": {
                "email": "clerk@example.com",
                "permissions": ["account.manage_users"],
                "sendPasswordEmail": true
            } }),
            Some(&root),
        )
        .await;
    let payload = &body["data"]["staffCreate"];
    assert_eq!(payload["errors"], json!([]));
    assert_eq!(payload["user"]["isStaff"], true);
    assert_eq!(
        payload["user"]["permissions"],
        json!([{ "code": "MANAGE_USERS" }])
    );

    // The new member sets a password from the emailed link and logs in.
    let sent = server.wait_for_emails(1).await;
    assert_eq!(sent[0].to, "clerk@example.com");
    let (id, token) = reset_link_params(&sent[0].reset_url);
    assert_eq!(id, payload["user"]["id"].as_str().unwrap());

    let body = server
        .graphql(
            "mutation Set($id: ID!, $token: String!) {
                setPassword(id: $id, input: { token: $token, password: \"clerk-password\" }) {
                    errors { message }
                }
            }",
            json!({ "id": id, "token": token }),
            None,
        )
        .await;
    assert_eq!(body["data"]["setPassword"]["errors"], json!([]));
    let clerk = server.login("clerk@example.com", "clerk-password").await;

    // MANAGE_USERS is not enough to see other staff.
    let body = server.graphql(STAFF_USERS, json!({}), Some(&clerk)).await;
    assert_eq!(body["data"], json!(null));
    assert_eq!(body["errors"][0]["extensions"]["code"], "PERMISSION_DENIED");

    let body = server.graphql(STAFF_USERS, json!({}), Some(&root)).await;
    let staff = &body["data"]["staffUsers"];
    assert_eq!(staff["totalCount"], 2);
    assert_eq!(emails(staff), ["clerk@example.com", "root@example.com"]);
}

#[tokio::test]
async fn test_staff_manager_updates_and_deletes_staff() {
    let server = TestServer::start().await;
    server
        .create_staff(
            "manager@example.com",
            "manager-password",
            false,
            &[Permission::ManageStaff],
        )
        .await;
    let clerk = server
        .create_staff("clerk@example.com", "clerk-password", false, &[])
        .await;
    let manager = server.login("manager@example.com", "manager-password").await;
    let clerk_id = clerk.id.to_global_id().to_string();

    let body = server
        .graphql(
            "mutation Update($id: ID!) {
                staffUpdate(id: $id, input: { permissions: [\"account.manage_users\"], note: \"Front desk\" }) {
                    errors { field message }
                    user { note permissions { code } }
                }
            }",
            json!({ "id": clerk_id }),
            Some(&manager),
        )
        .await;
    assert_eq!(
        body["data"]["staffUpdate"],
        json!({
            "errors": [],
            "user": { "note": "Front desk", "permissions": [{ "code": "MANAGE_USERS" }] }
        })
    );

    let body = server
        .graphql(
            "mutation Delete($id: ID!) { staffDelete(id: $id) { errors { field message } } }",
            json!({ "id": clerk_id }),
            Some(&manager),
        )
        .await;
    assert_eq!(body["data"]["staffDelete"]["errors"], json!([]));
    assert!(server.store().user_by_id(clerk.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_staff_cannot_deactivate_themselves() {
    let server = TestServer::start().await;
    let manager = server
        .create_staff(
            "manager@example.com",
            "manager-password",
            false,
            &[Permission::ManageStaff],
        )
        .await;
    let token = server.login("manager@example.com", "manager-password").await;

    let body = server
        .graphql(
            "mutation Update($id: ID!) {
                staffUpdate(id: $id, input: { isActive: false }) { errors { field } }
            }",
            json!({ "id": manager.id.to_global_id().to_string() }),
            Some(&token),
        )
        .await;
    assert_eq!(
        body["data"]["staffUpdate"]["errors"],
        json!([{ "field": "isActive" }])
    );
    assert!(server.store().user_by_id(manager.id).await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn test_anonymous_staff_create_is_denied() {
    let server = TestServer::start().await;

    let body = server
        .graphql(
            STAFF_CREATE,
            json!({ "input": { "email": "sneaky@example.com" } }),
            None,
        )
        .await;
    assert_eq!(body["data"], json!(null));
    assert_eq!(body["errors"][0]["extensions"]["code"], "PERMISSION_DENIED");
}
