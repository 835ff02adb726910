use kyc_infra::ServiceConfig;
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = kyc_api::app::build_app(ServiceConfig::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn invoke(&self, function: &str, args: &[&str]) -> (StatusCode, Value) {
        let res = reqwest::Client::new()
            .post(format!("{}/invoke", self.base_url))
            .json(&json!({ "function": function, "args": args }))
            .send()
            .await
            .unwrap();
        let status = res.status();
        let body = res.json().await.unwrap();
        (status, body)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

const IDENTITY: &str = r#"{"FirstName":"Ada","LastName":"Lovelace"}"#;
const ADDRESS: &str = r#"{"City":"London","Active":true}"#;
const CONTACT: &str = r#"{"EmailAddress":"ada@example.com"}"#;

async fn register_c1(srv: &TestServer) {
    let (status, body) = srv
        .invoke("registerCustomer", &["C1", IDENTITY, ADDRESS, CONTACT])
        .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_then_query_returns_stored_record() {
    let srv = TestServer::spawn().await;

    let (status, registered) = srv
        .invoke("registerCustomer", &["C1", IDENTITY, ADDRESS, CONTACT])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["id"], "C1");
    assert_eq!(registered["addresses"].as_array().unwrap().len(), 1);
    assert_eq!(registered["documents"], json!([]));

    let (status, queried) = srv.invoke("queryCustomer", &["C1"]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queried, registered);
    assert_eq!(queried["identity"]["FirstName"], "Ada");
}

#[tokio::test]
async fn append_then_replace_contacts() {
    let srv = TestServer::spawn().await;
    register_c1(&srv).await;

    let (status, appended) = srv
        .invoke(
            "updateCustomer",
            &["Contact", "Append", "C1", r#"[{"PhoneNumber":"555-0100"}]"#],
        )
        .await;
    assert_eq!(status, StatusCode::OK, "append failed: {appended}");
    assert_eq!(appended["contacts"].as_array().unwrap().len(), 2);

    let (status, replaced) = srv
        .invoke(
            "updateCustomer",
            &["Contact", "Replace", "C1", r#"[{"EmailAddress":"new@example.com"}]"#],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let contacts = replaced["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["EmailAddress"], "new@example.com");

    let (status, section) = srv.invoke("queryCustomer", &["C1", "Contact"]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(section, replaced["contacts"]);
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let srv = TestServer::spawn().await;
    register_c1(&srv).await;

    let (status, body) = srv
        .invoke(
            "registerCustomer",
            &["C1", r#"{"FirstName":"Eve"}"#, ADDRESS, CONTACT],
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "duplicate_key");

    let (_, stored) = srv.invoke("queryCustomer", &["C1", "BasicInfo"]).await;
    assert_eq!(stored["FirstName"], "Ada");
}

#[tokio::test]
async fn request_errors_map_to_client_statuses() {
    let srv = TestServer::spawn().await;
    register_c1(&srv).await;

    let (status, body) = srv
        .invoke("updateCustomer", &["Employment", "Append", "C1", "[]"])
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_section");

    let (status, body) = srv
        .invoke("updateCustomer", &["BasicInfo", "Append", "C1", "{}"])
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsupported_mode");

    let (status, body) = srv
        .invoke("updateCustomer", &["Address", "Append", "C1", "not json"])
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "decode_error");

    let (status, body) = srv.invoke("queryCustomer", &[]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_arguments");
}

#[tokio::test]
async fn missing_customer_and_unknown_function_are_not_found() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.invoke("queryCustomer", &["nobody"]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = srv.invoke("deleteCustomer", &["C1"]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown_function");
}

#[tokio::test]
async fn malformed_invoke_body_gets_json_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let missing_function = client
        .post(format!("{}/invoke", srv.base_url))
        .json(&json!({ "args": ["C1"] }))
        .send()
        .await
        .unwrap();
    let not_json = client
        .post(format!("{}/invoke", srv.base_url))
        .header("content-type", "application/json")
        .body("{\"function\":")
        .send()
        .await
        .unwrap();
    let no_content_type = client
        .post(format!("{}/invoke", srv.base_url))
        .body(r#"{"function":"queryCustomer","args":["C1"]}"#)
        .send()
        .await
        .unwrap();

    for res in [missing_function, not_json, no_content_type] {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("application/json"), "{content_type}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_request");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn array_identity_payload_is_rejected_over_http() {
    let srv = TestServer::spawn().await;
    register_c1(&srv).await;

    let (status, body) = srv
        .invoke("updateCustomer", &["BasicInfo", "Replace", "C1", "[]"])
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "decode_error");

    let (_, identity) = srv.invoke("queryCustomer", &["C1", "BasicInfo"]).await;
    assert_eq!(identity["FirstName"], "Ada");
}
