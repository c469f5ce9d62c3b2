use claude_menubar::config::Credentials;
use claude_menubar::usage_api::{FetchOutcome, UsageClient};

mod common;
use common::StubServer;

fn test_creds() -> Credentials {
    Credentials {
        org_id: "org-123".to_string(),
        session_key: "sk-ant-test".to_string(),
    }
}

#[test]
fn forbidden_classifies_auth_error() {
    let stub = StubServer::respond_with(403, "Forbidden", r#"{"error":"forbidden"}"#);
    let client = UsageClient::with_base_url(&stub.base_url);
    assert!(matches!(client.fetch(&test_creds()), FetchOutcome::AuthError));
}

#[test]
fn unauthorized_classifies_auth_error() {
    let stub = StubServer::respond_with(401, "Unauthorized", "");
    let client = UsageClient::with_base_url(&stub.base_url);
    assert!(matches!(client.fetch(&test_creds()), FetchOutcome::AuthError));
}

#[test]
fn null_windows_classify_unavailable() {
    let stub = StubServer::respond_with(200, "OK", r#"{"five_hour": null, "seven_day": null}"#);
    let client = UsageClient::with_base_url(&stub.base_url);
    assert!(matches!(
        client.fetch(&test_creds()),
        FetchOutcome::Unavailable
    ));
}

#[test]
fn undecodable_body_classifies_unavailable() {
    let stub = StubServer::respond_with(200, "OK", "<html>maintenance</html>");
    let client = UsageClient::with_base_url(&stub.base_url);
    assert!(matches!(
        client.fetch(&test_creds()),
        FetchOutcome::Unavailable
    ));
}

// Only 401/403 are auth failures; any other status is classified by
// whether its body decodes.
#[test]
fn server_error_with_decodable_body_still_yields_snapshot() {
    let stub = StubServer::respond_with(
        500,
        "Internal Server Error",
        r#"{"five_hour": {"utilization": 10.0, "resets_at": null}, "seven_day": null}"#,
    );
    let client = UsageClient::with_base_url(&stub.base_url);
    match client.fetch(&test_creds()) {
        FetchOutcome::Ok(snapshot) => {
            assert_eq!(snapshot.five_hour.unwrap().utilization, 10.0);
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}

#[test]
fn connection_refused_classifies_network_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = UsageClient::with_base_url(&format!("http://{addr}"));
    assert!(matches!(
        client.fetch(&test_creds()),
        FetchOutcome::NetworkError
    ));
}

#[test]
fn ok_snapshot_carries_both_windows() {
    let stub = StubServer::respond_with(
        200,
        "OK",
        r#"{"five_hour": {"utilization": 42.0, "resets_at": "2026-08-06T13:00:00Z"},
            "seven_day": {"utilization": 96.0, "resets_at": "2026-08-09T00:00:00Z"}}"#,
    );
    let client = UsageClient::with_base_url(&stub.base_url);
    match client.fetch(&test_creds()) {
        FetchOutcome::Ok(snapshot) => {
            let five_hour = snapshot.five_hour.unwrap();
            assert_eq!(five_hour.utilization, 42.0);
            assert_eq!(five_hour.resets_at.as_deref(), Some("2026-08-06T13:00:00Z"));
            assert_eq!(snapshot.seven_day.unwrap().utilization, 96.0);
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}

#[test]
fn request_carries_cookie_and_browser_headers() {
    let stub = StubServer::respond_with(200, "OK", r#"{"five_hour": null, "seven_day": null}"#);
    let client = UsageClient::with_base_url(&stub.base_url);
    let _ = client.fetch(&test_creds());

    let request = stub.request();
    assert!(
        request.starts_with("GET /api/organizations/org-123/usage HTTP/1.1"),
        "unexpected request line: {request}"
    );
    assert!(request.contains("Cookie: sessionKey=sk-ant-test"));
    assert!(request.contains("User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36"));
    assert!(request.contains("Accept: application/json"));
}
