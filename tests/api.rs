// tests/api.rs

//! Per-caller integration tests against a canned-response server.

mod common;

use serde_json::json;

use ssllabs_client::api::{Analyze, Endpoint, Info, Register, RootCertsRaw, StatusCodes};
use ssllabs_client::Error;

use common::{endpoint_json, host_json, info_json, init_tracing, test_client, CannedResponse, TestServer};

#[tokio::test]
async fn info_caller_sends_no_query_string() {
    let server = TestServer::start(vec![CannedResponse::json(info_json(0, 25, 1000))]).await;
    let api = Info::with_base_url(Some(test_client()), server.base_url());

    let info = api.get().await.unwrap();

    assert_eq!(info.engine_version, "2.2.0");
    assert_eq!(info.max_assessments, 25);
    assert_eq!(server.requests().await, vec!["/info"]);
}

#[tokio::test]
async fn analyze_caller_prepends_host_and_passes_params_through() {
    let server = TestServer::start(vec![CannedResponse::json(host_json("READY"))]).await;
    let api = Analyze::with_base_url(Some(test_client()), server.base_url());

    let host = api
        .get("example.com", &[("publish", String::from("on"))])
        .await
        .unwrap();

    assert_eq!(host.status, "READY");
    assert_eq!(
        server.requests().await,
        vec!["/analyze?host=example.com&publish=on"]
    );
}

#[tokio::test]
async fn unknown_parameters_are_still_sent() {
    let server = TestServer::start(vec![CannedResponse::json(host_json("READY"))]).await;
    let api = Analyze::with_base_url(Some(test_client()), server.base_url());

    api.get("example.com", &[("foo", String::from("bar"))])
        .await
        .unwrap();

    assert_eq!(
        server.requests().await,
        vec!["/analyze?host=example.com&foo=bar"]
    );
}

#[tokio::test]
async fn endpoint_caller_returns_endpoint_data() {
    let server = TestServer::start(vec![CannedResponse::json(endpoint_json())]).await;
    let api = Endpoint::with_base_url(Some(test_client()), server.base_url());

    let endpoint = api.get("example.com", "192.0.2.1", &[]).await.unwrap();

    assert_eq!(endpoint.ip_address, "192.0.2.1");
    assert_eq!(endpoint.grade.as_deref(), Some("A"));
    assert_eq!(
        server.requests().await,
        vec!["/getEndpointData?host=example.com&s=192.0.2.1"]
    );
}

#[tokio::test]
async fn endpoint_error_envelope_surfaces_the_remote_message() {
    let server = TestServer::start(vec![CannedResponse::json(json!({
        "errors": [{"field": "s", "message": "Invalid parameter"}]
    }))])
    .await;
    let api = Endpoint::with_base_url(Some(test_client()), server.base_url());

    let err = api.get("example.com", "not-an-ip", &[]).await.unwrap_err();

    match err {
        Error::Endpoint(message) => assert_eq!(message, "Invalid parameter"),
        other => panic!("expected Error::Endpoint, got {other:?}"),
    }
}

#[tokio::test]
async fn endpoint_without_envelope_is_a_malformed_response() {
    let server = TestServer::start(vec![CannedResponse::json(json!({"unexpected": true}))]).await;
    let api = Endpoint::with_base_url(Some(test_client()), server.base_url());

    let err = api.get("example.com", "192.0.2.1", &[]).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn root_certs_raw_passes_the_body_through_verbatim() {
    let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
    let server = TestServer::start(vec![CannedResponse::text(pem)]).await;
    let api = RootCertsRaw::with_base_url(Some(test_client()), server.base_url());

    let body = api.get(&[("trustStore", String::from("1"))]).await.unwrap();

    assert_eq!(body, pem);
    assert_eq!(server.requests().await, vec!["/getRootCertsRaw?trustStore=1"]);
}

#[tokio::test]
async fn status_codes_caller_maps_the_catalog() {
    let server = TestServer::start(vec![CannedResponse::json(json!({
        "statusDetails": {"PREPARING_REPORT": "Preparing the report"}
    }))])
    .await;
    let api = StatusCodes::with_base_url(Some(test_client()), server.base_url());

    let codes = api.get().await.unwrap();

    assert_eq!(
        codes.status_details.get("PREPARING_REPORT").map(String::as_str),
        Some("Preparing the report")
    );
    assert_eq!(server.requests().await, vec!["/getStatusCodes"]);
}

#[tokio::test]
async fn missing_required_field_is_a_malformed_response() {
    let server =
        TestServer::start(vec![CannedResponse::json(json!({"engineVersion": "2.2.0"}))]).await;
    let api = Info::with_base_url(Some(test_client()), server.base_url());

    let err = api.get().await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn http_500_and_503_mean_service_unavailable() {
    for status in [500, 503] {
        let server = TestServer::start(vec![CannedResponse::status(status)]).await;
        let api = Info::with_base_url(Some(test_client()), server.base_url());

        let err = api.get().await.unwrap_err();

        assert!(matches!(err, Error::ServiceUnavailable { .. }));
    }
}

#[tokio::test]
async fn http_429_and_529_mean_service_overloaded() {
    for status in [429, 529] {
        let server = TestServer::start(vec![CannedResponse::status(status)]).await;
        let api = Info::with_base_url(Some(test_client()), server.base_url());

        let err = api.get().await.unwrap_err();

        assert!(matches!(err, Error::ServiceOverloaded));
    }
}

#[tokio::test]
async fn other_http_errors_carry_their_status_code() {
    let server = TestServer::start(vec![CannedResponse::status(404)]).await;
    let api = Info::with_base_url(Some(test_client()), server.base_url());

    let err = api.get().await.unwrap_err();

    match err {
        Error::HttpStatus(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected Error::HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_means_service_unavailable() {
    init_tracing();
    // Bind a port, then drop the listener so connecting to it is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let base_url = url::Url::parse(&format!("http://{addr}/")).unwrap();
    let api = Info::with_base_url(Some(test_client()), base_url);

    let err = api.get().await.unwrap_err();

    assert!(matches!(err, Error::ServiceUnavailable { source: Some(_) }));
}

#[tokio::test]
async fn register_posts_the_contact_as_json() {
    let server = TestServer::start(vec![CannedResponse::json(json!({
        "message": "User successfully registered",
        "status": "success"
    }))])
    .await;
    let api = Register::with_base_url(Some(test_client()), server.base_url());

    let registration = api
        .register("Jane", "Doe", "jane.doe@example.com", "Example Org")
        .await
        .unwrap();

    assert_eq!(registration.status, "success");
    assert_eq!(server.requests().await, vec!["/register"]);
}

#[tokio::test]
async fn register_envelope_surfaces_the_remote_message() {
    let server = TestServer::start(vec![CannedResponse::json(json!({
        "errors": [{
            "field": "email",
            "message": "Email already registered with us. Please use different email."
        }]
    }))])
    .await;
    let api = Register::with_base_url(Some(test_client()), server.base_url());

    let err = api
        .register("Jane", "Doe", "jane.doe@example.com", "Example Org")
        .await
        .unwrap_err();

    match err {
        Error::Endpoint(message) => assert!(message.starts_with("Email already registered")),
        other => panic!("expected Error::Endpoint, got {other:?}"),
    }
}
