use std::sync::{Arc, Mutex};

use gds_zendesk::models::{TicketUpdate, UserUpdate};
use gds_zendesk::{ErrorKind, Logger, RawConfig, Response, ZendeskClient, ZendeskError};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingLogger {
    events: Mutex<Vec<Response>>,
}

impl RecordingLogger {
    fn events(&self) -> Vec<Response> {
        self.events.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, event: &Response) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn client_for(server: &MockServer, logger: Arc<RecordingLogger>) -> ZendeskClient {
    let raw = RawConfig::new()
        .with_symbol("username", "user")
        .with_symbol("password", "pass")
        .with_symbol("url", format!("{}/api/v2/", server.uri()))
        .with_logger(logger);
    ZendeskClient::new(raw).unwrap()
}

#[test]
fn construction_requires_credentials() {
    let err = ZendeskClient::new(RawConfig::new().with_symbol("password", "abc")).unwrap_err();
    assert!(err.to_string().contains("username not provided"));

    let err = ZendeskClient::new(RawConfig::new().with_symbol("username", "abc")).unwrap_err();
    assert!(err.to_string().contains("password not provided"));
}

#[test]
fn construction_rejects_invalid_url() {
    let raw = RawConfig::new()
        .with_symbol("username", "user")
        .with_symbol("password", "pass")
        .with_text("url", "not a url");
    let err = ZendeskClient::new(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn handle_response_uses_configured_logger() {
    let logger = Arc::new(RecordingLogger::default());
    let raw = RawConfig::new()
        .with_symbol("username", "user")
        .with_symbol("password", "pass")
        .with_logger(logger.clone());
    let client = ZendeskClient::new(raw).unwrap();

    let ok = Response::new(200, "OK");
    assert_ok!(client.handle_response(&ok));
    let err = assert_err!(client.handle_response(&Response::new(403, "locked")));

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(logger.events(), vec![ok]);
}

#[tokio::test]
async fn finds_ticket_with_basic_auth() {
    let server = MockServer::start().await;
    let body = json!({"ticket": {"id": 35436, "subject": "Printer on fire", "status": "open"}});
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/35436.json"))
        .and(basic_auth("user", "pass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let logger = Arc::new(RecordingLogger::default());
    let client = client_for(&server, logger.clone());

    let ticket = assert_ok!(client.ticket().find(35436).await);

    assert_eq!(ticket.id, 35436);
    assert_eq!(ticket.display_subject(), "Printer on fire");
    assert_eq!(logger.events(), vec![Response::new(200, body)]);
}

#[tokio::test]
async fn rejected_credentials_are_authentication_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1.json"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Couldn't authenticate you"})),
        )
        .mount(&server)
        .await;

    let logger = Arc::new(RecordingLogger::default());
    let client = client_for(&server, logger.clone());

    let err = assert_err!(client.ticket().find(1).await);

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(err.to_string().contains("Authentication Error"));
    assert!(logger.events().is_empty());
}

#[tokio::test]
async fn rejected_ticket_update_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/7.json"))
        .and(body_json(json!({"ticket": {"status": "solved"}})))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Some validation failure"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::default());

    let update = TicketUpdate::new().with_status("solved");
    let err = assert_err!(client.ticket().update(7, &update).await);

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("Error creating ticket"));
    assert!(err.to_string().contains("Some validation failure"));
}

#[tokio::test]
async fn missing_ticket_is_unspecified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "RecordNotFound"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::default());

    let err = assert_err!(client.ticket().find(404).await);

    match err {
        ZendeskError::Unspecified { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body.error_text().as_deref(), Some("RecordNotFound"));
        }
        other => panic!("expected Unspecified, got {:?}", other),
    }
}

#[tokio::test]
async fn reports_suspended_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search.json"))
        .and(query_param("query", "suspended@example.gov.uk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 9, "email": "suspended@example.gov.uk", "suspended": true}],
            "count": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search.json"))
        .and(query_param("query", "nobody@example.gov.uk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": [], "count": 0})))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::default());

    assert!(assert_ok!(client.users().is_suspended("suspended@example.gov.uk").await));
    assert!(!assert_ok!(client.users().is_suspended("nobody@example.gov.uk").await));
}

#[tokio::test]
async fn updates_user() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/users/9.json"))
        .and(body_json(json!({"user": {"phone": "0123", "details": "Job title: Editor"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": 9, "phone": "0123", "details": "Job title: Editor"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::default());

    let update = UserUpdate::new().with_phone("0123").with_job("Editor");
    let user = assert_ok!(client.users().update(9, &update).await);

    assert_eq!(user.id, 9);
    assert_eq!(user.phone.as_deref(), Some("0123"));
}

#[tokio::test]
async fn non_json_success_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let logger = Arc::new(RecordingLogger::default());
    let client = client_for(&server, logger.clone());

    let err = assert_err!(client.users().find(1).await);

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(logger.events().len(), 1);
}
