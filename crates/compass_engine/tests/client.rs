use std::time::Duration;

use compass_engine::{
    Backend, ChatPayload, ClientSettings, FailureKind, JobRecord, PredictPayload, ReqwestBackend,
    RoleSuggestion,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer) -> ReqwestBackend {
    ReqwestBackend::new(ClientSettings::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn predict_posts_skills_and_interest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({
            "skills": ["Python", "SQL", ""],
            "interest": "Technology"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"role": "Data Analyst", "video_links": ["https://v/1", "https://v/2"]},
            {"role": "Software Developer", "video_links": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = PredictPayload {
        skills: vec!["Python".into(), "SQL".into(), String::new()],
        interest: "Technology".into(),
    };
    let roles = backend(&server).predict(&payload).await.expect("predict ok");

    assert_eq!(
        roles,
        vec![
            RoleSuggestion {
                role: "Data Analyst".into(),
                video_links: vec!["https://v/1".into(), "https://v/2".into()],
            },
            RoleSuggestion {
                role: "Software Developer".into(),
                video_links: vec![],
            },
        ]
    );
}

#[tokio::test]
async fn predict_error_status_keeps_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Missing skills or interest"})),
        )
        .mount(&server)
        .await;

    let payload = PredictPayload {
        skills: vec!["Go".into()],
        interest: String::new(),
    };
    let err = backend(&server).predict(&payload).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "Missing skills or interest");
}

#[tokio::test]
async fn status_without_error_body_falls_back_to_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_jobs"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = backend(&server).list_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert!(err.message.contains("502"));
}

#[tokio::test]
async fn chat_returns_response_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({"message": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi there"})))
        .mount(&server)
        .await;

    let reply = backend(&server)
        .chat(&ChatPayload {
            message: "Hello".into(),
        })
        .await
        .expect("chat ok");
    assert_eq!(reply.response, "Hi there");
}

#[tokio::test]
async fn chat_server_error_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "quota"})))
        .mount(&server)
        .await;

    let err = backend(&server)
        .chat(&ChatPayload {
            message: "Hello".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn jobs_are_listed_in_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"job_role": "Engineer", "interest": "Tech", "skills": "Go, SQL"},
            {"job_role": "Designer", "interest": "Art", "skills": "Figma"}
        ])))
        .mount(&server)
        .await;

    let jobs = backend(&server).list_jobs().await.expect("jobs ok");
    assert_eq!(
        jobs,
        vec![
            JobRecord {
                job_role: "Engineer".into(),
                interest: "Tech".into(),
                skills: "Go, SQL".into(),
            },
            JobRecord {
                job_role: "Designer".into(),
                interest: "Art".into(),
                skills: "Figma".into(),
            },
        ]
    );
}

#[tokio::test]
async fn malformed_payload_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": []})))
        .mount(&server)
        .await;

    let err = backend(&server).list_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn base_url_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/career/get_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client =
        ReqwestBackend::new(ClientSettings::with_base_url(format!("{}/career", server.uri())))
            .expect("client");
    assert!(client.list_jobs().await.expect("jobs ok").is_empty());
}

#[tokio::test]
async fn optional_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::with_base_url(server.uri())
    };
    let err = ReqwestBackend::new(settings)
        .expect("client")
        .list_jobs()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestBackend::new(ClientSettings::with_base_url("not a url")).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
