mod support;

use std::sync::Arc;

use support::{task, tasks_body, MockTransport};
use tablero::api::{Method, TaskApi};
use tablero::error::Error;
use tablero::task::{is_completed, Task, TaskDraft, TaskPatch};

const BASE: &str = "http://localhost:3000";

fn api_with(transport: &Arc<MockTransport>) -> TaskApi {
    TaskApi::new(Arc::clone(transport) as Arc<_>, BASE)
}

#[tokio::test]
async fn fetch_tasks_returns_decoded_array() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"[{"title":"Test"}]"#);
    let api = api_with(&transport);

    let tasks = api.fetch_tasks().await.expect("fetch");
    assert_eq!(tasks, vec![Task::with_title("Test")]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, format!("{BASE}/tasks"));
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn fetch_tasks_surfaces_http_status() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(500, "");
    let api = api_with(&transport);

    let err = api.fetch_tasks().await.expect_err("should fail");
    match err {
        Error::Http { status } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_tasks_surfaces_decode_failure() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, "not json");
    let api = api_with(&transport);

    let err = api.fetch_tasks().await.expect_err("should fail");
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn create_task_posts_draft_and_returns_record() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(201, r#"{"_id":"t1","title":"Nueva tarea","status":0}"#);
    let api = api_with(&transport);

    let draft = TaskDraft {
        title: "Nueva tarea".to_string(),
        ..TaskDraft::default()
    };
    let created = api.create_task(&draft).await.expect("create");
    assert_eq!(created.id.as_deref(), Some("t1"));
    assert_eq!(created.title, "Nueva tarea");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{BASE}/tasks"));
    let body = requests[0].body.as_deref().expect("json body");
    assert!(body.contains("\"title\":\"Nueva tarea\""));
}

#[tokio::test]
async fn create_task_propagates_http_failure() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(400, "");
    let api = api_with(&transport);

    let draft = TaskDraft {
        title: "x".to_string(),
        ..TaskDraft::default()
    };
    let err = api.create_task(&draft).await.expect_err("should fail");
    assert!(matches!(err, Error::Http { status: 400 }));
}

#[tokio::test]
async fn update_task_puts_patch_to_item_url() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"{"_id":"t1","title":"Editada","status":0}"#);
    let api = api_with(&transport);

    let patch = TaskPatch {
        title: Some("Editada".to_string()),
        ..TaskPatch::default()
    };
    let updated = api.update_task("t1", &patch).await.expect("update");
    assert_eq!(updated.title, "Editada");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].url, format!("{BASE}/tasks/t1"));
    let body = requests[0].body.as_deref().expect("json body");
    assert_eq!(body, r#"{"title":"Editada"}"#);
}

#[tokio::test]
async fn delete_task_true_on_success() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(204, "");
    let api = api_with(&transport);

    assert!(api.delete_task("123").await);

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].url, format!("{BASE}/tasks/123"));
}

#[tokio::test]
async fn delete_task_false_on_http_failure() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(404, "");
    let api = api_with(&transport);

    assert!(!api.delete_task("missing").await);
}

#[tokio::test]
async fn delete_task_false_on_transport_failure() {
    let transport = Arc::new(MockTransport::new());
    transport.push_transport_failure("connection refused");
    let api = api_with(&transport);

    assert!(!api.delete_task("123").await);
}

#[tokio::test]
async fn toggle_complete_flips_pending_to_completed() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"{"_id":"abc","status":1}"#);
    let api = api_with(&transport);

    let updated = api
        .toggle_complete(&task("abc", "t", 0))
        .await
        .expect("toggle");
    assert_eq!(updated.status, Some(1));
    assert!(is_completed(&updated));

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].url, format!("{BASE}/tasks/abc"));
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"status":1}"#));
}

#[tokio::test]
async fn toggle_complete_flips_completed_to_pending() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"{"_id":"abc","status":0}"#);
    let api = api_with(&transport);

    api.toggle_complete(&task("abc", "t", 1))
        .await
        .expect("toggle");

    let requests = transport.requests();
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"status":0}"#));
}

#[tokio::test]
async fn toggle_complete_flips_legacy_completed_records() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"{"_id":"abc","status":0}"#);
    let api = api_with(&transport);

    let legacy = Task {
        id: Some("abc".to_string()),
        completed: Some(true),
        ..Task::with_title("t")
    };
    api.toggle_complete(&legacy).await.expect("toggle");

    let requests = transport.requests();
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"status":0}"#));
}

#[tokio::test]
async fn tasks_body_round_trips_through_fetch() {
    let transport = Arc::new(MockTransport::new());
    let seeded = vec![task("a", "Uno", 0), task("b", "Dos", 1)];
    transport.push_response(200, &tasks_body(&seeded));
    let api = api_with(&transport);

    let fetched = api.fetch_tasks().await.expect("fetch");
    assert_eq!(fetched, seeded);
}
