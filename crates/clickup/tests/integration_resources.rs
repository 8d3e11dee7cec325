//! Integration tests for the resource services using wiremock
//!
//! Each service is checked for the path, query string and body it sends,
//! and for how it unwraps the response envelope.

mod common;

use std::io::Write;

use assert_matches::assert_matches;
use clickup::{
    CallContext, CreateCommentRequest, CreateFolderRequest, CreateListRequest, CreateTaskRequest,
    CreateWebhookRequest, Error, ErrorKind, OAuthTokenRequest, StartTimerRequest, TaskListParams,
    TimeRange, UpdateTaskRequest,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ctx() -> CallContext {
    CallContext::background()
}

#[tokio::test]
async fn test_authorized_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": 123, "username": "John Doe", "email": "john@example.com"}
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let user = client.auth().authorized_user(&ctx()).await.unwrap();

    assert_eq!(user.id, "123");
    assert_eq!(user.display_name(), "John Doe");
}

#[tokio::test]
async fn test_exchange_code_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth/token"))
        .and(body_json(json!({
            "client_id": "app",
            "client_secret": "shh",
            "code": "from-redirect"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "oauth-token"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let token = client
        .auth()
        .exchange_code(&ctx(), &OAuthTokenRequest::new("app", "shh", "from-redirect"))
        .await
        .unwrap();

    assert_eq!(token.access_token, "oauth-token");
    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_list_teams_from_fixture() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("teams")),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let teams = client.teams().list(&ctx()).await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, "1234");
    assert_eq!(teams[0].members[0].user.id, "123");
}

#[tokio::test]
async fn test_list_spaces_sends_archived_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team/1234/space"))
        .and(query_param("archived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spaces": [{"id": "790", "name": "Engineering", "archived": true}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let spaces = client.spaces().list(&ctx(), "1234", true).await.unwrap();

    assert_eq!(spaces[0].name, "Engineering");
    assert!(spaces[0].archived);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_folder_create_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/space/790/folder"))
        .and(body_json(json!({"name": "Q3"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "457", "name": "Q3"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/folder/457"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = CreateFolderRequest::builder().name("Q3").build().unwrap();
    let folder = client.folders().create(&ctx(), "790", &request).await.unwrap();
    assert_eq!(folder.id, "457");

    client.folders().delete(&ctx(), &folder.id).await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn test_lists_in_folder_and_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/folder/457/list"))
        .and(query_param("archived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [{"id": "124", "name": "Sprint 1"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/space/790/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [{"id": "125", "name": "Inbox"}, {"id": "126", "name": "Ideas"}]
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let in_folder = client.lists().list(&ctx(), "457", false).await.unwrap();
    let folderless = client.lists().list_folderless(&ctx(), "790", false).await.unwrap();

    assert_eq!(in_folder.len(), 1);
    assert_eq!(folderless.len(), 2);
    assert_eq!(folderless[1].name, "Ideas");
}

#[tokio::test]
async fn test_create_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/folder/457/list"))
        .and(body_json(json!({"name": "Backlog", "content": "Later"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "127", "name": "Backlog"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = CreateListRequest::builder()
        .name("Backlog")
        .content("Later")
        .build()
        .unwrap();
    let list = client.lists().create(&ctx(), "457", &request).await.unwrap();

    assert_eq!(list.id, "127");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_list_tasks_with_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/list/124/task"))
        .and(query_param("page", "3"))
        .and(query_param("include_closed", "true"))
        .and(query_param("subtasks", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [{"id": "9hx", "name": "Task"}],
            "last_page": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let params = TaskListParams::new().page(3).include_closed(true).subtasks(true);
    let page = client.tasks().list(&ctx(), "124", &params).await.unwrap();

    assert_eq!(page.tasks.len(), 1);
    assert_eq!(page.last_page, Some(true));
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=3&include_closed=true&subtasks=true"));
}

#[tokio::test]
async fn test_get_task_from_fixture() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/task/9hx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture("task")),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let task = client.tasks().get(&ctx(), "9hx").await.unwrap();

    assert_eq!(task.name, "New Task Name");
    assert_eq!(task.status.unwrap().status, "in progress");
    assert_eq!(task.assignees[0].id.as_deref(), Some("183"));
}

#[tokio::test]
async fn test_create_and_update_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/list/124/task"))
        .and(body_json(json!({"name": "Ship it", "priority": 1, "assignees": [183]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc", "name": "Ship it"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/task/abc"))
        .and(body_json(json!({"status": "complete"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "name": "Ship it",
            "status": {"status": "complete"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let create = CreateTaskRequest::builder()
        .name("Ship it")
        .priority(1u8)
        .assignees(vec![183])
        .build()
        .unwrap();
    let task = client.tasks().create(&ctx(), "124", &create).await.unwrap();

    let update = UpdateTaskRequest::builder().status("complete").build().unwrap();
    let updated = client.tasks().update(&ctx(), &task.id, &update).await.unwrap();

    assert_eq!(updated.status.unwrap().status, "complete");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_comments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/task/9hx/comment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [{"id": "462", "comment_text": "First"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/task/9hx/comment"))
        .and(body_json(json!({"comment_text": "Second", "notify_all": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 463, "hist_id": "1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let comments = client.comments().list(&ctx(), "9hx").await.unwrap();
    assert_eq!(comments[0].comment_text, "First");

    let request = CreateCommentRequest::builder()
        .comment_text("Second")
        .notify_all(true)
        .build()
        .unwrap();
    let created = client.comments().create(&ctx(), "9hx", &request).await.unwrap();
    assert_eq!(created.id, "463");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_upload_attachment_from_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/task/9hx/attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "att.txt",
            "title": "notes.txt",
            "extension": "txt"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("notes.txt");
    std::fs::File::create(&file_path)
        .unwrap()
        .write_all(b"attachment body")
        .unwrap();

    let client = common::client_for(&mock_server);
    let attachment = client
        .attachments()
        .upload_file(&ctx(), "9hx", &file_path)
        .await
        .unwrap();

    assert_eq!(attachment.title.as_deref(), Some("notes.txt"));
    let requests = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("attachment body"));
    assert!(body.contains("filename=\"notes.txt\""));
}

#[tokio::test]
async fn test_upload_missing_file_is_local_error() {
    let mock_server = MockServer::start().await;
    let client = common::client_for(&mock_server);

    let error = client
        .attachments()
        .upload_file(&ctx(), "9hx", "/no/such/file.bin")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_webhooks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/team/1234/webhook"))
        .and(body_json(json!({
            "endpoint": "https://example.com/hook",
            "events": ["taskCreated", "taskUpdated"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wh-1", "webhook": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/webhook/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = CreateWebhookRequest::builder()
        .endpoint("https://example.com/hook")
        .events(vec!["taskCreated".to_string(), "taskUpdated".to_string()])
        .build()
        .unwrap();
    let created = client.webhooks().create(&ctx(), "1234", &request).await.unwrap();
    client.webhooks().delete(&ctx(), &created.id).await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_time_tracking() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team/1234/time_entries"))
        .and(query_param("start_date", "1000"))
        .and(query_param("end_date", "2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "te-1", "duration": "60000"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/team/1234/time_entries/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("time_entry_running")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/team/1234/time_entries/start"))
        .and(body_json(json!({"tid": "1vwwavv"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("time_entry_running")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/team/1234/time_entries/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let time = client.time_tracking();

    let entries = time
        .list(&ctx(), "1234", &TimeRange::new().start_date(1000).end_date(2000))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_running());

    let running = time.current(&ctx(), "1234").await.unwrap().unwrap();
    assert!(running.is_running());

    let request = StartTimerRequest::builder().tid("1vwwavv").build().unwrap();
    assert!(time.start(&ctx(), "1234", &request).await.unwrap().is_some());
    assert!(time.stop(&ctx(), "1234").await.unwrap().is_none());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_goals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team/1234/goal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "goals": [{"id": "g1", "name": "Ship v2", "percent_completed": 40}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/goal/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "goal": {"id": "g1", "name": "Ship v2"}
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let goals = client.goals().list(&ctx(), "1234").await.unwrap();
    let goal = client.goals().get(&ctx(), "g1").await.unwrap();

    assert_eq!(goals[0].percent_completed, Some(40.0));
    assert_eq!(goal.name, "Ship v2");
}

#[rstest]
#[case("")]
#[case("  ")]
#[tokio::test]
async fn test_missing_identifier_sends_nothing(#[case] id: &str) {
    let mock_server = MockServer::start().await;
    let client = common::client_for(&mock_server);

    assert_matches!(
        client.tasks().get(&ctx(), id).await,
        Err(Error::MissingIdentifier("task_id"))
    );
    assert_matches!(
        client.spaces().list(&ctx(), id, false).await,
        Err(Error::MissingIdentifier("team_id"))
    );
    assert_matches!(
        client.webhooks().delete(&ctx(), id).await,
        Err(Error::MissingIdentifier("webhook_id"))
    );
    assert_matches!(
        client.attachments().upload(&ctx(), id, std::io::Cursor::new(Vec::new()), "x").await,
        Err(Error::MissingIdentifier("task_id"))
    );

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_service_error_keeps_label_and_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/task/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "err": "Task not found",
            "ECODE": "ITEM_013"
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let error = client.tasks().delete(&ctx(), "abc").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Api);
    assert_eq!(error.status_code(), Some(404));
    assert_eq!(error.to_string(), "delete task: API error (status 404): Not Found");
    assert_matches!(error, Error::WithContext { .. });
}
