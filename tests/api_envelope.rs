// End-to-end handler tests over in-memory repositories: response envelope
// shape, status codes, and the create/attach/list flow.

mod support;

use actix_web::{test, web, App};
use event_backend::api::routes;
use serde_json::{json, Value};

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn empty_users_listing_returns_ok_envelope() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::get().uri("/users").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"status": "ok", "data": []}));
}

#[actix_web::test]
async fn non_numeric_cursor_returns_listing_arguments_error() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::get()
        .uri("/users?before=abc")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 400);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"status": "error", "error": {"message": "Listing arguments error"}})
    );
}

#[actix_web::test]
async fn both_cursors_return_listing_arguments_error() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::get()
        .uri("/users?before=5&after=10")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 400);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "Listing arguments error");
}

#[actix_web::test]
async fn missing_pivot_returns_400_not_404() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::get().uri("/users?after=999").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 400);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "Pivot user not found");
}

#[actix_web::test]
async fn missing_event_returns_404_envelope() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::get().uri("/events/123").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 404);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"status": "error", "error": {"message": "Event not found"}})
    );
}

#[actix_web::test]
async fn created_event_serializes_ids_as_strings() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/events")
        .set_json(json!({
            "name": "Google I/O 2018",
            "description": "Developer festival",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-10T18:00:00Z"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 201);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["start_time"], "2018-05-08T10:00:00Z");
}

#[actix_web::test]
async fn invalid_event_payload_returns_400_envelope() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/events")
        .set_json(json!({
            "name": "",
            "description": "Developer festival",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-10T18:00:00Z"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 400);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "error");
}

#[actix_web::test]
async fn creating_a_person_under_a_missing_event_returns_404() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/events/5/persons")
        .set_json(json!({"name": "Ada"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 404);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "Event not found");
}

#[actix_web::test]
async fn attach_flow_shows_up_in_the_schedule() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/events")
        .set_json(json!({
            "name": "Google I/O 2018",
            "description": "Developer festival",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-10T18:00:00Z"
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    let event_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri(&format!("/events/{event_id}/persons"))
        .set_json(json!({"name": "Ada Lovelace"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    let person_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri(&format!("/events/{event_id}/sessions"))
        .set_json(json!({
            "title": "Keynote",
            "description": "Opening keynote",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-08T11:00:00Z"
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    assert_eq!(body["data"]["persons"], json!([]));
    let session_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::put()
        .uri(&format!(
            "/events/{event_id}/sessions/{session_id}/persons/{person_id}"
        ))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 204);

    let request = test::TestRequest::get()
        .uri(&format!("/events/{event_id}/sessions"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    assert_eq!(body["data"][0]["persons"], json!([person_id]));

    let request = test::TestRequest::delete()
        .uri(&format!(
            "/events/{event_id}/sessions/{session_id}/persons/{person_id}"
        ))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 204);

    let request = test::TestRequest::get()
        .uri(&format!("/events/{event_id}/sessions"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    assert_eq!(body["data"][0]["persons"], json!([]));
}

#[actix_web::test]
async fn attaching_a_missing_person_returns_404() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/events")
        .set_json(json!({
            "name": "Google I/O 2018",
            "description": "Developer festival",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-10T18:00:00Z"
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    let event_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri(&format!("/events/{event_id}/sessions"))
        .set_json(json!({
            "title": "Keynote",
            "description": "Opening keynote",
            "start_time": "2018-05-08T10:00:00Z",
            "end_time": "2018-05-08T11:00:00Z"
        }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    let session_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::put()
        .uri(&format!(
            "/events/{event_id}/sessions/{session_id}/persons/12345"
        ))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 404);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "Person not found");
}

#[actix_web::test]
async fn created_user_appears_in_the_listing() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post().uri("/users").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 201);
    let body: Value = test::read_body_json(response).await;
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    let request = test::TestRequest::get().uri("/users").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, request).await).await;
    assert_eq!(body["data"][0]["id"], Value::String(user_id));
}

#[actix_web::test]
async fn duplicate_platform_slug_returns_conflict() {
    let (state, _repos) = support::test_state();
    let app = test_app!(state);

    let payload = json!({"slug": "telegram", "name": "Telegram"});
    let request = test::TestRequest::post()
        .uri("/platforms")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, request).await.status(), 201);

    let request = test::TestRequest::post()
        .uri("/platforms")
        .set_json(&payload)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 409);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "platform slug already taken");
}
