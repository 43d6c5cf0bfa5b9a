use std::sync::Arc;

use actix_web::http::{Method, StatusCode, header::ContentType};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use posts_infra::InMemoryPostRepository;

use super::configure_routes;
use crate::state::AppState;

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::with_repository(Arc::new(
        InMemoryPostRepository::new(),
    )))
}

fn post_body(title: &str) -> Value {
    json!({
        "title": title,
        "body": "b",
        "author": {"fullName": "Full Name", "userName": "user", "email": "user@example.com"}
    })
}

macro_rules! init_app {
    () => {
        test::init_service(App::new().app_data(state()).configure(configure_routes)).await
    };
}

macro_rules! list {
    ($app:expr) => {{
        let req = test::TestRequest::get().uri("/").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json($app, req).await;
        posts
    }};
}

macro_rules! create {
    ($app:expr, $title:expr) => {{
        let req = test::TestRequest::post()
            .uri("/")
            .set_json(post_body($title))
            .to_request();
        let post: Value = test::call_and_read_body_json($app, req).await;
        post
    }};
}

#[actix_web::test]
async fn test_list_starts_empty() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, web::Bytes::from_static(b"[]"));
}

#[actix_web::test]
async fn test_create_then_list_contains_post_once() {
    let app = init_app!();

    let created = create!(&app, "A");
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "A");
    assert_eq!(created["author"]["fullName"], "Full Name");

    let posts = list!(&app);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "A");
    assert_eq!(posts[0]["body"], "b");
}

#[actix_web::test]
async fn test_create_with_empty_title_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(post_body(""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("title is required"));
    assert!(list!(&app).is_empty());
}

#[actix_web::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(ContentType::json())
        .set_payload("{\"title\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(list!(&app).is_empty());
}

#[actix_web::test]
async fn test_get_post_by_id() {
    let app = init_app!();
    create!(&app, "A");

    let req = test::TestRequest::get().uri("/1").to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["title"], "A");

    let req = test::TestRequest::get().uri("/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_replaces_post() {
    let app = init_app!();
    create!(&app, "A");

    let req = test::TestRequest::put()
        .uri("/1")
        .set_json(post_body("B"))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "B");
    assert_eq!(list!(&app)[0]["title"], "B");
}

#[actix_web::test]
async fn test_update_unknown_id_is_not_found() {
    let app = init_app!();
    create!(&app, "A");

    let req = test::TestRequest::put()
        .uri("/7")
        .set_json(post_body("B"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let posts = list!(&app);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "A");
}

#[actix_web::test]
async fn test_update_with_non_numeric_id_is_bad_request() {
    let app = init_app!();
    create!(&app, "A");

    // The id is rejected before the body is even decoded
    let req = test::TestRequest::put()
        .uri("/abc")
        .insert_header(ContentType::json())
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("ID could not be converted"));
    assert_eq!(list!(&app)[0]["title"], "A");
}

#[actix_web::test]
async fn test_update_with_empty_title_is_rejected() {
    let app = init_app!();
    create!(&app, "A");

    let req = test::TestRequest::put()
        .uri("/1")
        .set_json(post_body(""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list!(&app)[0]["title"], "A");
}

#[actix_web::test]
async fn test_delete_only_post_empties_list() {
    let app = init_app!();
    create!(&app, "A");

    let req = test::TestRequest::delete().uri("/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(list!(&app).is_empty());
}

#[actix_web::test]
async fn test_delete_errors() {
    let app = init_app!();

    let req = test::TestRequest::delete().uri("/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/x1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_ids_are_stable_across_deletes() {
    let app = init_app!();
    create!(&app, "first");
    create!(&app, "second");

    let req = test::TestRequest::delete().uri("/1").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/2").to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["title"], "second");

    let third = create!(&app, "third");
    assert_eq!(third["id"], 3);
}

#[actix_web::test]
async fn test_unsupported_method_is_not_allowed() {
    let app = init_app!();

    let req = test::TestRequest::default()
        .method(Method::PATCH)
        .uri("/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::default()
        .method(Method::PATCH)
        .uri("/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health["status"], "ok");
}
