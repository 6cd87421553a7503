use std::sync::Arc;

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use devtrack_infra::{InMemoryPostRepository, SharedSecretConfig, SharedSecretGate};

use super::configure_routes;
use crate::state::AppState;

const SECRET: &str = "letmein";
const ADMIN_TOKEN: &str = "admin-token-123";

fn test_state() -> AppState {
    let gate = Arc::new(SharedSecretGate::new(SharedSecretConfig::new(
        SECRET,
        ADMIN_TOKEN,
    )));
    AppState::with_repository(Arc::new(InMemoryPostRepository::new()), gate)
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await
    };
}

fn as_admin(req: test::TestRequest) -> test::TestRequest {
    req.cookie(Cookie::new("auth_token", ADMIN_TOKEN))
}

fn as_guest(req: test::TestRequest) -> test::TestRequest {
    req.cookie(Cookie::new("auth_token", "guest"))
}

fn valid_post(title: &str) -> Value {
    json!({
        "title": title,
        "content": format!("Notes for {}", title),
        "imageUrl": "https://example.com/cover.png",
        "category": "Backend",
    })
}

#[actix_web::test]
async fn test_login_with_secret_sets_cookie_and_unlocks_listing() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(json!({ "code": SECRET }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "auth_token")
        .expect("auth cookie set");
    assert_eq!(cookie.value(), ADMIN_TOKEN);
    assert_eq!(cookie.max_age(), Some(Duration::seconds(86400)));
    let cookie = Cookie::new("auth_token", cookie.value().to_string());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "token": ADMIN_TOKEN }));

    let req = test::TestRequest::get()
        .uri("/api/mongodb")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Success", "posts": [] }));
}

#[actix_web::test]
async fn test_login_with_wrong_code_is_unauthorized() {
    let app = init_app!();

    for body in [json!({ "code": "LETMEIN" }), json!({ "code": "" }), json!({})] {
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Invalid code" }));
    }
}

#[actix_web::test]
async fn test_login_without_body_is_unauthorized() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_auth_rejects_other_methods() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST");
}

#[actix_web::test]
async fn test_guest_login_issues_sentinel_and_can_read() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/auth/guest").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token"], "guest");

    let req = as_guest(test::TestRequest::get().uri("/api/mongodb")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_listing_requires_a_known_credential() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/mongodb").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/mongodb")
        .cookie(Cookie::new("auth_token", "forged"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_guest_cannot_create() {
    let app = init_app!();

    let req = as_guest(test::TestRequest::post().uri("/api/mongodb"))
        .set_json(valid_post("Guest post"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Payload validity does not matter.
    let req = as_guest(test::TestRequest::post().uri("/api/mongodb"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_create_without_credential_is_unauthorized() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/mongodb")
        .set_json(valid_post("Anon"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_missing_fields_is_rejected_without_write() {
    let app = init_app!();

    for field in ["title", "content", "category"] {
        let mut missing = valid_post("Incomplete");
        missing.as_object_mut().unwrap().remove(field);
        let mut empty = valid_post("Incomplete");
        empty[field] = json!("");

        for payload in [missing, empty] {
            let req = as_admin(test::TestRequest::post().uri("/api/mongodb"))
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field {field}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Title, content, and category are required");
        }
    }

    let req = as_admin(test::TestRequest::get().uri("/api/mongodb")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["posts"], json!([]));
}

#[actix_web::test]
async fn test_whitespace_only_title_is_accepted() {
    let app = init_app!();

    let req = as_admin(test::TestRequest::post().uri("/api/mongodb"))
        .set_json(valid_post("   "))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["post"]["title"], "   ");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = init_app!();

    let req = as_admin(test::TestRequest::post().uri("/api/mongodb"))
        .insert_header(header::ContentType::json())
        .set_payload("{ title: ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_created_post_is_listed_and_fetchable() {
    let app = init_app!();

    let req = as_admin(test::TestRequest::post().uri("/api/mongodb"))
        .set_json(valid_post("First week"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post created successfully");
    let created = body["post"].clone();
    let id = created["_id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "First week");
    assert_eq!(created["imageUrl"], "https://example.com/cover.png");
    assert!(created["createdAt"].as_str().unwrap().ends_with('Z'));

    let req = as_guest(test::TestRequest::get().uri("/api/mongodb")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["posts"], json!([created.clone()]));

    let req = as_guest(test::TestRequest::get().uri(&format!("/api/mongodb?id={}", id))).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "Success", "post": created }));
}

#[actix_web::test]
async fn test_listing_is_newest_first_and_filterable() {
    let app = init_app!();

    for (title, category) in [("one", "Backend"), ("two", "DevOps"), ("three", "Backend")] {
        let mut post = valid_post(title);
        post["category"] = json!(category);
        let req = as_admin(test::TestRequest::post().uri("/api/mongodb"))
            .set_json(post)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = as_admin(test::TestRequest::get().uri("/api/mongodb")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 3);
    let stamps: Vec<&str> = posts.iter().map(|p| p["createdAt"].as_str().unwrap()).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));

    let req = as_admin(test::TestRequest::get().uri("/api/mongodb?category=DevOps")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["posts"][0]["title"], "two");

    let req = as_admin(test::TestRequest::get().uri("/api/mongodb?category=All&search=THREE"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["posts"][0]["title"], "three");
}

#[actix_web::test]
async fn test_malformed_and_unknown_ids_give_same_not_found() {
    let app = init_app!();

    let mut responses = Vec::new();
    for id in ["not-an-id", "0f8fad5b-d9cb-469f-a165-70867728950e"] {
        let req = as_guest(test::TestRequest::get().uri(&format!("/api/mongodb?id={}", id)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        responses.push(body);
    }

    assert_eq!(responses[0], responses[1]);
    assert_eq!(responses[0], json!({ "message": "Post not found" }));
}

#[actix_web::test]
async fn test_repeated_id_query_is_bad_request_with_message() {
    let app = init_app!();

    let req = as_admin(test::TestRequest::get().uri("/api/mongodb?id=a&id=b")).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_post_store_rejects_other_methods() {
    let app = init_app!();

    let req = as_admin(test::TestRequest::delete().uri("/api/mongodb")).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Method not allowed" }));
}

#[actix_web::test]
async fn test_health_reports_ok() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
