//! Backend client behavior against a mocked REST API.

use ktm_post::api::{ApiClient, ApiSettings};
use ktm_post::auth::SessionService;
use ktm_post::error::Error;
use ktm_post::forms::article::PageRequest;
use ktm_post::forms::user::LOGIN_SUCCESSFUL;
use ktm_post::forms::video::LiveToggle;
use ktm_post::models::ArticleStatus;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
  let settings = ApiSettings::new(&format!("{}/api/", server.uri())).unwrap();
  ApiClient::new(settings, SessionService::new()).unwrap()
}

fn article_json(id: i64, title: &str) -> serde_json::Value {
  json!({
    "id": id,
    "title": title,
    "excerpt": "सारांश",
    "content": "पहिलो अनुच्छेद",
    "category": { "id": 1, "name": "राजनीति" },
    "author": { "id": 2, "name": "रमेश" },
    "publishDate": "2024-05-10",
    "publishTime": "09:00",
    "views": 1500,
    "status": "draft"
  })
}

async fn mount_login(server: &MockServer, token: &str) {
  Mock::given(method("POST"))
    .and(path("/api/login/"))
    .and(body_partial_json(json!({ "username": "editor" })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "message": LOGIN_SUCCESSFUL,
      "token": token,
      "user": { "id": 7, "username": "editor", "email": "editor@ktmpost.test" }
    })))
    .mount(server)
    .await;
}

#[tokio::test]
async fn list_articles_accepts_bare_array() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .and(query_param("page", "1"))
    .and(query_param("page_size", "100"))
    .respond_with(ResponseTemplate::new(200)
      .set_body_json(json!([article_json(1, "बजेट"), article_json(2, "खेल")])))
    .expect(1)
    .mount(&server)
    .await;

  let articles = client(&server).list_articles(&PageRequest::first(100)).await.unwrap();
  assert_eq!(articles.len(), 2);
  assert_eq!(articles[0].title, "बजेट");
  assert_eq!(articles[1].category.name, "राजनीति");
}

#[tokio::test]
async fn list_articles_accepts_paged_envelope() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "count": 1,
      "results": [article_json(3, "मौसम")]
    })))
    .mount(&server)
    .await;

  let articles = client(&server).list_articles(&PageRequest::first(10)).await.unwrap();
  assert_eq!(articles.len(), 1);
  assert_eq!(articles[0].id, 3);
}

#[tokio::test]
async fn missing_article_is_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/99/"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
    .mount(&server)
    .await;

  let err = client(&server).get_article(99).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/categories/"))
    .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
    .mount(&server)
    .await;

  match client(&server).list_categories().await {
    Err(Error::Api { status, body }) => {
      assert_eq!(status, 500);
      assert_eq!(body, "boom");
    },
    other => panic!("expected api error, got {:?}", other),
  }
}

#[tokio::test]
async fn login_starts_session_and_sends_token() {
  let server = MockServer::start().await;
  mount_login(&server, "abc123").await;
  Mock::given(method("GET"))
    .and(path("/api/check-auth/"))
    .and(header("Authorization", "Token abc123"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isAuthenticated": true })))
    .expect(1)
    .mount(&server)
    .await;

  let api = client(&server);
  let user = api.login("editor", "secret").await.unwrap();
  assert_eq!(user.username, "editor");
  assert_eq!(api.session().authorization().as_deref(), Some("Token abc123"));
  assert!(api.check_auth().await.unwrap());
}

#[tokio::test]
async fn login_rejection_reports_backend_message() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/login/"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({
      "non_field_errors": ["Unable to log in with provided credentials."]
    })))
    .mount(&server)
    .await;

  let api = client(&server);
  match api.login("editor", "wrong").await {
    Err(Error::Unauthorized(msg)) => assert_eq!(msg, "Unable to log in with provided credentials."),
    other => panic!("expected unauthorized, got {:?}", other),
  }
  assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn unauthorized_response_ends_session() {
  let server = MockServer::start().await;
  mount_login(&server, "stale").await;
  Mock::given(method("GET"))
    .and(path("/api/writers/"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid token." })))
    .mount(&server)
    .await;

  let api = client(&server);
  api.login("editor", "secret").await.unwrap();
  assert!(api.session().is_authenticated());

  match api.list_writers().await {
    Err(err) => {
      assert!(err.is_auth_failure());
      assert_eq!(err.to_string(), "unauthorized: Invalid token.");
    },
    Ok(_) => panic!("expected 401"),
  }
  assert!(!api.session().is_authenticated());
  assert!(api.session().authorization().is_none());
}

#[tokio::test]
async fn check_auth_without_session_skips_backend() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/check-auth/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isAuthenticated": true })))
    .expect(0)
    .mount(&server)
    .await;

  assert!(!client(&server).check_auth().await.unwrap());
}

#[tokio::test]
async fn publish_resends_article_as_published() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/5/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(article_json(5, "चुनाव")))
    .expect(1)
    .mount(&server)
    .await;

  let mut published = article_json(5, "चुनाव");
  published["status"] = json!("published");
  Mock::given(method("PATCH"))
    .and(path("/api/articles/5/"))
    .and(body_partial_json(json!({ "title": "चुनाव", "status": "published" })))
    .respond_with(ResponseTemplate::new(200).set_body_json(published))
    .expect(1)
    .mount(&server)
    .await;

  let article = client(&server).publish_article(5).await.unwrap();
  assert_eq!(article.status, ArticleStatus::Published);
}

#[tokio::test]
async fn validation_errors_keep_backend_body() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/categories/"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "name": ["This field is required."] })))
    .mount(&server)
    .await;

  let category = Default::default();
  match client(&server).create_category(&category).await {
    Err(Error::UnprocessableEntity(body)) => {
      assert_eq!(body["name"][0], "This field is required.");
    },
    other => panic!("expected validation error, got {:?}", other),
  }
}

#[tokio::test]
async fn toggling_live_returns_detail() {
  let server = MockServer::start().await;
  Mock::given(method("PATCH"))
    .and(path("/api/videos/4/live/"))
    .and(body_partial_json(json!({ "is_live": false, "status": "archived" })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "Stream stopped" })))
    .mount(&server)
    .await;

  let toggle = LiveToggle::flip(true, chrono::Utc::now());
  let detail = client(&server).set_live(4, &toggle).await.unwrap();
  assert_eq!(detail, "Stream stopped");
}

#[tokio::test]
async fn logout_revokes_token_on_backend() {
  let server = MockServer::start().await;
  mount_login(&server, "abc123").await;
  Mock::given(method("POST"))
    .and(path("/api/logout/"))
    .and(header("Authorization", "Token abc123"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })))
    .expect(1)
    .mount(&server)
    .await;

  let api = client(&server);
  api.login("editor", "secret").await.unwrap();
  api.logout().await;
  assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn logout_ends_session_when_backend_fails() {
  let server = MockServer::start().await;
  mount_login(&server, "abc123").await;
  Mock::given(method("POST"))
    .and(path("/api/logout/"))
    .respond_with(ResponseTemplate::new(500))
    .expect(1)
    .mount(&server)
    .await;

  let api = client(&server);
  api.login("editor", "secret").await.unwrap();
  api.logout().await;
  assert!(api.session().authorization().is_none());
}

#[tokio::test]
async fn logout_without_session_stays_local() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/logout/"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;

  client(&server).logout().await;
}

#[tokio::test]
async fn client_timeout_is_gateway_timeout() {
  use actix_web::ResponseError;

  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/1/"))
    .respond_with(ResponseTemplate::new(200)
      .set_body_json(article_json(1, "ढिलो"))
      .set_delay(std::time::Duration::from_secs(2)))
    .mount(&server)
    .await;

  let mut settings = ApiSettings::new(&format!("{}/api/", server.uri())).unwrap();
  settings.timeout = Some(std::time::Duration::from_millis(100));
  let api = ApiClient::new(settings, SessionService::new()).unwrap();

  let err = api.get_article(1).await.unwrap_err();
  assert!(matches!(err, Error::HttpError { .. }), "got {:?}", err);
  assert_eq!(err.status_code().as_u16(), 504);
  assert_eq!(err.error_response().status().as_u16(), 504);
}

#[tokio::test]
async fn null_fields_in_page_are_tolerated() {
  let server = MockServer::start().await;
  let mut blank = article_json(2, "खाली");
  blank["seoTitle"] = json!(null);
  blank["readTime"] = json!(null);
  blank["excerpt"] = json!(null);
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([article_json(1, "बजेट"), blank])))
    .mount(&server)
    .await;

  let articles = client(&server).list_articles(&PageRequest::first(100)).await.unwrap();
  assert_eq!(articles.len(), 2);
  assert_eq!(articles[1].seo_title, "");
  assert_eq!(articles[1].read_time, 0);
}

#[tokio::test]
async fn check_auth_rejection_ends_session() {
  let server = MockServer::start().await;
  mount_login(&server, "abc123").await;
  Mock::given(method("GET"))
    .and(path("/api/check-auth/"))
    .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "detail": "Token revoked." })))
    .expect(1)
    .mount(&server)
    .await;

  let api = client(&server);
  api.login("editor", "secret").await.unwrap();
  assert!(!api.check_auth().await.unwrap());
  assert!(!api.session().is_authenticated());
}
