//! Public `/api` endpoints served over a mocked backend.

use actix_web::{test, App};

use ktm_post::app::AppConfig;
use ktm_post::services::config_services;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> AppConfig {
  AppConfig::from_toml(&format!(r#"
    [api]
    base_url = "{}/api/"

    [public]
    services = ["News", "Search"]
  "#, server.uri())).unwrap()
}

fn articles() -> Value {
  json!([
    { "id": 1, "title": "Budget speech", "excerpt": "The budget was read",
      "category": { "id": 1, "name": "Economy" }, "featuredImage": "/media/budget.jpg",
      "publishDate": "2024-05-10", "publishTime": "09:00",
      "updatedAt": "2024-05-10T09:00:00Z", "isBreaking": true },
    { "id": 2, "title": "Cricket squad named",
      "category": { "id": 2, "name": "Sports" },
      "publishDate": "2024-05-10", "publishTime": "10:00",
      "updatedAt": "2024-05-10T10:00:00Z" },
    { "id": 3, "title": "Budget reactions", "excerpt": "Parties respond",
      "category": { "id": 1, "name": "Economy" },
      "publishDate": "2024-05-10", "publishTime": "11:00",
      "updatedAt": "2024-05-10T11:00:00Z" }
  ])
}

async fn backend() -> MockServer {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(articles()))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/api/articles/1/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(articles()[0].clone()))
    .mount(&server)
    .await;
  server
}

fn ids(body: &Value) -> Vec<&str> {
  body.as_array().unwrap().iter().map(|c| c["id"].as_str().unwrap()).collect()
}

#[actix_web::test]
async fn news_lists_latest_cards() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/news?limit=2").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["3", "2"]);

  let req = test::TestRequest::get().uri("/api/news?category=Economy").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["3", "1"]);
  assert_eq!(body[1]["image"], format!("{}/media/budget.jpg", server.uri()));
}

#[actix_web::test]
async fn news_filters_by_category() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/news?category=Economy&limit=1").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["3"]);

  let req = test::TestRequest::get().uri("/api/news?category=Sports").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["2"]);
  assert_eq!(body[0]["category"], "Sports");

  let req = test::TestRequest::get().uri("/api/news?category=Weather").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn null_fields_do_not_break_listings() {
  let server = MockServer::start().await;
  let mut pool = articles();
  pool[1]["excerpt"] = json!(null);
  pool[1]["seoTitle"] = json!(null);
  pool[1]["readTime"] = json!(null);
  pool[1]["views"] = json!(null);
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(pool))
    .mount(&server)
    .await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/news").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["3", "2", "1"]);
  assert_eq!(body[1]["views"], "0");
  assert_eq!(body[1]["excerpt"], "");

  let req = test::TestRequest::get().uri("/api/search?q=cricket").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body[0]["id"], 2);
}

#[actix_web::test]
async fn breaking_and_detail() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/news/breaking").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec!["1"]);

  let req = test::TestRequest::get().uri("/api/news/1").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["news"]["title"], "Budget speech");
  assert_eq!(ids(&body["sidebar"]), vec!["3", "2", "1"]);
  assert_eq!(ids(&body["related"]), vec!["3"]);
}

#[actix_web::test]
async fn missing_article_is_404() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/news/42").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn category_page_groups_cards() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/categories/Economy/news").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["category"], "Economy");
  assert_eq!(body["featured"]["id"], "3");
  assert_eq!(ids(&body["related"]), vec!["1"]);
}

#[actix_web::test]
async fn search_ranks_and_adds_time() {
  let server = backend().await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/search?q=budget").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let hits = body.as_array().unwrap();
  assert_eq!(hits.len(), 2);
  // title + excerpt for the speech, title only for the reactions.
  assert_eq!(hits[0]["id"], 1);
  assert_eq!(hits[0]["matchScore"], 13);
  assert_eq!(hits[1]["id"], 3);
  assert_eq!(hits[1]["matchScore"], 11);
  assert!(hits[0]["time"].is_string());
}

#[actix_web::test]
async fn blank_search_skips_backend() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/articles/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(articles()))
    .expect(0)
    .mount(&server)
    .await;
  let services = config_services(&config(&server), "public").unwrap();
  let app = test::init_service(App::new().configure(|web| services.web_config(web))).await;

  let req = test::TestRequest::get().uri("/api/search?q=%20%20").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn unknown_service_is_rejected() {
  let config = AppConfig::from_toml(r#"
    [public]
    services = ["Weather"]
  "#).unwrap();
  assert!(config_services(&config, "public").is_err());
}

#[actix_web::test]
async fn duplicate_service_is_rejected() {
  let config = AppConfig::from_toml(r#"
    [public]
    services = ["News", "News"]
  "#).unwrap();
  assert!(config_services(&config, "public").is_err());
}

#[actix_web::test]
async fn negative_news_sizes_are_rejected() {
  let config = AppConfig::from_toml(r#"
    [news]
    page_size = -50
  "#).unwrap();
  assert!(config_services(&config, "public").is_err());
}
