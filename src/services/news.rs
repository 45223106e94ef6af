use log::*;

use serde::Deserialize;

use actix_web::{get, web, HttpResponse};

use crate::error::*;
use crate::app::*;
use crate::api::ApiClient;
use crate::feed::{self, CategoryPage, NewsDetail};
use crate::forms::article::PageRequest;
use crate::models::*;
use crate::util::local_now;

#[derive(Debug, Default, Deserialize)]
pub struct ListRequest {
  pub limit: Option<usize>,
  pub category: Option<String>,
}

// Relative image paths become absolute so the site can load them directly.
fn cards(api: &ApiClient, articles: &[Article]) -> Vec<DisplayCard> {
  map_articles(articles, local_now())
    .into_iter()
    .map(|card| with_media_url(api, card))
    .collect()
}

fn with_media_url(api: &ApiClient, mut card: DisplayCard) -> DisplayCard {
  card.image = card.image.map(|path| api.media_url(&path));
  card
}

/// Latest news cards, optionally for one category.
#[get("/news")]
async fn list(
  cfg: web::Data<NewsService>,
  api: web::Data<ApiClient>,
  req: web::Query<ListRequest>,
) -> Result<HttpResponse> {
  let req = req.into_inner();
  let mut articles = api.list_articles(&PageRequest::first(cfg.page_size)).await?;
  if let Some(ref wanted) = req.category {
    articles = feed::in_category(&articles, wanted);
  }
  let limit = req.limit.unwrap_or(cfg.list_len);
  let articles = feed::latest(&articles, limit);
  Ok(HttpResponse::Ok().json(cards(&api, &articles)))
}

/// Breaking news ticker.
#[get("/news/breaking")]
async fn breaking(
  cfg: web::Data<NewsService>,
  api: web::Data<ApiClient>,
) -> Result<HttpResponse> {
  let articles = api.list_articles(&PageRequest::first(cfg.page_size)).await?;
  let flagged = feed::latest(&feed::breaking(&articles), cfg.list_len);
  Ok(HttpResponse::Ok().json(cards(&api, &flagged)))
}

/// Article detail with sidebar updates and related news.
#[get("/news/{id}")]
async fn detail(
  cfg: web::Data<NewsService>,
  api: web::Data<ApiClient>,
  id: web::Path<i64>,
) -> Result<HttpResponse> {
  let id = id.into_inner();
  let article = api.get_article(id).await?;
  let pool = api.list_articles(&PageRequest::first(cfg.page_size)).await?;
  debug!("News detail {}: pool of {}", id, pool.len());

  let built = NewsDetail::build(&article, &pool, local_now());
  let page = NewsDetail {
    news: with_media_url(&api, built.news),
    sidebar: built.sidebar.into_iter().map(|c| with_media_url(&api, c)).collect(),
    related: built.related.into_iter().map(|c| with_media_url(&api, c)).collect(),
  };
  Ok(HttpResponse::Ok().json(page))
}

/// Category landing page.
#[get("/categories/{name}/news")]
async fn category(
  cfg: web::Data<NewsService>,
  api: web::Data<ApiClient>,
  name: web::Path<String>,
) -> Result<HttpResponse> {
  let articles = api.list_articles(&PageRequest::first(cfg.page_size)).await?;
  let mut page = CategoryPage::build(&articles, &name, local_now());
  page.featured = page.featured.map(|c| with_media_url(&api, c));
  for group in [&mut page.related, &mut page.main, &mut page.latest] {
    for card in group.iter_mut() {
      card.image = card.image.take().map(|path| api.media_url(&path));
    }
  }
  Ok(HttpResponse::Ok().json(page))
}

#[derive(Debug, Clone)]
pub struct NewsService {
  /// Articles fetched per listing request.
  pub page_size: u32,
  /// Cards returned by the plain listings.
  pub list_len: usize,
}

impl Default for NewsService {
  fn default() -> Self {
    Self {
      page_size: 50,
      list_len: 10,
    }
  }
}

impl super::Service for NewsService {
  fn load_app_config(&mut self, config: &AppConfig, _prefix: &str) -> Result<()> {
    if let Some(page_size) = config.get_uint("news.page_size")? {
      self.page_size = page_size;
    }
    if let Some(list_len) = config.get_uint("news.list_len")? {
      self.list_len = list_len;
    }
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .app_data(web::Data::new(self.clone()))
      .service(list)
      .service(breaking)
      .service(detail)
      .service(category);
  }
}

pub fn new_factory() -> NewsService {
  Default::default()
}
