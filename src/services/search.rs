use log::*;

use serde::{Deserialize, Serialize};

use actix_web::{get, web, HttpResponse};

use crate::error::*;
use crate::app::*;
use crate::api::{ApiClient, ArticlePool};
use crate::models::SearchResult;
use crate::search::{CandidateSource, Scorer, SearchSettings};
use crate::util::{format_time_ago, local_now};

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
  #[serde(default)]
  pub q: String,
  pub limit: Option<usize>,
}

/// A ranked article plus its display time, as the search dropdown shows it.
#[derive(Debug, Serialize)]
pub struct SearchHit {
  #[serde(flatten)]
  pub result: SearchResult,
  pub time: String,
}

#[get("/search")]
async fn search(
  cfg: web::Data<SearchService>,
  api: web::Data<ApiClient>,
  req: web::Query<SearchRequest>,
) -> Result<HttpResponse> {
  let req = req.into_inner();
  let query = req.q.trim();
  if query.is_empty() {
    return Ok(HttpResponse::Ok().json(Vec::<SearchHit>::new()));
  }

  let settings = &cfg.settings;
  let pool = ArticlePool::new(api.get_ref().clone(), settings.pool_size);
  let candidates = pool.fetch_candidates().await?;
  let limit = req.limit.unwrap_or(settings.limit).min(settings.limit);

  let now = local_now();
  let hits: Vec<SearchHit> = Scorer::new(settings.bonus)
    .rank(query, candidates, limit)
    .into_iter()
    .map(|result| {
      let time = format_time_ago(&result.article.publish_date, &result.article.publish_time, now);
      SearchHit { result, time }
    })
    .collect();
  debug!("Search {:?}: {} hits", query, hits.len());
  Ok(HttpResponse::Ok().json(hits))
}

#[derive(Debug, Clone, Default)]
pub struct SearchService {
  pub settings: SearchSettings,
}

impl super::Service for SearchService {
  fn load_app_config(&mut self, config: &AppConfig, _prefix: &str) -> Result<()> {
    self.settings = SearchSettings::load_app_config(config)?;
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .app_data(web::Data::new(self.clone()))
      .service(search);
  }
}

pub fn new_factory() -> SearchService {
  Default::default()
}
