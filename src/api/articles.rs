use log::*;

use async_trait::async_trait;

use reqwest::Method;

use crate::error::*;
use crate::forms::article::{ArticleForm, PageRequest};
use crate::models::{Article, ArticlePage, ArticleStats, ArticleStatus};
use crate::search::CandidateSource;
use crate::util::local_now;

use super::ApiClient;

impl ApiClient {
  pub async fn list_articles(&self, page: &PageRequest) -> Result<Vec<Article>> {
    let req = self.request(Method::GET, "articles/")?.query(page);
    let page: ArticlePage = self.send(req, "GET articles/").await?;
    Ok(page.into_articles())
  }

  pub async fn get_article(&self, id: i64) -> Result<Article> {
    self.get(&format!("articles/{}/", id)).await
  }

  pub async fn create_article(&self, form: &ArticleForm) -> Result<Article> {
    self.write(Method::POST, "articles/", form).await
  }

  pub async fn update_article(&self, id: i64, form: &ArticleForm) -> Result<Article> {
    self.write(Method::PUT, &format!("articles/{}/", id), form).await
  }

  /// Create or update depending on whether the form carries an id.
  pub async fn save_article(&self, form: &ArticleForm) -> Result<Article> {
    match form.id {
      Some(id) => self.update_article(id, form).await,
      None => self.create_article(form).await,
    }
  }

  pub async fn delete_article(&self, id: i64) -> Result<()> {
    self.delete(&format!("articles/{}/", id)).await
  }

  /// Re-send the stored article with `status = published`.
  pub async fn publish_article(&self, id: i64) -> Result<Article> {
    let article = self.get_article(id).await?;
    let form = ArticleForm::from_article(&article, local_now())
      .with_status(ArticleStatus::Published);
    info!("Publishing article {}", id);
    self.write(Method::PATCH, &format!("articles/{}/", id), &form).await
  }

  pub async fn article_stats(&self) -> Result<ArticleStats> {
    self.get("article-stats/").await
  }
}

/// The first page of articles, used as the search candidate pool.
#[derive(Debug, Clone)]
pub struct ArticlePool {
  client: ApiClient,
  pool_size: u32,
}

impl ArticlePool {
  pub fn new(client: ApiClient, pool_size: u32) -> Self {
    Self { client, pool_size }
  }
}

#[async_trait]
impl CandidateSource for ArticlePool {
  async fn fetch_candidates(&self) -> Result<Vec<Article>> {
    self.client.list_articles(&PageRequest::first(self.pool_size)).await
  }
}
