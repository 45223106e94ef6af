use reqwest::Method;

use crate::error::*;
use crate::models::{Category, VideoCategory};

use super::ApiClient;

impl ApiClient {
  pub async fn list_categories(&self) -> Result<Vec<Category>> {
    self.get("categories/").await
  }

  pub async fn create_category(&self, category: &Category) -> Result<Category> {
    self.write(Method::POST, "categories/", category).await
  }

  pub async fn update_category(&self, id: i64, category: &Category) -> Result<Category> {
    self.write(Method::PUT, &format!("categories/{}/", id), category).await
  }

  pub async fn delete_category(&self, id: i64) -> Result<()> {
    self.delete(&format!("categories/{}/", id)).await
  }

  pub async fn list_video_categories(&self) -> Result<Vec<VideoCategory>> {
    self.get("video-categories/").await
  }
}
