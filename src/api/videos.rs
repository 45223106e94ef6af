use reqwest::Method;

use serde::Deserialize;

use crate::error::*;
use crate::forms::video::LiveToggle;
use crate::models::Video;

use super::ApiClient;

#[derive(Debug, Default, Deserialize)]
pub struct Detail {
  #[serde(default)]
  pub detail: String,
}

impl ApiClient {
  pub async fn list_videos(&self) -> Result<Vec<Video>> {
    self.get("videos/").await
  }

  pub async fn create_video(&self, video: &Video) -> Result<Video> {
    self.write(Method::POST, "videos/", video).await
  }

  pub async fn update_video(&self, id: i64, video: &Video) -> Result<Video> {
    self.write(Method::PUT, &format!("videos/{}/", id), video).await
  }

  pub async fn delete_video(&self, id: i64) -> Result<()> {
    self.delete(&format!("videos/{}/", id)).await
  }

  /// Start or stop a live stream. Returns the backend's status message.
  pub async fn set_live(&self, id: i64, toggle: &LiveToggle) -> Result<String> {
    let detail: Detail = self.write(Method::PATCH, &format!("videos/{}/live/", id), toggle).await?;
    Ok(detail.detail)
  }
}
