use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
  #[default]
  News,
  Broadcast,
  Interview,
  Documentary,
  Live,
  Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
  #[default]
  Draft,
  Published,
  Live,
  Archived,
}

/// Video or live-stream entry. The backend uses snake_case for this resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Video {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub title: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub description: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub video_type: VideoType,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub platform: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub platform_url: String,
  #[serde(default)]
  pub thumbnail: Option<String>,
  #[serde(default)]
  pub video_file: Option<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub status: VideoStatus,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_live: bool,
  #[serde(default)]
  pub live_start_time: Option<String>,
  #[serde(default)]
  pub live_end_time: Option<String>,
  #[serde(default)]
  pub category: Option<i64>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub views: u64,
}

impl Video {
  /// A live stream that is currently on air.
  pub fn is_on_air(&self) -> bool {
    self.video_type == VideoType::Live && self.status == VideoStatus::Live
  }
}
