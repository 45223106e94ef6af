use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use chrono::NaiveDateTime;

use crate::error::*;
use crate::models::{Video, VideoStatus, VideoType};

/// Starting point for an uploaded news video.
pub fn custom_video() -> Video {
  Video {
    description: "Default description".into(),
    video_type: VideoType::News,
    platform: "custom".into(),
    status: VideoStatus::Draft,
    ..Default::default()
  }
}

/// Starting point for a live stream beginning at `now`.
pub fn live_stream(now: NaiveDateTime) -> Video {
  Video {
    description: "Live stream".into(),
    video_type: VideoType::Live,
    platform: "youtube".into(),
    status: VideoStatus::Live,
    is_live: true,
    live_start_time: Some(now.format("%Y-%m-%dT%H:%M").to_string()),
    ..Default::default()
  }
}

pub fn validate_video(video: &Video) -> Result<()> {
  let mut errors = Map::new();
  if video.title.trim().is_empty() {
    errors.insert("title".into(), JsonValue::from("Title is required"));
  }
  if video.video_type == VideoType::Live && video.platform_url.trim().is_empty() {
    errors.insert("platform_url".into(), JsonValue::from("Stream URL is required"));
  }
  if errors.is_empty() {
    Ok(())
  } else {
    Err(Error::UnprocessableEntity(json!({ "errors": errors })))
  }
}

/// Body for `videos/{id}/live/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveToggle {
  pub is_live: bool,
  pub live_start_time: Option<String>,
  pub status: VideoStatus,
}

impl LiveToggle {
  /// Flip a stream that is currently `is_live`.
  pub fn flip(is_live: bool, now: chrono::DateTime<chrono::Utc>) -> Self {
    if is_live {
      Self {
        is_live: false,
        live_start_time: None,
        status: VideoStatus::Archived,
      }
    } else {
      Self {
        is_live: true,
        live_start_time: Some(now.to_rfc3339()),
        status: VideoStatus::Live,
      }
    }
  }
}
