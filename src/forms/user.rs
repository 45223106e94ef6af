use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::User;

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub token: Option<String>,
  #[serde(default)]
  pub user: Option<User>,
}

/// Error body of a rejected login: `error` or DRF `non_field_errors`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginError {
  #[serde(default)]
  pub error: Option<String>,
  #[serde(default)]
  pub non_field_errors: Option<JsonValue>,
}

impl LoginError {
  pub fn message(&self) -> Option<String> {
    if let Some(ref error) = self.error {
      return Some(error.clone());
    }
    match self.non_field_errors {
      Some(JsonValue::String(ref msg)) => Some(msg.clone()),
      Some(JsonValue::Array(ref list)) => {
        let msgs: Vec<&str> = list.iter().filter_map(JsonValue::as_str).collect();
        if msgs.is_empty() { None } else { Some(msgs.join(" ")) }
      },
      _ => None,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAuthResponse {
  #[serde(default)]
  pub is_authenticated: bool,
}
