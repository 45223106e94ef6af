use serde::{Deserialize, Serialize};

/// The staff account behind an admin session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
  pub id: i64,
  pub username: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub email: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub first_name: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub last_name: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_staff: bool,
}
