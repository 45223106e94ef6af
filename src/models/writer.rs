use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriterStatus {
  #[default]
  Active,
  Inactive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub twitter: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub linkedin: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub instagram: String,
}

/// Writer profile. The backend uses snake_case for this resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Writer {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub email: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub phone: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub role: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub department: String,
  #[serde(default, deserialize_with = "expertise_list")]
  pub expertise: Vec<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub bio: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub location: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub social_links: SocialLinks,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub avatar: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub join_date: Option<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub articles_count: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub status: WriterStatus,
}

impl Writer {
  pub fn is_active(&self) -> bool {
    self.status == WriterStatus::Active
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Expertise {
  List(Vec<String>),
  Text(String),
}

// Older records store expertise as one comma separated string.
fn expertise_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let list = match Option::<Expertise>::deserialize(deserializer)? {
    Some(Expertise::List(list)) => list,
    Some(Expertise::Text(text)) => {
      text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
    },
    None => Vec::new(),
  };
  Ok(list)
}
