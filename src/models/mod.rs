use serde::{Deserialize, Deserializer};

pub mod article;
pub use article::*;

pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod search;
pub use search::*;

pub mod user;
pub use user::*;

pub mod video;
pub use video::*;

pub mod writer;
pub use writer::*;

/// Field deserializer that treats an explicit JSON `null` like a missing key.
///
/// The backend sends `null` for blank columns; `#[serde(default)]` alone only
/// covers absent keys.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
