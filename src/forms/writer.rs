use serde_json::{Map, Value as JsonValue};

use crate::error::*;
use crate::models::Writer;

pub fn validate_writer(writer: &Writer) -> Result<()> {
  let mut errors = Map::new();
  if writer.name.trim().is_empty() {
    errors.insert("name".into(), JsonValue::from("Name is required"));
  }
  let email = writer.email.trim();
  if email.is_empty() {
    errors.insert("email".into(), JsonValue::from("Email is required"));
  } else if !email.contains('@') {
    errors.insert("email".into(), JsonValue::from("Email is invalid"));
  }
  if errors.is_empty() {
    Ok(())
  } else {
    Err(Error::UnprocessableEntity(json!({ "errors": errors })))
  }
}
