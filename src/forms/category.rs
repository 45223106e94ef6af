use serde_json::{Map, Value as JsonValue};

use crate::error::*;
use crate::models::Category;

/// Category editor state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
  pub category: Category,
}

impl CategoryForm {
  pub fn new() -> Self {
    Self {
      category: Category {
        is_active: true,
        ..Default::default()
      },
    }
  }

  pub fn edit(category: Category) -> Self {
    Self { category }
  }

  /// Returns false when the name is blank or already listed.
  pub fn add_subcategory(&mut self, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || self.category.has_subcategory(name) {
      return false;
    }
    self.category.subcategories.push(name.to_string());
    true
  }

  pub fn remove_subcategory(&mut self, name: &str) {
    self.category.subcategories.retain(|sub| sub != name);
  }

  pub fn validate(&self) -> Result<()> {
    let mut errors = Map::new();
    if self.category.name.trim().is_empty() {
      errors.insert("name".into(), JsonValue::from("Name is required"));
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(Error::UnprocessableEntity(json!({ "errors": errors })))
    }
  }

  pub fn into_inner(self) -> Category {
    self.category
  }
}
