use reqwest::Method;

use crate::error::*;
use crate::models::Writer;

use super::ApiClient;

impl ApiClient {
  pub async fn list_writers(&self) -> Result<Vec<Writer>> {
    self.get("writers/").await
  }

  pub async fn create_writer(&self, writer: &Writer) -> Result<Writer> {
    self.write(Method::POST, "writers/", writer).await
  }

  pub async fn update_writer(&self, id: i64, writer: &Writer) -> Result<Writer> {
    self.write(Method::PUT, &format!("writers/{}/", id), writer).await
  }

  pub async fn delete_writer(&self, id: i64) -> Result<()> {
    self.delete(&format!("writers/{}/", id)).await
  }
}
