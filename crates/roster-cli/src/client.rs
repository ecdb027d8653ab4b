//! Async HTTP client wrapping the roster JSON API.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use roster_core::{Contact, ContactFields};
use uuid::Uuid;

use crate::directory::ContactsApi;

/// Connection settings for the roster API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the roster JSON REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }
}

/// Turn a non-2xx response into an error naming the request.
fn check(resp: Response, what: &str) -> Result<Response> {
  if !resp.status().is_success() {
    return Err(anyhow!("{what} → {}", resp.status()));
  }
  Ok(resp)
}

impl ContactsApi for ApiClient {
  /// `GET /api/contacts`
  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let resp = self
      .client
      .get(self.url("/contacts"))
      .send()
      .await
      .context("GET /contacts failed")?;

    check(resp, "GET /contacts")?
      .json()
      .await
      .context("deserialising contacts")
  }

  /// `POST /api/contacts`
  async fn create_contact(&self, fields: &ContactFields) -> Result<Contact> {
    let resp = self
      .client
      .post(self.url("/contacts"))
      .json(fields)
      .send()
      .await
      .context("POST /contacts failed")?;

    check(resp, "POST /contacts")?
      .json()
      .await
      .context("deserialising created contact")
  }

  /// `PUT /api/contacts/<id>`
  async fn update_contact(&self, id: Uuid, fields: &ContactFields) -> Result<Contact> {
    let path = format!("/contacts/{id}");
    let resp = self
      .client
      .put(self.url(&path))
      .json(fields)
      .send()
      .await
      .with_context(|| format!("PUT {path} failed"))?;

    check(resp, &format!("PUT {path}"))?
      .json()
      .await
      .context("deserialising updated contact")
  }

  /// `DELETE /api/contacts/<id>`
  async fn delete_contact(&self, id: Uuid) -> Result<()> {
    let path = format!("/contacts/{id}");
    let resp = self
      .client
      .delete(self.url(&path))
      .send()
      .await
      .with_context(|| format!("DELETE {path} failed"))?;

    check(resp, &format!("DELETE {path}"))?;
    Ok(())
  }
}

// ─── End-to-end tests ─────────────────────────────────────────────────────────
