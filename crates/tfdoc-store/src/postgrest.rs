//! Supabase/PostgREST record store over HTTP.
//!
//! Tables are addressed as `{base_url}/rest/v1/{table}`; filters use
//! PostgREST's `column=eq.value` syntax. Every request carries the service
//! key both as `apikey` and as a bearer token.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tfdoc_core::{Attribute, AttributeInput, Error, Resource, ResourceId, Result};

use crate::RecordStore;
use crate::rows::{NewAttribute, NewResource};

const SERVICE: &str = "store";

/// Record store backed by a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl PostgrestStore {
    /// Creates a store for the given project URL and service key.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, service_key)
    }

    /// Creates a store that reuses an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            service_key: service_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = self.table_url(table);
        tracing::debug!(%method, %url, "Store request");
        self.client
            .request(method, url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::upstream_with_source(SERVICE, format!("{what} request failed: {e}"), e))?;

        let response = check_status(response, what).await?;

        response
            .json()
            .await
            .map_err(|e| Error::upstream_with_source(SERVICE, format!("{what} response parse failed: {e}"), e))
    }
}

async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::upstream_response(SERVICE, what, status, &body))
}

#[async_trait]
impl RecordStore for PostgrestStore {
    async fn get_resource(&self, resource_name: &str, version: &str) -> Result<Option<Resource>> {
        let request = self.request(Method::GET, "resource").query(&[
            ("select", "*".to_string()),
            ("resource_name", format!("eq.{resource_name}")),
            ("version", format!("eq.{version}")),
        ]);

        let rows: Vec<Resource> = self.send(request, "resource query").await?;
        Ok(rows.into_iter().next())
    }

    async fn get_attributes(&self, resource_id: ResourceId) -> Result<Vec<Attribute>> {
        let request = self.request(Method::GET, "attribute").query(&[
            ("select", "*".to_string()),
            ("resource_id", format!("eq.{resource_id}")),
            ("order", "attribute_name.asc".to_string()),
        ]);

        self.send(request, "attribute query").await
    }

    async fn insert_resource(&self, resource: &NewResource) -> Result<Resource> {
        let request = self
            .request(Method::POST, "resource")
            .header("Prefer", "return=representation")
            .json(resource);

        let rows: Vec<Resource> = self.send(request, "resource insert").await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::upstream(SERVICE, "resource insert returned no data"))
    }

    async fn insert_attributes(
        &self,
        resource: &Resource,
        attributes: &[AttributeInput],
    ) -> Result<usize> {
        if attributes.is_empty() {
            return Ok(0);
        }

        let rows: Vec<NewAttribute> = attributes
            .iter()
            .map(|input| NewAttribute::from_input(resource, input))
            .collect();

        let request = self
            .request(Method::POST, "attribute")
            .header("Prefer", "return=minimal")
            .json(&rows);

        let response = request
            .send()
            .await
            .map_err(|e| Error::upstream_with_source(SERVICE, format!("attribute insert request failed: {e}"), e))?;
        check_status(response, "attribute insert").await?;

        Ok(rows.len())
    }
}
