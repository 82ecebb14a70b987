//! Catalog API client
//!
//! HTTP client for the objekt catalog. A lookup hits two endpoints
//! keyed by the same lowercase slug; both must answer 200 for the
//! record to exist. Non-success from either endpoint is reported with
//! both status codes, never collapsed into a not-found.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::types::{ObjektBySlug, ObjektMetadata, ObjektRecord};
use crate::error::CatalogError;

/// Seam between the orchestrator and the remote catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the combined record for a slug. `Ok(None)` means both
    /// endpoints answered 200 but the record is absent.
    async fn fetch(&self, slug: &str) -> Result<Option<ObjektRecord>, CatalogError>;
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(
        slug: &str,
        endpoint: &str,
        body: &str,
    ) -> Result<Option<T>, CatalogError> {
        serde_json::from_str(body).map_err(|e| CatalogError::MalformedResponse {
            slug: slug.to_string(),
            message: format!("{endpoint}: {e}"),
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch(&self, slug: &str) -> Result<Option<ObjektRecord>, CatalogError> {
        let metadata_url = format!("{}/objekts/metadata/{}", self.base_url, slug);
        let by_slug_url = format!("{}/objekts/by-slug/{}", self.base_url, slug);

        let metadata_response = self.client.get(&metadata_url).send().await?;
        let by_slug_response = self.client.get(&by_slug_url).send().await?;

        let metadata_status = metadata_response.status();
        let by_slug_status = by_slug_response.status();
        if !metadata_status.is_success() || !by_slug_status.is_success() {
            tracing::warn!(
                slug = %slug,
                metadata = %metadata_status,
                by_slug = %by_slug_status,
                "catalog returned non-success status"
            );
            return Err(CatalogError::Upstream {
                slug: slug.to_string(),
                metadata_status: metadata_status.as_u16(),
                by_slug_status: by_slug_status.as_u16(),
            });
        }

        let metadata_body = metadata_response.text().await?;
        let by_slug_body = by_slug_response.text().await?;

        let metadata: Option<ObjektMetadata> = Self::decode(slug, "metadata", &metadata_body)?;
        let by_slug: Option<ObjektBySlug> = Self::decode(slug, "by-slug", &by_slug_body)?;

        match (metadata, by_slug) {
            (Some(metadata), Some(by_slug)) => {
                tracing::debug!(slug = %slug, "fetched objekt record");
                Ok(Some(ObjektRecord { metadata, by_slug }))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_maps_serde_failures_to_malformed_response() {
        let err = CatalogClient::decode::<ObjektMetadata>("atom01-jiwoo-207z", "metadata", "{")
            .unwrap_err();
        match err {
            CatalogError::MalformedResponse { slug, message } => {
                assert_eq!(slug, "atom01-jiwoo-207z");
                assert!(message.starts_with("metadata:"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_null_body_is_absent_not_an_error() {
        let decoded =
            CatalogClient::decode::<ObjektMetadata>("atom01-jiwoo-207z", "metadata", "null")
                .unwrap();
        assert!(decoded.is_none());
    }
}
