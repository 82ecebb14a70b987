//! Lookup orchestrator
//!
//! Turns validated (season, member, collection) keys into catalog
//! lookups and assembles ordered results. Batch lookups run
//! sequentially; one entry's failure never drops or reorders its
//! siblings.

use crate::catalog::{CatalogApi, ObjektRecord};
use crate::error::CatalogError;
use crate::parser::CardCode;
use crate::registry::Member;

/// Composite lookup key matching the catalog slug convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    pub season_id: &'static str,
    pub member: Member,
    /// 3-digit collection number with the variant letter appended.
    pub collection: String,
}

impl LookupKey {
    pub fn new(member: Member, code: &CardCode) -> Self {
        Self {
            season_id: code.season().id,
            member,
            collection: code.collection(),
        }
    }

    /// Lowercase `season-member-collection` slug.
    pub fn slug(&self) -> String {
        format!("{}-{}-{}", self.season_id, self.member.slug(), self.collection)
    }
}

/// Display-ready objekt assembled from both catalog endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Objekt {
    pub collection_no: String,
    pub front_image: String,
    pub back_image: String,
    pub copies: u64,
    pub transferable: u64,
    pub percentage: f64,
    pub description: String,
    /// Presentation hint: when every copy is transferable the renderer
    /// omits the transfer-stat fields. Derived here, not downstream.
    pub fully_transferable: bool,
}

impl From<ObjektRecord> for Objekt {
    fn from(record: ObjektRecord) -> Self {
        let fully_transferable = record.metadata.total == record.metadata.transferable;
        Self {
            collection_no: record.by_slug.collection_no,
            front_image: record.by_slug.front_image,
            back_image: record.by_slug.back_image,
            copies: record.metadata.total,
            transferable: record.metadata.transferable,
            percentage: record.metadata.percentage,
            description: record.metadata.metadata.description,
            fully_transferable,
        }
    }
}

/// Tri-state outcome of one lookup. Failures are values, never
/// unchecked errors crossing into presentation.
#[derive(Debug)]
pub enum ObjektResult {
    Found(Box<Objekt>),
    NotFound,
    ApiError(CatalogError),
}

/// Look up a single key. No retry, no backoff: a failed call is
/// surfaced immediately.
pub async fn lookup(api: &dyn CatalogApi, key: &LookupKey) -> ObjektResult {
    match api.fetch(&key.slug()).await {
        Ok(Some(record)) => ObjektResult::Found(Box::new(record.into())),
        Ok(None) => ObjektResult::NotFound,
        Err(err) => {
            tracing::warn!(slug = %key.slug(), error = %err, "catalog lookup failed");
            ObjektResult::ApiError(err)
        }
    }
}

/// Look up a batch of keys sequentially, preserving input order.
pub async fn lookup_batch(
    api: &dyn CatalogApi,
    keys: Vec<LookupKey>,
) -> Vec<(LookupKey, ObjektResult)> {
    let mut results = Vec::with_capacity(keys.len());
    for key in keys {
        let result = lookup(api, &key).await;
        results.push((key, result));
    }
    results
}
