// src/domain/catalog.rs

use crate::domain::filter::{compute_results, SearchResults};
use crate::domain::listing::ListingRecord;
use crate::domain::query::QueryState;
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

const EMBEDDED_LISTINGS: &str = include_str!("../../data/listings.json");

/// The static set of listings served by this process.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ListingRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ListingRecord>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(ServerError::Config(format!(
                    "duplicate listing id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)
            .map_err(|e| ServerError::Config(format!("invalid listings data: {e}")))?;
        Self::new(records)
    }

    /// The listings shipped with the binary.
    pub fn embedded() -> Result<Self, ServerError> {
        Self::from_json(EMBEDDED_LISTINGS)
    }

    /// Loads from `path` when given, otherwise falls back to the embedded data.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        let catalog = match path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    ServerError::Config(format!("failed to read {}: {e}", path.display()))
                })?;
                Self::from_json(&json)?
            }
            None => Self::embedded()?,
        };

        info!(count = catalog.records.len(), "listings loaded");
        Ok(catalog)
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn search(&self, query: &QueryState) -> SearchResults<'_> {
        compute_results(&self.records, query)
    }
}
