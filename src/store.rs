//! Session-scoped record repository.
//!
//! A [`RecordStore`] is constructed once per session, from a file or from
//! in-memory rows, and is read-only thereafter. There is no implicit
//! caching or global state: callers that want fresh data call
//! [`RecordStore::reload`] explicitly, and tests inject fixtures through
//! [`RecordStore::from_records`].

use std::path::{Path, PathBuf};

use crate::error::{LoadErrorKind, OrderAdvisorError, Result};
use crate::loader;
use crate::model::OrderRecord;
use crate::utils::records_hash;

/// Sorted unique dimension values over the loaded dataset, for an external
/// control surface to populate its selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionValues {
    /// Distinct product IDs, sorted
    pub products: Vec<String>,
    /// Distinct warehouse IDs, sorted
    pub warehouses: Vec<String>,
    /// Distinct factory IDs, sorted
    pub factories: Vec<String>,
}

/// In-memory store of raw order records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<OrderRecord>,
    source: Option<PathBuf>,
    content_hash: u64,
}

impl RecordStore {
    /// Load a store from a CSV file, remembering the path for [`reload`](Self::reload).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = loader::read_records(&path)?;
        let content_hash = records_hash(&records);
        Ok(Self {
            records,
            source: Some(path),
            content_hash,
        })
    }

    /// Build a store from in-memory rows (fixture injection for tests,
    /// or callers that parse their own input).
    #[must_use]
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        let content_hash = records_hash(&records);
        Self {
            records,
            source: None,
            content_hash,
        }
    }

    /// Read-only view of the raw rows, in input order.
    #[must_use]
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Number of raw rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// xxh3 hash over the loaded rows, for cheap change detection.
    #[must_use]
    pub const fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// The path this store was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-read the source file, replacing the in-memory rows.
    ///
    /// Returns `true` when the reloaded content differs from what was held.
    /// Fails with [`LoadErrorKind::NoSourcePath`] for stores built from
    /// in-memory rows.
    pub fn reload(&mut self) -> Result<bool> {
        let Some(path) = self.source.clone() else {
            return Err(OrderAdvisorError::load(
                "reload requested",
                LoadErrorKind::NoSourcePath,
            ));
        };
        let records = loader::read_records(&path)?;
        let new_hash = records_hash(&records);
        let changed = new_hash != self.content_hash;
        if changed {
            tracing::info!(
                rows = records.len(),
                path = %path.display(),
                "record store reloaded with new content"
            );
        }
        self.records = records;
        self.content_hash = new_hash;
        Ok(changed)
    }

    /// Sorted unique product/warehouse/factory IDs over the dataset.
    #[must_use]
    pub fn dimension_values(&self) -> DimensionValues {
        let mut products: Vec<String> = Vec::new();
        let mut warehouses: Vec<String> = Vec::new();
        let mut factories: Vec<String> = Vec::new();
        for record in &self.records {
            products.push(record.product.clone());
            warehouses.push(record.warehouse.clone());
            factories.push(record.factory.clone());
        }
        for values in [&mut products, &mut warehouses, &mut factories] {
            values.sort();
            values.dedup();
        }
        DimensionValues {
            products,
            warehouses,
            factories,
        }
    }
}
