use std::collections::HashMap;

use crate::types::price::{CatalogEntry, PriceRecord};

/// Canonical currency -> latest valid price mapping.
///
/// Built from a complete feed snapshot and immutable afterwards; callers
/// rebuild from the next snapshot instead of mutating. Entries are held
/// sorted ascending by currency so iteration order is deterministic
/// regardless of feed order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceCatalog {
    entries: Vec<CatalogEntry>,
}

impl PriceCatalog {
    /// Collapse a raw snapshot into one entry per currency.
    ///
    /// Records with a missing or non-positive price are dropped. Among the
    /// valid records of a currency the latest `observed_at` wins; an equal
    /// timestamp keeps the record seen first. Empty or fully-invalid input
    /// yields an empty catalog.
    pub fn build(records: &[PriceRecord]) -> Self {
        let mut latest: HashMap<&str, (&PriceRecord, f64)> = HashMap::new();
        let mut discarded = 0usize;

        for record in records {
            let Some(price) = record.valid_price() else {
                discarded += 1;
                continue;
            };
            // Strict greater-than: ties keep the first-seen record.
            let replace = match latest.get(record.currency.as_str()) {
                Some((kept, _)) => record.observed_at > kept.observed_at,
                None => true,
            };
            if replace {
                latest.insert(record.currency.as_str(), (record, price));
            }
        }

        let mut entries: Vec<CatalogEntry> = latest
            .into_values()
            .map(|(record, price)| CatalogEntry {
                currency: record.currency.clone(),
                price,
            })
            .collect();
        entries.sort_by(|a, b| a.currency.cmp(&b.currency));

        if discarded > 0 {
            tracing::debug!(discarded, retained = entries.len(), "dropped invalid price records");
        }

        PriceCatalog { entries }
    }

    /// Entries sorted ascending by currency.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, currency: &str) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by(|entry| entry.currency.as_str().cmp(currency))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn price(&self, currency: &str) -> Option<f64> {
        self.get(currency).map(|entry| entry.price)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
