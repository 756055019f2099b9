//! The live pricing configuration.
//!
//! Holds the current `PriceTable` behind an `Arc`. Updates publish a new
//! table; calculations never read the live table directly but take an
//! immutable snapshot derived for their own selection.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::catalog::ProfileColour;
use crate::config::glass::GlassSelection;
use crate::config::prices::PriceTable;
use crate::error::PersistError;

/// Default bound on a single persistence call.
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Durable storage for the active price table.
#[async_trait]
pub trait PriceTableSink: Send + Sync {
    /// Persist the active table, replacing the previous one.
    async fn save(&self, table: &PriceTable) -> Result<(), PersistError>;

    /// Load the last persisted table, if any.
    async fn load(&self) -> Result<Option<PriceTable>, PersistError>;
}

/// Versioned pricing configuration.
pub struct PricingStore {
    current: RwLock<Arc<PriceTable>>,
    sink: Option<Arc<dyn PriceTableSink>>,
    persist_timeout: Duration,
}

impl PricingStore {
    /// Create a store holding the default table and no persistence.
    pub fn new() -> Self {
        Self::from_table(PriceTable::default())
    }

    /// Create a store holding a given table.
    pub fn from_table(table: PriceTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
            sink: None,
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }

    /// Attach a sink that receives every published table.
    pub fn with_sink(mut self, sink: Arc<dyn PriceTableSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the bound on a single persistence call.
    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    /// Restore the last persisted table from the sink.
    ///
    /// A missing table or failing sink leaves the current table in place.
    pub async fn load(&self) -> Arc<PriceTable> {
        let Some(sink) = self.sink.clone() else {
            return self.snapshot();
        };

        match tokio::time::timeout(self.persist_timeout, sink.load()).await {
            Ok(Ok(Some(table))) => {
                tracing::info!(version = table.version, "pricing config loaded");
                let table = Arc::new(table);
                *self.write() = Arc::clone(&table);
                table
            }
            Ok(Ok(None)) => {
                tracing::debug!("no persisted pricing config, using defaults");
                self.snapshot()
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "failed to load pricing config");
                self.snapshot()
            }
            Err(_) => {
                let e = PersistError::Timeout(self.persist_timeout);
                tracing::warn!(error = %e, "failed to load pricing config");
                self.snapshot()
            }
        }
    }

    /// The current table.
    pub fn snapshot(&self) -> Arc<PriceTable> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// An immutable table for one calculation's own colour and glass.
    ///
    /// The live table is not modified.
    pub fn snapshot_for(&self, colour: ProfileColour, glass: GlassSelection) -> PriceTable {
        self.snapshot().for_selection(colour, glass)
    }

    /// Apply a colour bucket and publish the result.
    pub async fn update_profile(&self, colour: ProfileColour) -> Arc<PriceTable> {
        let table = self.publish(|current| current.with_profile(colour));
        tracing::info!(
            version = table.version,
            colour = %colour,
            bucket = ?colour.bucket(),
            "pricing config updated"
        );
        self.persist(&table).await;
        table
    }

    /// Replace the glass price and publish the result.
    ///
    /// Returns the new glass unit price per m².
    pub async fn update_glass(&self, glass: GlassSelection) -> Decimal {
        let table = self.publish(|current| current.with_glass(glass));
        tracing::info!(
            version = table.version,
            glass_type = %glass.glass_type,
            thickness = %glass.thickness,
            unit_price = %table.prices.glass,
            "pricing config updated"
        );
        self.persist(&table).await;
        table.prices.glass
    }

    fn publish(&self, update: impl FnOnce(&PriceTable) -> PriceTable) -> Arc<PriceTable> {
        let mut guard = self.write();
        let next = Arc::new(update(&guard));
        *guard = Arc::clone(&next);
        next
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Arc<PriceTable>> {
        match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    async fn persist(&self, table: &PriceTable) {
        let Some(sink) = &self.sink else {
            return;
        };

        let result = match tokio::time::timeout(self.persist_timeout, sink.save(table)).await {
            Ok(result) => result,
            Err(_) => Err(PersistError::Timeout(self.persist_timeout)),
        };

        if let Err(e) = result {
            tracing::warn!(
                version = table.version,
                error = %e,
                "pricing config persist failed"
            );
        }
    }
}

impl Default for PricingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GlassThickness, GlassType};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        saved: Mutex<Vec<u64>>,
        stored: Mutex<Option<PriceTable>>,
    }

    #[async_trait]
    impl PriceTableSink for RecordingSink {
        async fn save(&self, table: &PriceTable) -> Result<(), PersistError> {
            self.saved.lock().unwrap().push(table.version);
            *self.stored.lock().unwrap() = Some(table.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Option<PriceTable>, PersistError> {
            Ok(self.stored.lock().unwrap().clone())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl PriceTableSink for FailingSink {
        async fn save(&self, _table: &PriceTable) -> Result<(), PersistError> {
            Err(PersistError::Unavailable("connection refused".to_string()))
        }

        async fn load(&self) -> Result<Option<PriceTable>, PersistError> {
            Err(PersistError::Unavailable("connection refused".to_string()))
        }
    }

    struct HangingSink;

    #[async_trait]
    impl PriceTableSink for HangingSink {
        async fn save(&self, _table: &PriceTable) -> Result<(), PersistError> {
            std::future::pending().await
        }

        async fn load(&self) -> Result<Option<PriceTable>, PersistError> {
            std::future::pending().await
        }
    }

    fn clear_6mm() -> GlassSelection {
        GlassSelection::new(GlassType::Clear, GlassThickness::Mm6).unwrap()
    }

    #[tokio::test]
    async fn test_updates_bump_version_and_persist() {
        let sink = Arc::new(RecordingSink::default());
        let store = PricingStore::new().with_sink(sink.clone());

        let table = store.update_profile(ProfileColour::Black).await;
        assert_eq!(table.version, 1);
        let price = store.update_glass(clear_6mm()).await;
        assert_eq!(price, Decimal::from(180));

        let current = store.snapshot();
        assert_eq!(current.version, 2);
        assert_eq!(current.prices.jamb_p, Decimal::from(620));
        assert_eq!(*sink.saved.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_persist_failure_is_not_fatal() {
        let store = PricingStore::new().with_sink(Arc::new(FailingSink));
        let price = store.update_glass(clear_6mm()).await;
        assert_eq!(price, Decimal::from(180));
        assert_eq!(store.snapshot().prices.glass, Decimal::from(180));
    }

    #[tokio::test]
    async fn test_persist_timeout_is_bounded() {
        let store = PricingStore::new()
            .with_sink(Arc::new(HangingSink))
            .with_persist_timeout(Duration::from_millis(20));
        let table = store.update_profile(ProfileColour::Grey).await;
        assert_eq!(table.version, 1);
        assert_eq!(store.load().await.version, 1);
    }

    #[tokio::test]
    async fn test_load_restores_persisted_table() {
        let sink = Arc::new(RecordingSink::default());
        let first = PricingStore::new().with_sink(sink.clone());
        first.update_profile(ProfileColour::Grey).await;

        let second = PricingStore::new().with_sink(sink);
        let loaded = second.load().await;
        assert_eq!(loaded.version, 1);
        assert_eq!(second.snapshot().profile_colour, Some(ProfileColour::Grey));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_defaults() {
        let store = PricingStore::new().with_sink(Arc::new(FailingSink));
        assert_eq!(*store.load().await, PriceTable::default());
    }

    #[test]
    fn test_snapshot_for_does_not_touch_live_table() {
        let store = PricingStore::new();
        let snapshot = store.snapshot_for(ProfileColour::Black, clear_6mm());
        assert_eq!(snapshot.prices.glass, Decimal::from(180));
        assert_eq!(snapshot.prices.jamb_p, Decimal::from(620));
        assert_eq!(*store.snapshot(), PriceTable::default());
    }
}
