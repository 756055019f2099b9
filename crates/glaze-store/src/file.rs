//! JSON document store in a data directory.

use async_trait::async_trait;
use glaze_cart::line_item::CartLineItem;
use glaze_cart::store::{CartFilter, CartStore, ItemFilter, ItemPatch, StoreError};
use glaze_pricing::config::{PriceTable, PriceTableSink};
use glaze_pricing::PersistError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::FileStoreError;

/// Every cart line item ever added, including inactive ones.
pub const CART_ITEMS_FILE: &str = "cart_items.json";

/// The active price table.
pub const PRICING_FILE: &str = "pricing.json";

/// A store keeping each collection in one JSON file.
///
/// Writes replace the whole file through a temporary file and a rename, so
/// readers never see a partial document. The rename is the commit point and
/// runs inline: a write cancelled by a caller's timeout either never reached
/// it or completes in the same poll.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store, creating the data directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| FileStoreError::Open {
                path: dir.clone(),
                source,
            })?;
        tracing::debug!(dir = %dir.display(), "file store opened");

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every stored line item.
    pub async fn all_items(&self) -> Result<Vec<CartLineItem>, FileStoreError> {
        Ok(self.read(CART_ITEMS_FILE).await?.unwrap_or_default())
    }

    async fn modify_items<R>(
        &self,
        f: impl FnOnce(&mut Vec<CartLineItem>) -> R,
    ) -> Result<R, FileStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.all_items().await?;
        let result = f(&mut items);
        self.write(CART_ITEMS_FILE, &items).await?;
        Ok(result)
    }

    async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, FileStoreError> {
        let path = self.dir.join(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(FileStoreError::Io { path, source }),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| FileStoreError::Decode { path, source })
    }

    async fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), FileStoreError> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{}.tmp", name));
        let bytes = serde_json::to_vec_pretty(value)?;

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| FileStoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        std::fs::rename(&tmp, &path).map_err(|source| FileStoreError::Io { path, source })
    }
}

#[async_trait]
impl CartStore for FileStore {
    async fn find_active(&self, filter: &CartFilter) -> Result<Vec<CartLineItem>, StoreError> {
        let items = self.all_items().await?;
        Ok(items.into_iter().filter(|i| filter.matches(i)).collect())
    }

    async fn create(&self, item: CartLineItem) -> Result<(), StoreError> {
        self.modify_items(|items| items.push(item)).await?;
        Ok(())
    }

    async fn create_many(&self, new_items: Vec<CartLineItem>) -> Result<(), StoreError> {
        self.modify_items(|items| items.extend(new_items)).await?;
        Ok(())
    }

    async fn update_one(&self, filter: &ItemFilter, patch: &ItemPatch) -> Result<bool, StoreError> {
        let matched = self
            .modify_items(|items| match items.iter_mut().find(|i| filter.matches(i)) {
                Some(item) => {
                    patch.apply(item);
                    true
                }
                None => false,
            })
            .await?;
        Ok(matched)
    }

    async fn update_many(&self, filter: &CartFilter, patch: &ItemPatch) -> Result<u64, StoreError> {
        let patched = self
            .modify_items(|items| {
                let mut patched = 0;
                for item in items.iter_mut().filter(|i| filter.matches(i)) {
                    patch.apply(item);
                    patched += 1;
                }
                patched
            })
            .await?;
        Ok(patched)
    }
}

#[async_trait]
impl PriceTableSink for FileStore {
    async fn save(&self, table: &PriceTable) -> Result<(), PersistError> {
        let _guard = self.write_lock.lock().await;
        self.write(PRICING_FILE, table).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<PriceTable>, PersistError> {
        Ok(self.read(PRICING_FILE).await?)
    }
}
