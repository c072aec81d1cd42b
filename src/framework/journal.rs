//! # Journal
//!
//! Durable backing for a [`ResourceActor`](super::ResourceActor) table.
//!
//! The actor calls [`Journal::commit`] with the full table (existing rows plus
//! the staged batch) *before* it applies the batch in memory. A failed commit
//! therefore leaves both memory and disk on the previous table.
//!
//! [`JsonSnapshot`] is the file backend: one JSON array per table, written to a
//! temporary file, fsynced, then renamed over the previous snapshot.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::ActorEntity;

/// Errors raised by a journal backend.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// A durable store for one table.
#[async_trait]
pub trait Journal<T: ActorEntity>: Send + Sync {
    /// Reads back the last committed table, in creation order.
    async fn load(&mut self) -> Result<Vec<T>, JournalError>;

    /// Replaces the stored table. Must be all-or-nothing.
    async fn commit(&mut self, table: &[T]) -> Result<(), JournalError> {
        let bytes = serde_json::to_vec_pretty(table)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = write_synced(&temp_path, &bytes).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        sync_parent_dir(&self.path).await?;

        debug!(path = %self.path.display(), rows = table.len(), "Snapshot committed");
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

/// Makes the rename itself durable.
#[cfg(unix)]
async fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::File::open(dir).await?.sync_all().await,
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
async fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductCreate, Upc};
    use tempfile::TempDir;

    fn anvil() -> Product {
        Product::from_create_params(Upc::from("A"), ProductCreate::new("A", "anvil", "Acme", "1", 10.0, 1))
            .unwrap()
    }

    #[tokio::test]
    async fn test_commit_then_load() {
        let dir = TempDir::new().unwrap();
        let mut journal = JsonSnapshot::<Product>::new(dir.path(), "products");

        assert!(journal.load().await.unwrap().is_empty());
        journal.commit(&[anvil()]).await.unwrap();

        assert_eq!(journal.load().await.unwrap(), vec![anvil()]);
        assert!(!journal.temp_path().exists());
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut journal = JsonSnapshot::<Product>::new(dir.path(), "products");
        journal.commit(&[anvil()]).await.unwrap();

        // A directory where the snapshot belongs makes the rename fail
        // after the temp file was written.
        std::fs::remove_file(journal.path()).unwrap();
        std::fs::create_dir(journal.path()).unwrap();
        std::fs::write(journal.path().join("occupied"), b"x").unwrap();

        assert!(matches!(journal.commit(&[anvil()]).await, Err(JournalError::Io(_))));
        assert!(!journal.temp_path().exists());
    }
}
