//! Raw document operations, mapping IO errors to [`StorageError`].

use std::io::ErrorKind;

use tokio::fs;

use crate::error::StorageError;
use crate::store::Store;

/// Read a document's bytes.
pub async fn get_document(store: &Store, key: &str) -> Result<Vec<u8>, StorageError> {
    match fs::read(store.resolve(key)).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
            key: key.to_string(),
        }),
        Err(e) => Err(StorageError::Read {
            key: key.to_string(),
            source: e,
        }),
    }
}

/// Write a document atomically: the body goes to a temp file first and is
/// renamed into place, so a reader never observes a partial write.
pub async fn put_document(store: &Store, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = store.resolve(key);
    let write_err = |e| StorageError::Write {
        key: key.to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, body).await.map_err(write_err)?;
    fs::rename(&tmp, &path).await.map_err(write_err)?;

    tracing::debug!(key, "document written");
    Ok(())
}

/// Delete a document. Deleting a missing document is not an error.
pub async fn delete_document(store: &Store, key: &str) -> Result<(), StorageError> {
    match fs::remove_file(store.resolve(key)).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Delete {
            key: key.to_string(),
            source: e,
        }),
    }
}

/// List document keys under a prefix, sorted. A prefix with no documents
/// yields an empty list.
pub async fn list_documents(store: &Store, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = store.resolve(prefix);
    let list_err = |e| StorageError::List {
        prefix: prefix.to_string(),
        source: e,
    };

    let mut entries = match fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        if !entry.file_type().await.map_err(list_err)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            // Leftovers from an interrupted atomic write are not documents.
            if name.ends_with(".tmp") {
                continue;
            }
            keys.push(format!("{prefix}{name}"));
        }
    }

    keys.sort();
    Ok(keys)
}
