//! Typed JSON helpers over the raw document operations.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;
use crate::store::Store;

/// Load and deserialize a JSON document.
pub async fn load_json<T: DeserializeOwned>(store: &Store, key: &str) -> Result<T, StorageError> {
    let body = objects::get_document(store, key).await?;
    let value = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Serialize and store a JSON document.
pub async fn save_json<T: Serialize>(
    store: &Store,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_document(store, key, &body).await
}
