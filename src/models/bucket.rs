//! Represents a bucket as reported by the object store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bucket listed on the MinIO server.
///
/// Passed through as-is from the storage client. Field names follow the
/// shape MinIO clients usually emit (`name`, `creationDate`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BucketInfo {
    /// Bucket name.
    pub name: String,

    /// When the bucket was created, if the server reported it.
    pub creation_date: Option<DateTime<Utc>>,
}

impl BucketInfo {
    pub fn new(name: impl Into<String>, creation_date: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            creation_date,
        }
    }
}
