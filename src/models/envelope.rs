//! The JSON envelope served by `GET /api/data`.

use super::bucket::BucketInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting carried in every successful envelope.
pub const GREETING: &str = "Hello from Backend!";

/// Name used for the stand-in entry when MinIO could not be listed.
pub const STORAGE_ERROR_NAME: &str = "Error connecting to MinIO";

/// Outcome of the bucket-listing step.
///
/// Listing failures are recoverable, so they are carried as data rather
/// than propagated as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BucketListing {
    Listed(Vec<BucketInfo>),
    Unavailable { error: String },
}

/// Stand-in entry placed in `minio_buckets` when listing failed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorPlaceholder {
    pub name: String,
    pub error: String,
}

/// One element of `minio_buckets`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum BucketEntry {
    // Tried first when decoding: only the placeholder has an `error` field.
    Placeholder(ErrorPlaceholder),
    Bucket(BucketInfo),
}

/// Response body of a successful `GET /api/data`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DataEnvelope {
    pub message: String,

    /// Database server time from `SELECT NOW()`.
    pub db_time: DateTime<Utc>,

    pub minio_buckets: Vec<BucketEntry>,

    /// Listing failure, reported apart from the bucket data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minio_error: Option<String>,
}

impl DataEnvelope {
    pub fn new(db_time: DateTime<Utc>, listing: BucketListing) -> Self {
        let (minio_buckets, minio_error) = match listing {
            BucketListing::Listed(buckets) => {
                (buckets.into_iter().map(BucketEntry::Bucket).collect(), None)
            }
            BucketListing::Unavailable { error } => (
                vec![BucketEntry::Placeholder(ErrorPlaceholder {
                    name: STORAGE_ERROR_NAME.to_string(),
                    error: error.clone(),
                })],
                Some(error),
            ),
        };

        Self {
            message: GREETING.to_string(),
            db_time,
            minio_buckets,
            minio_error,
        }
    }
}
