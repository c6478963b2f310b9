//! DataService: aggregates the database time and the bucket listing into
//! one envelope.
//!
//! The two calls run one after the other. A database failure aborts the
//! whole request before storage is touched; a storage failure only degrades
//! the envelope.

use crate::models::envelope::{BucketListing, DataEnvelope};
use crate::services::{
    database::{DatabaseClock, DatabaseError},
    storage::BucketLister,
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct DataService {
    /// Shared database handle used for the liveness query.
    pub db: Arc<dyn DatabaseClock>,

    /// Shared object-store handle used for bucket listing.
    pub storage: Arc<dyn BucketLister>,
}

impl DataService {
    pub fn new(db: Arc<dyn DatabaseClock>, storage: Arc<dyn BucketLister>) -> Self {
        Self { db, storage }
    }

    /// Build the `/api/data` envelope.
    pub async fn fetch_envelope(&self) -> Result<DataEnvelope, DatabaseError> {
        let db_time = self.db.now().await?;
        let listing = self.list_buckets().await;
        Ok(DataEnvelope::new(db_time, listing))
    }

    /// List buckets, folding any failure into `BucketListing::Unavailable`.
    pub async fn list_buckets(&self) -> BucketListing {
        match self.storage.list_buckets().await {
            Ok(buckets) => BucketListing::Listed(buckets),
            Err(err) => {
                warn!("Could not list MinIO buckets: {}", err);
                BucketListing::Unavailable {
                    error: err.to_string(),
                }
            }
        }
    }
}
