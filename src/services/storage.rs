//! Object-store access: bucket listing against MinIO through the S3 API.

use crate::{config::MinioConfig, models::bucket::BucketInfo};
use async_trait::async_trait;
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    error::DisplayErrorContext,
    types::Bucket,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    ListBuckets(String),
}

/// Anything that can enumerate buckets.
#[async_trait]
pub trait BucketLister: Send + Sync {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>, StorageError>;
}

/// MinIO client using static credentials and path-style addressing.
#[derive(Clone, Debug)]
pub struct MinioStorage {
    client: Client,
}

impl MinioStorage {
    pub fn new(cfg: &MinioConfig) -> Self {
        let credentials = Credentials::new(
            cfg.access_key.clone(),
            cfg.secret_key.clone(),
            None,
            None,
            "minio-static",
        );
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(cfg.endpoint_url())
            .region(Region::new(cfg.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(conf),
        }
    }
}

#[async_trait]
impl BucketLister for MinioStorage {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>, StorageError> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|err| {
                debug!("ListBuckets failed: {}", DisplayErrorContext(&err));
                StorageError::ListBuckets(err.to_string())
            })?;

        let buckets = output
            .buckets()
            .iter()
            .filter_map(bucket_info)
            .collect::<Vec<_>>();
        debug!("listed {} buckets", buckets.len());
        Ok(buckets)
    }
}

/// Convert an SDK bucket; entries without a name are dropped.
fn bucket_info(bucket: &Bucket) -> Option<BucketInfo> {
    let name = bucket.name()?;
    let creation_date = bucket
        .creation_date()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos()));
    Some(BucketInfo::new(name, creation_date))
}
