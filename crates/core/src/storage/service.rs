//! Artifact store implementation using Apache OpenDAL.

use opendal::{Operator, services};

use super::config::StorageProvider;
use super::error::StorageError;

/// Vendor-agnostic store for rendered reports and report assets.
pub struct ArtifactStore {
    operator: Operator,
    provider_name: &'static str,
}

impl ArtifactStore {
    /// Create a new artifact store from a provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: &StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(provider)?;
        Ok(Self {
            operator,
            provider_name: provider.name(),
        })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Provider name for logging.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    /// Write a rendered report under `key`.
    ///
    /// Reports are written once and never mutated.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn write_report(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.operator
            .write(key, bytes)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Read an asset (e.g. the report logo) from storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the key does not exist.
    pub async fn read_asset(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let buffer = self.operator.read(key).await.map_err(StorageError::from)?;
        Ok(buffer.to_vec())
    }

    /// Check if an object exists in storage.
    pub async fn exists(&self, key: &str) -> bool {
        self.operator.stat(key).await.is_ok()
    }
}
