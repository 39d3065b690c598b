use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::ObjectCannedAcl;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::errors::UploadError;
use crate::render::PNG_CONTENT_TYPE;

/// What the store reported back for a completed upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    pub location: String,
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
}

pub struct S3Client {
    client: Client,
    config: StorageConfig,
}

impl S3Client {
    pub async fn new(config: StorageConfig) -> Self {
        let region = Region::new(config.region.clone());

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let (Some(access_key), Some(secret_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key,
                secret_key,
                config.session_token.clone(),
                None,
                "swatch-upload",
            ));
        }

        let shared_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            // Path-style addressing keeps local S3 stacks like MinIO working.
            builder = builder.endpoint_url(endpoint_url).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());
        Self { client, config }
    }

    /// Wrap an already-built SDK client. Tests inject mocked clients here.
    pub fn from_client(client: Client, config: StorageConfig) -> Self {
        Self { client, config }
    }

    pub async fn put_swatch(
        &self,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, UploadError> {
        debug!(
            "Uploading {} bytes to s3://{}/{}",
            bytes.len(),
            self.config.bucket,
            key
        );

        let mut request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(bytes.into())
            .content_type(PNG_CONTENT_TYPE);

        if self.config.public_read {
            request = request.acl(ObjectCannedAcl::PublicRead);
        }

        let output = request.send().await.map_err(|e| UploadError::Put {
            bucket: self.config.bucket.clone(),
            key: key.to_string(),
            reason: DisplayErrorContext(&e).to_string(),
        })?;

        let receipt = UploadReceipt {
            bucket: self.config.bucket.clone(),
            key: key.to_string(),
            location: self.object_url(key),
            e_tag: output.e_tag().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
        };

        info!("Uploaded swatch to {}", receipt.location);
        Ok(receipt)
    }

    /// URL of an uploaded object. Custom endpoints use path-style addressing,
    /// AWS proper uses the virtual-hosted form.
    pub fn object_url(&self, key: &str) -> String {
        match &self.config.endpoint_url {
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.config.bucket,
                key
            ),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.config.bucket, self.config.region, key
            ),
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}
