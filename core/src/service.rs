use chrono::Utc;
use tracing::{debug, info};

use crate::color::Color;
use crate::config::SwatchConfig;
use crate::errors::{ConfigError, Result, SwatchError};
use crate::event::RequestEnvelope;
use crate::render;
use crate::s3::{S3Client, UploadReceipt};

/// The pipeline behind every runner: extract the color, render the swatch,
/// encode it as PNG, upload it.
///
/// Built once at startup and shared across invocations, so the S3 client and
/// its connection pool are reused.
pub struct SwatchService {
    config: SwatchConfig,
    store: S3Client,
}

impl SwatchService {
    pub async fn new(config: SwatchConfig) -> Result<Self> {
        check(&config)?;
        let store = S3Client::new(config.storage.clone()).await;
        Ok(Self { config, store })
    }

    /// Build a service around an existing store. Tests inject mocked stores
    /// here.
    pub fn with_store(config: SwatchConfig, store: S3Client) -> Result<Self> {
        check(&config)?;
        Ok(Self { config, store })
    }

    pub async fn handle(&self, envelope: RequestEnvelope) -> Result<UploadReceipt> {
        let hex = envelope.color_hex()?;
        let color: Color = hex.parse()?;
        debug!("Rendering swatch for color {}", color);

        let image = render::solid(color);
        let png = render::encode_png(&image)?;

        let key = self.config.key.object_key(Utc::now());
        let receipt = self.store.put_swatch(&key, png).await?;

        info!("Swatch for {} stored at {}", color, receipt.location);
        Ok(receipt)
    }
}

fn check(config: &SwatchConfig) -> Result<()> {
    config.validate().map_err(|e| {
        SwatchError::Config(ConfigError::ValidationFailed {
            reason: e.to_string(),
        })
    })
}
