use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUCKET: &str = "color";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwatchConfig {
    pub storage: StorageConfig,
    pub key: KeyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub endpoint_url: Option<String>,
    pub public_read: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyConfig {
    pub prefix: String,
    pub style: KeyStyle,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    Fixed { name: String },
    Timestamp,
}

impl SwatchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an injectable variable lookup. Tests pass a map
    /// here instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bucket = lookup("SWATCH_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string());
        let region = lookup("SWATCH_REGION")
            .or_else(|| lookup("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let public_read = lookup("SWATCH_PUBLIC_READ")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);
        let style = match lookup("SWATCH_KEY_NAME") {
            Some(name) => KeyStyle::Fixed { name },
            None => KeyStyle::Timestamp,
        };

        Self {
            storage: StorageConfig {
                bucket,
                region,
                access_key_id: lookup("AWS_ACCESS_KEY_ID"),
                secret_access_key: lookup("AWS_SECRET_ACCESS_KEY"),
                session_token: lookup("AWS_SESSION_TOKEN"),
                endpoint_url: lookup("SWATCH_ENDPOINT_URL"),
                public_read,
            },
            key: KeyConfig {
                prefix: lookup("SWATCH_KEY_PREFIX").unwrap_or_default(),
                style,
            },
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.storage.bucket.is_empty() {
            return Err(anyhow::anyhow!("Bucket name cannot be empty"));
        }
        if self.storage.region.is_empty() {
            return Err(anyhow::anyhow!("Region cannot be empty"));
        }
        if let KeyStyle::Fixed { name } = &self.key.style {
            if name.is_empty() {
                return Err(anyhow::anyhow!("Fixed object key name cannot be empty"));
            }
        }
        Ok(())
    }
}

impl KeyConfig {
    /// Object key for an upload happening at `now`.
    ///
    /// Timestamp keys carry nanosecond precision so back-to-back uploads
    /// never collide. The `.png` suffix is appended unless the configured
    /// name already ends with it.
    pub fn object_key(&self, now: DateTime<Utc>) -> String {
        let stem = match &self.style {
            KeyStyle::Fixed { name } => name.clone(),
            KeyStyle::Timestamp => now.format("%Y-%m-%d-%H-%M-%S-%f").to_string(),
        };
        let name = if stem.ends_with(".png") {
            stem
        } else {
            format!("{stem}.png")
        };
        if self.prefix.is_empty() {
            name
        } else {
            format!("{}/{}", self.prefix.trim_end_matches('/'), name)
        }
    }
}
