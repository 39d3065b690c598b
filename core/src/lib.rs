//! Render a solid-color PNG swatch from a hex color string and store it in
//! S3. Runner crates wrap this pipeline for their trigger shapes.

pub mod color;
pub mod config;
pub mod errors;
pub mod event;
pub mod render;
pub mod s3;
pub mod service;
pub mod telemetry;

pub use color::Color;
pub use config::SwatchConfig;
pub use errors::{Result, SwatchError};
pub use event::{ColorEvent, RequestEnvelope};
pub use s3::{S3Client, UploadReceipt};
pub use service::SwatchService;
