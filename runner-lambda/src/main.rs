use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde::Serialize;
use tracing::error;

use swatch_core::config::SwatchConfig;
use swatch_core::event::{ColorEvent, RequestEnvelope};
use swatch_core::s3::UploadReceipt;
use swatch_core::service::SwatchService;
use swatch_core::telemetry::init_tracing;

#[derive(Debug, Serialize)]
struct SwatchResponse {
    pub status: String,
    pub receipt: UploadReceipt,
}

async fn function_handler(
    event: LambdaEvent<ColorEvent>,
    service: &SwatchService,
) -> Result<SwatchResponse, Error> {
    match service.handle(RequestEnvelope::Direct(event.payload)).await {
        Ok(receipt) => Ok(SwatchResponse {
            status: "uploaded".to_string(),
            receipt,
        }),
        Err(e) => {
            error!("Swatch request failed: {}", e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = SwatchConfig::from_env();
    let service = SwatchService::new(config).await?;

    lambda_runtime::run(service_fn(|event| function_handler(event, &service))).await
}
