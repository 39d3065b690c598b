use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{error, warn};

use swatch_core::config::SwatchConfig;
use swatch_core::event::RequestEnvelope;
use swatch_core::service::SwatchService;
use swatch_core::telemetry::init_tracing;

async fn function_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
    service: &SwatchService,
) -> Result<ApiGatewayProxyResponse, Error> {
    let envelope = RequestEnvelope::from_http_body(event.payload.body);
    match service.handle(envelope).await {
        Ok(receipt) => Ok(respond(200, receipt.location)),
        Err(e) if e.is_client_error() => {
            warn!("Rejecting swatch request: {}", e);
            Ok(respond(400, e.to_string()))
        }
        Err(e) => {
            error!("Swatch request failed: {}", e);
            Ok(respond(500, e.to_string()))
        }
    }
}

fn respond(status_code: i64, body: String) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    ApiGatewayProxyResponse {
        status_code,
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = SwatchConfig::from_env();
    let service = SwatchService::new(config).await?;

    lambda_runtime::run(service_fn(|event| function_handler(event, &service))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::Client;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_smithy_mocks::{Rule, mock, mock_client};
    use lambda_runtime::Context;
    use swatch_core::s3::S3Client;

    fn test_service(rule: &Rule) -> SwatchService {
        let s3 = mock_client!(aws_sdk_s3, [rule]);
        let config = SwatchConfig::from_lookup(|_| None);
        let store = S3Client::from_client(s3, config.storage.clone());
        SwatchService::with_store(config, store).unwrap()
    }

    fn gateway_event(body: Option<&str>) -> LambdaEvent<ApiGatewayProxyRequest> {
        let request = ApiGatewayProxyRequest {
            body: body.map(str::to_string),
            ..Default::default()
        };
        LambdaEvent::new(request, Context::default())
    }

    fn body_text(response: &ApiGatewayProxyResponse) -> &str {
        match response.body.as_ref().unwrap() {
            Body::Text(text) => text,
            other => panic!("expected text body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_request_returns_object_location() {
        let rule = mock!(Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());
        let service = test_service(&rule);

        let event = gateway_event(Some(r##"{"color": "#ff8800"}"##));
        let response = function_handler(event, &service).await.unwrap();

        assert_eq!(rule.num_calls(), 1);
        assert_eq!(response.status_code, 200);
        assert!(!response.is_base64_encoded);
        assert_eq!(response.headers[CONTENT_TYPE], "text/plain");
        let location = body_text(&response);
        assert!(location.starts_with("https://color.s3.us-east-1.amazonaws.com/"));
        assert!(location.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_missing_body_returns_400() {
        let rule = mock!(Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let service = test_service(&rule);

        let response = function_handler(gateway_event(None), &service)
            .await
            .unwrap();

        assert_eq!(response.status_code, 400);
        assert!(body_text(&response).contains("empty"));
        assert_eq!(rule.num_calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let rule = mock!(Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let service = test_service(&rule);

        let response = function_handler(gateway_event(Some("{broken")), &service)
            .await
            .unwrap();

        assert_eq!(response.status_code, 400);
        assert!(body_text(&response).contains("decode"));
        assert_eq!(rule.num_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_color_returns_400() {
        let rule = mock!(Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let service = test_service(&rule);

        let event = gateway_event(Some(r##"{"color": "#zz0000"}"##));
        let response = function_handler(event, &service).await.unwrap();

        assert_eq!(response.status_code, 400);
        assert!(body_text(&response).contains("Color parse error"));
        assert_eq!(rule.num_calls(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let rule = mock!(Client::put_object).then_error(|| {
            PutObjectError::generic(
                ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("Access Denied")
                    .build(),
            )
        });
        let service = test_service(&rule);

        let event = gateway_event(Some(r##"{"color": "#ff8800"}"##));
        let response = function_handler(event, &service).await.unwrap();

        assert_eq!(response.status_code, 500);
        assert!(body_text(&response).contains("s3://color/"));
    }
}
