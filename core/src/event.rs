use serde::Deserialize;

use crate::errors::EnvelopeError;

/// Direct-invocation payload: `{"color": {"hex": "#rrggbb"}}`.
///
/// Missing fields deserialize to empty strings and are rejected by the color
/// parser rather than the deserializer, so a bare `{}` invoke reports a
/// malformed color, not a malformed event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorEvent {
    #[serde(default)]
    pub color: HexColor,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HexColor {
    #[serde(default)]
    pub hex: String,
}

/// HTTP-gateway body payload: `{"color": "#rrggbb"}`.
#[derive(Debug, Clone, Deserialize)]
struct BodyPayload {
    color: String,
}

/// The envelope shapes a swatch request can arrive in.
///
/// Every variant funnels through [`RequestEnvelope::color_hex`], so the rest
/// of the pipeline never cares which trigger delivered the request.
#[derive(Debug, Clone)]
pub enum RequestEnvelope {
    /// A plain Lambda invoke event.
    Direct(ColorEvent),
    /// An HTTP gateway request whose body is a stringified JSON document.
    HttpBody { body: Option<String> },
}

impl RequestEnvelope {
    pub fn from_http_body(body: Option<String>) -> Self {
        Self::HttpBody { body }
    }

    /// Extract the hex color string from whichever shape was received.
    pub fn color_hex(&self) -> Result<String, EnvelopeError> {
        match self {
            Self::Direct(event) => Ok(event.color.hex.clone()),
            Self::HttpBody { body } => {
                let body = body.as_deref().ok_or(EnvelopeError::EmptyBody)?;
                let payload: BodyPayload =
                    serde_json::from_str(body).map_err(|e| EnvelopeError::BodyDecode {
                        reason: e.to_string(),
                    })?;
                Ok(payload.color)
            }
        }
    }
}
