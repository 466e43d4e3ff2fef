//! Request binding for permit endpoints.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Query, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::{Map, Value};
use service::PermitInput;

use crate::errors::JsonApiError;

/// Upper bound on a body we are willing to buffer while probing for content.
const MAX_PROBE_BODY: usize = 64 * 1024;

/// Create-permit input bound from a JSON body, a urlencoded or multipart form
/// body, or, when the body is empty, the query string.
#[derive(Debug)]
pub struct PermitPayload(pub PermitInput);

/// Text fields from a form, multipart body or query string. Values arrive as
/// strings, so integers and booleans are coerced here instead of by serde.
#[derive(Debug, Default, Deserialize)]
struct PermitFields {
    #[serde(default, deserialize_with = "lenient_int")]
    id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pid: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    status: Option<bool>,
}

impl From<PermitFields> for PermitInput {
    fn from(f: PermitFields) -> Self {
        Self { id: f.id, pid: f.pid.unwrap_or_default(), status: f.status }
    }
}

/// Empty string is zero; anything else must be a signed integer.
fn lenient_int<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Some(0));
    }
    raw.parse().map(Some).map_err(|e| D::Error::custom(format!("invalid integer `{raw}`: {e}")))
}

/// Empty string is false; otherwise the grammar of [`parse_bool`].
fn lenient_bool<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    if raw.is_empty() {
        return Ok(Some(false));
    }
    parse_bool(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid boolean `{raw}`")))
}

/// Collect the text parts of a multipart body. Files are skipped and the
/// first value of a repeated name wins.
async fn multipart_fields(mut multipart: Multipart) -> Result<PermitFields, JsonApiError> {
    let mut fields = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| JsonApiError::bad_request(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else { continue };
        let text = field.text().await.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        fields.entry(name).or_insert(Value::String(text));
    }
    serde_json::from_value(Value::Object(fields)).map_err(|e| JsonApiError::bad_request(e.to_string()))
}

#[async_trait]
impl<S> FromRequest<S> for PermitPayload
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(input) = Json::<PermitInput>::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            return Ok(Self(input));
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<PermitFields>::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            return Ok(Self(fields.into()));
        }
        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            return Ok(Self(multipart_fields(multipart).await?.into()));
        }

        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, MAX_PROBE_BODY)
            .await
            .map_err(|e| JsonApiError::bad_request(e.to_string()))?;
        if !bytes.is_empty() {
            return Err(JsonApiError::bad_request(format!(
                "unsupported content type `{content_type}`"
            )));
        }
        let Query(fields) = Query::<PermitFields>::try_from_uri(&parts.uri)
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        Ok(Self(fields.into()))
    }
}

/// Parse a boolean with the grammar
/// `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
