//! Request extractors

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// JSON body extractor that never rejects.
///
/// The body is parsed as JSON whatever the `Content-Type`. A missing,
/// unreadable or malformed body yields `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                debug!("unreadable request body, using defaults: {rejection}");
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                debug!("request body is not a JSON object, using defaults: {err}");
                Ok(Self(T::default()))
            }
        }
    }
}

/// Deserializes any JSON value into a string.
///
/// Falsy values (`null`, `false`, zero, `""`, `[]`, `{}`) become the empty
/// string. Otherwise strings are kept, numbers become their decimal text,
/// `true` becomes `"True"` and arrays or objects their JSON text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::String(s) => s,
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.is_empty() => String::new(),
        Value::Object(fields) if fields.is_empty() => String::new(),
        value => value.to_string(),
    })
}
