//! Query string construction for GET requests.

use reqwest::Url;
use serde_json::{Map, Value};

use crate::api::error::ApiError;

/// Flat list of query parameters, in insertion order.
pub type QueryParams = Vec<(String, String)>;

/// Appends `params` to `url` as a form-urlencoded query string.
///
/// Parameters already present in `url` are kept. When `params` is empty
/// the URL is returned as parsed, without a trailing `?`.
pub fn build_url<I, K, V>(url: &str, params: I) -> Result<Url, ApiError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parsed = Url::parse(url).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut params = params.into_iter().peekable();
    if params.peek().is_some() {
        parsed.query_pairs_mut().extend_pairs(params);
    }

    Ok(parsed)
}

/// Converts a JSON mapping into query parameters.
///
/// Values are stringified with [`coerce_to_string`].
pub fn params_from_map(map: &Map<String, Value>) -> QueryParams {
    map.iter()
        .map(|(k, v)| (k.clone(), coerce_to_string(v)))
        .collect()
}

/// String form of a JSON value as a browser would put it in a query string.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // nulls inside arrays join as empty strings
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
