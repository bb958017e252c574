use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::query::{build_url, params_from_map};

/// Content type sent with GET requests.
const GET_CONTENT_TYPE: &str = "text/plain";
const POST_CONTENT_TYPE: &str = "application/json";

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Thin JSON-over-HTTP client.
///
/// No retries, no timeout and no status-code inspection: whatever body the
/// server sends back is parsed as JSON, and a 4xx/5xx with a JSON body is a
/// successful call. Every failure is logged before it is returned.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` with `params` appended as a query string, parsing the reply as JSON.
    pub async fn get<T, I, K, V>(&self, url: &str, params: I) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let target = build_url(url, params).inspect_err(|e| {
            tracing::error!(url = %url, kind = e.kind(), error = %e, "Error fetching data");
        })?;

        let builder = self
            .client
            .get(target.clone())
            .header(CONTENT_TYPE, GET_CONTENT_TYPE);

        self.execute(builder, &target)
            .await
            .inspect_err(|e| {
                tracing::error!(url = %target, kind = e.kind(), error = %e, "Error fetching data");
            })
    }

    /// GET returning an untyped JSON value.
    pub async fn get_value<I, K, V>(&self, url: &str, params: I) -> Result<Value, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.get(url, params).await
    }

    /// GET with parameters taken from a JSON mapping. Values are stringified
    /// with [`coerce_to_string`](crate::api::coerce_to_string).
    pub async fn get_with_json_params<T>(
        &self,
        url: &str,
        params: &Map<String, Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.get(url, params_from_map(params)).await
    }

    /// POST `body` serialized as JSON, parsing the reply as JSON.
    pub async fn post<T, B>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = async {
            let target = build_url(url, std::iter::empty::<(&str, &str)>())?;
            let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;

            let builder = self
                .client
                .post(target.clone())
                .header(CONTENT_TYPE, POST_CONTENT_TYPE)
                .body(payload);

            self.execute(builder, &target).await
        }
        .await;

        result.inspect_err(|e| {
            tracing::error!(url = %url, kind = e.kind(), error = %e, "Error posting data");
        })
    }

    /// POST returning an untyped JSON value.
    pub async fn post_value<B>(&self, url: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post(url, body).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        target: &Url,
    ) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Transport {
            url: target.to_string(),
            source: e,
        })?;

        let status = resp.status().as_u16();
        tracing::debug!(url = %target, status, "Response received");

        let text = resp.text().await.map_err(|e| ApiError::Body {
            url: target.to_string(),
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| ApiError::decode(target.as_str(), status, &text, e))
    }
}
