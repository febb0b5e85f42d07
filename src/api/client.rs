use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::session::SessionStore;

use super::envelope::{ApiError, ApiResponse};
use super::error::RequestError;

const JSON: &str = "application/json";
const LOGIN_PATH: &str = "/auth/login";

/// Query parameters appended to a request path.
pub type Query<'a> = &'a [(&'static str, String)];

/// Shared HTTP client for the storefront API.
///
/// The bearer token is read from the session store on every request rather
/// than cached, so a login or logout takes effect immediately for all
/// clones of the client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::GET, path, &[], None::<&()>).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> ApiResponse<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &[], body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, &[], body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, path, &[], None::<&()>).await
    }

    /// Issue a request and fold every failure into the envelope.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request_id = Uuid::new_v4();
        match self.execute(method.clone(), path, query, body, request_id).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    code = %err.code(),
                    error = %err,
                    "API request failed"
                );
                ApiResponse::failure(err.into_api_error())
            }
        }
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
        request_id: Uuid,
    ) -> Result<ApiResponse<T>, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .header("x-request-id", request_id.to_string());

        if !path.contains(LOGIN_PATH) {
            if let Some(token) = self.session.token() {
                builder = builder.bearer_auth(token.expose());
            }
        }

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(RequestError::Parse)?;
            builder = builder.body(encoded);
        }

        let response = builder.send().await.map_err(RequestError::Network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(RequestError::Network)?;

        tracing::debug!(
            method = %method,
            path = %path,
            status,
            request_id = %request_id,
            "API response"
        );

        decode(status, &text)
    }

    fn url(&self, path: &str, query: Query<'_>) -> Result<Url, RequestError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|_| RequestError::InvalidUrl { url: raw.clone() })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Decode a response body into the envelope.
///
/// An empty body is treated as `{}`. Non-2xx responses keep the backend's
/// `error` object when present; otherwise they become `SERVER_ERROR` with
/// the body's top-level `message`, if any.
pub(crate) fn decode<T: DeserializeOwned>(
    status: u16,
    text: &str,
) -> Result<ApiResponse<T>, RequestError> {
    let value: serde_json::Value = if text.trim().is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_str(text).map_err(RequestError::Parse)?
    };

    if !(200..300).contains(&status) {
        if let Some(error) = value
            .get("error")
            .and_then(|e| serde_json::from_value::<ApiError>(e.clone()).ok())
        {
            return Err(RequestError::Backend { status, error });
        }
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);
        return Err(RequestError::Status { status, message });
    }

    serde_json::from_value(value).map_err(RequestError::Parse)
}
