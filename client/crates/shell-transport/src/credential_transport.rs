use crate::{CredentialSource, Navigator, TransportError, TransportResult, TransportSettings};

use shell_core::ApiResponse;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the backend REST API.
///
/// Every request carries `Authorization: Bearer <token>` when the credential
/// source has a token. A 401 from any endpoint clears the persisted token and
/// sends the application to the sign-in route before the error is returned.
/// Nothing is retried.
pub struct CredentialTransport {
    base_url: String,
    sign_in_route: String,
    client: ReqwestClient,
    credentials: Arc<dyn CredentialSource>,
    navigator: Arc<dyn Navigator>,
}

impl CredentialTransport {
    pub fn new(
        settings: TransportSettings,
        credentials: Arc<dyn CredentialSource>,
        navigator: Arc<dyn Navigator>,
    ) -> TransportResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Build {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            sign_in_route: settings.sign_in_route,
            client,
            credentials,
            navigator,
        })
    }

    /// Build a request with the current credential attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_as(method, path, self.credentials.token().as_deref())
    }

    fn request_as(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request and apply the status policy
    async fn send(&self, req: RequestBuilder) -> TransportResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(
                "Backend rejected credential for {}, signing out",
                response.url().path()
            );
            self.credentials.clear();
            self.navigator.navigate(&self.sign_in_route);
            return Err(TransportError::auth_expired());
        }

        if !status.is_success() {
            let message = Self::error_message(response).await;
            debug!("Request failed with status {status}: {message:?}");
            return Err(TransportError::api(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Pull `message` out of an error body, tolerating non-JSON bodies
    async fn error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        let value: Value = serde_json::from_str(&body).ok()?;

        value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .and_then(Value::as_str)
            .map(String::from)
    }

    /// Execute request and unwrap the `{ data, message?, success }` envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> TransportResult<ApiResponse<T>> {
        let response = self.send(req).await?;
        let body = response.text().await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(TransportError::Rejected {
                message: envelope.message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(envelope)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> TransportResult<ApiResponse<T>> {
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> TransportResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> TransportResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PATCH, path).json(body);
        self.execute(req).await
    }

    /// POST whose response body is irrelevant; only the status is checked.
    pub async fn post_no_content(&self, path: &str) -> TransportResult<()> {
        let req = self.request(Method::POST, path);
        self.send(req).await.map(|_| ())
    }

    /// Like [`Self::post_no_content`], but carries `token` instead of reading
    /// the credential source. Sign-out uses this once the stored token is gone.
    pub async fn post_no_content_as(&self, path: &str, token: Option<&str>) -> TransportResult<()> {
        let req = self.request_as(Method::POST, path, token);
        self.send(req).await.map(|_| ())
    }
}
