use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use url::Url;

use crate::error::{Error, Result};

/// Thin wrapper over the LMS REST backend. Every call is a single request:
/// no retries, no de-duplication.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid value for BACKEND_URL: {}", e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let resp = self.request(Method::GET, path, token).send().await?;
        decode(check(resp).await?).await
    }

    pub async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        decode(check(resp).await?).await
    }

    pub async fn put_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::PUT, path, token)
            .json(body)
            .send()
            .await?;
        decode(check(resp).await?).await
    }

    /// POST without a body, for action endpoints such as progress toggles.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let resp = self.request(Method::POST, path, token).send().await?;
        decode(check(resp).await?).await
    }

    /// POST whose response body is ignored.
    pub async fn post_discard(&self, path: &str, token: Option<&str>) -> Result<()> {
        let resp = self.request(Method::POST, path, token).send().await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<()> {
        let resp = self.request(Method::DELETE, path, token).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// Form-urlencoded POST; only the token exchange uses this.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, path, None)
            .form(form)
            .send()
            .await?;
        decode(check(resp).await?).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::warn!(url = %resp.url(), "backend rejected the session token");
            Err(Error::Unauthorized)
        }
        StatusCode::FORBIDDEN => Err(Error::Forbidden),
        _ => {
            let url = resp.url().to_string();
            let body = resp.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            tracing::warn!(%url, %status, ?detail, "backend request failed");
            Err(Error::Backend { status, detail })
        }
    }
}

/// Pulls the human-readable `detail` out of an error body. Validation
/// errors arrive as a list of `{loc, msg}` objects and are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail":"Incorrect email or password"}"#).as_deref(),
            Some("Incorrect email or password")
        );
    }

    #[test]
    fn detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"loc":["body","order"],"msg":"value is not a valid integer"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; value is not a valid integer")
        );
    }

    #[test]
    fn detail_missing_or_not_json() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(ApiClient::new("not a url", Duration::from_secs(1)).is_err());
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
