//! HTTP transport.
//!
//! Joins the base URL with endpoint paths, attaches bodies and classifies
//! responses. No retries and no timeouts: the caller's cancellation token
//! is the only way to abandon a request.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tokio_util::sync::CancellationToken;

use crate::catalog::Verb;
use crate::codec::{self, RequestBody, UPLOAD_FIELD};
use crate::error::{Error, Result};

/// Successful response.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Shared HTTP client bound to one base URL.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("parse base url {base_url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "unsupported scheme {} in {base_url}",
                parsed.scheme()
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("resolume-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and wait for the full response body.
    ///
    /// Status >= 400 becomes [`Error::Api`] or [`Error::Status`].
    pub async fn execute(
        &self,
        verb: Verb,
        path: &str,
        body: RequestBody,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let method = verb.method();
        tracing::debug!(method = %method, path, "resolume request");

        let request = self.http.request(method, self.url(path));
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(bytes) => request.header(CONTENT_TYPE, "application/json").body(bytes),
            RequestBody::Text(text) => request.header(CONTENT_TYPE, "text/plain").body(text),
            RequestBody::Multipart { file_name, bytes } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str("application/octet-stream")?;
                request.multipart(Form::new().part(UPLOAD_FIELD, part))
            }
        };

        let exchange = async {
            let resp = request.send().await?;
            let status = resp.status().as_u16();
            let body = resp.bytes().await?;
            Ok::<_, Error>((status, body))
        };
        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            result = exchange => result?,
        };
        tracing::trace!(status, bytes = body.len(), "resolume response");

        if status >= 400 {
            return Err(codec::decode_failure(status, &body));
        }
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = Transport::new("http://10.0.0.5:8080/api/v1/").unwrap();
        assert_eq!(transport.base_url(), "http://10.0.0.5:8080/api/v1");
        assert_eq!(
            transport.url("/composition/layers/1"),
            "http://10.0.0.5:8080/api/v1/composition/layers/1"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(Transport::new("not a url"), Err(Error::Config(_))));
        assert!(matches!(Transport::new("ftp://host/api/v1"), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let transport = Transport::new("http://127.0.0.1:9/api/v1").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = transport
            .execute(Verb::Get, "/product", RequestBody::Empty, &cancel)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }
}
