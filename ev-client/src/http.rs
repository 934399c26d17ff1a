// ev-client/src/http.rs
// HTTP 客户端 - one request per call, status mapped to ClientError

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::{Stream, StreamExt};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use crate::config::ClientConfig;
use crate::query::QueryParams;
use crate::{ClientError, ClientResult};

const JSON: &str = "application/json";

/// Builds the shared transport
pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Transport with the configured timeout and rustls TLS
    pub fn build(config: &ClientConfig) -> ClientResult<Client> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(client)
    }
}

/// Headers attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    /// `Content-Type: application/json` only
    Plain,
    /// Plus `Authorization: Bearer <token>`
    Bearer(String),
}

impl AuthPolicy {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(CONTENT_TYPE, HeaderValue::from_static(JSON));
        match self {
            AuthPolicy::Plain => request,
            AuthPolicy::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Raw body with its declared media type
#[derive(Debug, Clone)]
pub struct BinaryResponse {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// REST client over [`reqwest::Client`]
///
/// No retries and no timeout besides the transport one.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    debug: bool,
}

impl RestClient {
    pub fn new(client: Client, debug: bool) -> Self {
        Self { client, debug }
    }

    /// Build the transport from `config`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(HttpClientFactory::build(config)?, config.debug_http))
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    fn request(
        &self,
        method: Method,
        url: &str,
        auth: &AuthPolicy,
        query: Option<&QueryParams>,
    ) -> RequestBuilder {
        let mut request = auth.apply(self.client.request(method, url));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let pairs: Vec<(&str, &str)> = query.iter().collect();
            request = request.query(&pairs);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let request = request.build()?;
        let (method, url) = (request.method().clone(), request.url().clone());
        if self.debug {
            tracing::debug!(%method, %url, "HTTP request");
        }
        let response = self.client.execute(request).await?;
        if self.debug {
            tracing::debug!(%method, %url, status = %response.status(), "HTTP response");
        }
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, text));
        }
        Ok(response)
    }

    async fn handle_json<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let text = response.text().await?;
        // 空响应当作 null, so `()` and `Option<T>` accept it
        let body = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        auth: &AuthPolicy,
        query: Option<&QueryParams>,
    ) -> ClientResult<T> {
        let response = self.send(self.request(Method::GET, url, auth, query)).await?;
        self.handle_json(response).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        auth: &AuthPolicy,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request(Method::POST, url, auth, None).json(body);
        let response = self.send(request).await?;
        self.handle_json(response).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        auth: &AuthPolicy,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request(Method::PUT, url, auth, None).json(body);
        let response = self.send(request).await?;
        self.handle_json(response).await
    }

    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        url: &str,
        auth: &AuthPolicy,
        query: Option<&QueryParams>,
    ) -> ClientResult<T> {
        let response = self.send(self.request(Method::DELETE, url, auth, query)).await?;
        self.handle_json(response).await
    }

    /// GET the raw body plus its `Content-Type`
    pub async fn get_bytes(
        &self,
        url: &str,
        auth: &AuthPolicy,
        query: Option<&QueryParams>,
    ) -> ClientResult<BinaryResponse> {
        let response = self.send(self.request(Method::GET, url, auth, query)).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        Ok(BinaryResponse {
            bytes,
            content_type,
        })
    }

    /// Stream a GET body to `path`, returning the number of bytes written
    ///
    /// The body lands in `<path>.part` first and is renamed once complete, so
    /// a failed transfer never leaves a truncated file at `path`.
    pub async fn download_to_file(
        &self,
        url: &str,
        auth: &AuthPolicy,
        query: Option<&QueryParams>,
        path: &Path,
    ) -> ClientResult<u64> {
        let response = self.send(self.request(Method::GET, url, auth, query)).await?;
        let written = write_stream(response.bytes_stream(), path).await?;
        tracing::debug!(path = %path.display(), bytes = written, "Download complete");
        Ok(written)
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

async fn write_stream<S, B, E>(stream: S, path: &Path) -> ClientResult<u64>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    ClientError: From<E>,
{
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = partial_path(path);

    let copied: ClientResult<u64> = async {
        let mut file = tokio::fs::File::create(&partial).await?;
        let mut written = 0u64;
        let mut stream = std::pin::pin!(stream);
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(chunk.as_ref()).await?;
            written += chunk.as_ref().len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }
    .await;

    match copied {
        Ok(written) => {
            tokio::fs::rename(&partial, path).await?;
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                tracing::warn!(path = %partial.display(), error = %cleanup, "Partial download left behind");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> RestClient {
        RestClient::from_config(&ClientConfig::new()).unwrap()
    }

    #[tokio::test]
    async fn test_bearer_and_query_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/api/sites"))
            .and(header("authorization", "Bearer tok"))
            .and(header("content-type", JSON))
            .and(query_param("Limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/v1/api/sites", server.uri());
        let query = QueryParams::new().with("Limit", 5);
        let value: serde_json::Value = client()
            .get_json(&url, &AuthPolicy::Bearer("tok".into()), Some(&query))
            .await
            .unwrap();
        assert_eq!(value["count"], 0);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
            .mount(&server)
            .await;

        let err = client()
            .get_json::<serde_json::Value>(&server.uri(), &AuthPolicy::Plain, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Forbidden(ref m) if m == "nope"));
    }

    #[tokio::test]
    async fn test_empty_body_as_unit() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        client()
            .put_json::<(), _>(&server.uri(), &AuthPolicy::Plain, &serde_json::json!({}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_download_to_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("invoice.pdf");
        let written = client()
            .download_to_file(&server.uri(), &AuthPolicy::Plain, None, &target)
            .await
            .unwrap();
        assert_eq!(written, 8);
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4");
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn test_interrupted_stream_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Invoice_42.pdf");
        let chunks: Vec<Result<Vec<u8>, std::io::Error>> = vec![
            Ok(b"%PDF-1.4 first half".to_vec()),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ];

        let err = write_stream(futures::stream::iter(chunks), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Io(_)));
        assert!(!target.exists());
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn test_interrupted_stream_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Invoice_42.pdf");
        std::fs::write(&target, b"complete copy").unwrap();
        let chunks: Vec<Result<Vec<u8>, std::io::Error>> = vec![
            Ok(b"partial".to_vec()),
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof")),
        ];

        assert!(write_stream(futures::stream::iter(chunks), &target).await.is_err());
        assert_eq!(std::fs::read(&target).unwrap(), b"complete copy");
    }
}
