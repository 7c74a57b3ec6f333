//! Provider adapters
//!
//! One adapter per [`ProviderId`]. The [`RoutingGateway`](routing::RoutingGateway)
//! dispatches each request to the adapter matching the selected provider.

pub mod anthropic;
pub mod lazai;
pub mod openai;
pub mod routing;

use advisor_application::GatewayError;
use advisor_domain::{ProviderId, ProviderRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderId;

    /// Perform exactly one outbound call and return the reply text.
    async fn send(&self, credential: &str, request: &ProviderRequest)
    -> Result<String, GatewayError>;
}

/// Send a prepared HTTP request and decode the JSON envelope.
///
/// Network failures map to `ConnectionError`, non-2xx statuses to
/// `RequestFailed` and undecodable bodies to `MalformedEnvelope`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| GatewayError::MalformedEnvelope(e.to_string()))
}

/// Join a configured base URL and an API path.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// One-shot HTTP server for adapter tests.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accept a single connection, answer it with `status` and `body`, and
    /// resolve the handle to the raw request that was received.
    pub(crate) async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}"), handle)
    }

    /// Base URL nothing listens on.
    pub(crate) async fn closed_port() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    /// Split a raw request into its lowercased head and JSON body.
    pub(crate) fn split_request(raw: &str) -> (String, serde_json::Value) {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        (head.to_lowercase(), serde_json::from_str(body).unwrap())
    }

    pub(crate) fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
