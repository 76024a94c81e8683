//! Raw XML fetching over HTTP

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::data_fetcher::xml::{self, XmlNode};
use crate::error::AppError;

/// Issues a single GET and returns the response body as text.
///
/// No retries and no payload inspection. Transport failures (connect,
/// timeout, unreadable body) map to `UpstreamUnavailable`; any status
/// outside 2xx maps to `UpstreamHttpError`.
#[instrument(skip(client))]
pub async fn fetch_xml(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching XML from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        AppError::upstream_unavailable(url, e.to_string())
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(AppError::upstream_http_error(status.as_u16(), url));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::upstream_unavailable(url, e.to_string())
    })?;

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches `url` and normalizes the payload into its root [`XmlNode`].
pub async fn fetch_document(client: &Client, url: &str) -> Result<XmlNode, AppError> {
    let body = fetch_xml(client, url).await?;
    xml::parse(&body).inspect_err(|e| {
        let preview: String = body.chars().take(200).collect();
        error!("Failed to parse XML from {}: {} (first 200 chars: {})", url, e, preview);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_fetch_xml_returns_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hot"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<items/>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let body = fetch_xml(&client, &format!("{}/hot", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<items/>");
    }

    #[tokio::test]
    async fn test_fetch_xml_does_not_retry_server_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_xml(&client, &format!("{}/thing", mock_server.uri())).await;
        assert!(matches!(
            result,
            Err(AppError::UpstreamHttpError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_xml_maps_client_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_xml(&client, &format!("{}/missing", mock_server.uri())).await;
        assert!(matches!(
            result,
            Err(AppError::UpstreamHttpError { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_xml_connection_failure() {
        // Reserve a port and release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = create_test_http_client();
        let result = fetch_xml(&client, &format!("http://127.0.0.1:{port}/hot")).await;
        assert!(matches!(result, Err(AppError::UpstreamUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_fetch_document_rejects_malformed_xml() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<items><item></items>"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_document(&client, &format!("{}/hot", mock_server.uri())).await;
        assert!(matches!(result, Err(AppError::MalformedPayload { .. })));
    }
}
