//! HTTP asset host client.

use async_trait::async_trait;
use emporium_config::AssetHostConfig;
use emporium_core::{EmporiumError, EmporiumResult};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Service name used in error reporting.
const SERVICE_NAME: &str = "asset-host";

/// A stored asset as reported by the asset host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAsset {
    /// Upload key, unique within its folder.
    pub key: String,
    /// Durable, fully-qualified URL serving the asset.
    pub url: String,
}

/// Asset host interface.
///
/// The catalog service treats the host as opaque: it uploads raw payloads,
/// persists the returned URL verbatim, and deletes by key.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Uploads a raw image payload under the given folder and returns the
    /// stored asset.
    async fn upload(&self, payload: &str, folder: &str) -> EmporiumResult<StoredAsset>;

    /// Deletes an asset by its folder-qualified key (e.g. `products/abc123`).
    async fn delete(&self, key: &str) -> EmporiumResult<()>;
}

/// HTTP implementation of [`AssetStore`].
pub struct HttpAssetStore {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    file: &'a str,
    folder: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Serialize)]
struct DestroyRequest<'a> {
    public_id: &'a str,
}

impl HttpAssetStore {
    /// Creates a new asset host client from configuration.
    pub fn new(config: &AssetHostConfig) -> EmporiumResult<Self> {
        let client = Client::builder()
            .timeout(config.upload_timeout())
            .build()
            .map_err(|e| {
                EmporiumError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Creates an asset host client with a custom `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn upload(&self, payload: &str, folder: &str) -> EmporiumResult<StoredAsset> {
        debug!("Uploading asset to folder '{}'", folder);

        let request = UploadRequest { file: payload, folder };

        let response = self
            .client
            .post(self.url("/v1/assets/upload"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmporiumError::external_service(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| EmporiumError::external_service(SERVICE_NAME, e.to_string()))?;

        debug!("Asset stored as '{}'", upload.public_id);
        Ok(StoredAsset {
            key: upload.public_id,
            url: upload.secure_url,
        })
    }

    async fn delete(&self, key: &str) -> EmporiumResult<()> {
        debug!("Deleting asset '{}'", key);

        let request = DestroyRequest { public_id: key };

        let response = self
            .client
            .post(self.url("/v1/assets/destroy"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmporiumError::external_service(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        Ok(())
    }
}

fn map_http_error(status: StatusCode, body: &str) -> EmporiumError {
    EmporiumError::external_service(SERVICE_NAME, format!("HTTP {}: {}", status.as_u16(), body))
}

impl std::fmt::Debug for HttpAssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAssetStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> HttpAssetStore {
        HttpAssetStore::with_client(Client::new(), &server.uri(), "test-key")
    }

    #[test]
    fn test_url_construction_strips_trailing_slash() {
        let store = HttpAssetStore::with_client(Client::new(), "http://localhost:9000/", "k");
        assert_eq!(store.url("/v1/assets/upload"), "http://localhost:9000/v1/assets/upload");
    }

    #[tokio::test]
    async fn test_upload_returns_stored_asset() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/assets/upload"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({ "folder": "products" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "public_id": "abc123",
                "secure_url": "https://assets.example.com/products/abc123.png"
            })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let asset = store
            .upload("data:image/png;base64,AAAA", "products")
            .await
            .expect("upload should succeed");

        assert_eq!(asset.key, "abc123");
        assert_eq!(asset.url, "https://assets.example.com/products/abc123.png");
    }

    #[tokio::test]
    async fn test_upload_failure_maps_to_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/assets/upload"))
            .respond_with(ResponseTemplate::new(500).set_body_string("storage backend down"))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let result = store.upload("payload", "products").await;

        match result.unwrap_err() {
            EmporiumError::ExternalService { service, message } => {
                assert_eq!(service, "asset-host");
                assert!(message.contains("storage backend down"));
            }
            other => panic!("Expected ExternalService error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_sends_folder_qualified_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/assets/destroy"))
            .and(body_partial_json(serde_json::json!({ "public_id": "products/abc123" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server);
        store
            .delete("products/abc123")
            .await
            .expect("delete should succeed");
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/assets/destroy"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such asset"))
            .mount(&server)
            .await;

        let store = store_for(&server);
        assert!(store.delete("products/missing").await.is_err());
    }
}
