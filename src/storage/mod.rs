//! S3-backed image storage for movie posters. Uploads are staged to a local
//! temporary file, then streamed to the bucket under a generated key with
//! public-read access; the resulting URL becomes the movie's image field.

use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl, Client};
use bytes::Bytes;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;
use uuid::Uuid;

use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object storage bucket is not configured")]
    NotConfigured,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    #[error("object storage request failed: {0}")]
    Upstream(String),
}

pub struct ImageStore {
    client: Client,
    bucket: String,
    region: Option<String>,
    endpoint: Option<String>,
}

static STORE: OnceCell<ImageStore> = OnceCell::const_new();

/// Process-wide store handle, created lazily so the server can boot without
/// storage credentials; routes that need it fail per-request instead.
pub async fn image_store() -> Result<&'static ImageStore, StorageError> {
    STORE.get_or_try_init(ImageStore::from_app_config).await
}

impl ImageStore {
    async fn from_app_config() -> Result<Self, StorageError> {
        let cfg = &config::config().storage;
        if cfg.bucket.is_empty() {
            return Err(StorageError::NotConfigured);
        }

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);

        if let Some(region) = &cfg.region {
            builder = builder.region(aws_sdk_s3::config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &cfg.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: cfg.bucket.clone(),
            region: cfg.region.clone(),
            endpoint: cfg.endpoint.clone(),
        })
    }

    /// Uploads one image and returns its public URL. Best effort: any failure
    /// aborts the surrounding create operation, nothing is retried.
    pub async fn upload(&self, data: Bytes, content_type: &str) -> Result<String, StorageError> {
        let extension = extension_for(content_type)?;
        let key = format!("{}.{}", Uuid::new_v4(), extension);

        // Stage to a temp file; it is removed when the handle drops.
        let staged = tempfile::NamedTempFile::new()?;
        tokio::fs::write(staged.path(), &data).await?;

        let body = ByteStream::from_path(staged.path())
            .await
            .map_err(|e| StorageError::Upstream(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::Upstream(e.to_string()))?;

        debug!(key = %key, bucket = %self.bucket, size = data.len(), "Uploaded image");

        Ok(object_url(
            &self.bucket,
            self.region.as_deref(),
            self.endpoint.as_deref(),
            &key,
        ))
    }
}

/// MIME-derived file extension for the generated object key.
fn extension_for(content_type: &str) -> Result<&'static str, StorageError> {
    if !content_type.starts_with("image/") {
        return Err(StorageError::UnsupportedMediaType(content_type.to_string()));
    }
    match content_type {
        "image/jpeg" => Ok("jpg"),
        "image/png" => Ok("png"),
        "image/gif" => Ok("gif"),
        "image/webp" => Ok("webp"),
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first())
            .copied()
            .ok_or_else(|| StorageError::UnsupportedMediaType(other.to_string())),
    }
}

fn object_url(bucket: &str, region: Option<&str>, endpoint: Option<&str>, key: &str) -> String {
    if let Some(endpoint) = endpoint {
        format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
    } else if let Some(region) = region {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    } else {
        format!("https://{}.s3.amazonaws.com/{}", bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_common_image_types() {
        assert_eq!(extension_for("image/jpeg").unwrap(), "jpg");
        assert_eq!(extension_for("image/png").unwrap(), "png");
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert!(matches!(
            extension_for("application/pdf"),
            Err(StorageError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn url_prefers_custom_endpoint() {
        assert_eq!(
            object_url("posters", Some("us-east-1"), Some("http://localhost:9000"), "k.jpg"),
            "http://localhost:9000/posters/k.jpg"
        );
        assert_eq!(
            object_url("posters", Some("us-east-1"), None, "k.jpg"),
            "https://posters.s3.us-east-1.amazonaws.com/k.jpg"
        );
        assert_eq!(
            object_url("posters", None, None, "k.jpg"),
            "https://posters.s3.amazonaws.com/k.jpg"
        );
    }
}
