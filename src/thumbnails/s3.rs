use crate::cli::Args;
use crate::thumbnails::storage::{ObjectStore, StorageError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::error::Error;

const NOT_FOUND_CODES: &[&str] = &["NoSuchKey", "NoSuchBucket", "NotFound"];
const ACCESS_DENIED_CODES: &[&str] = &[
    "AccessDenied",
    "Forbidden",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
];

/// Long-lived S3 handle shared by every invocation.
#[derive(Debug, Clone)]
pub struct S3Client {
    client: Client,
}

impl S3Client {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_args(args: &Args) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        let mut config_builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &args.s3_endpoint_url {
            // Custom endpoint for S3-compatible stores (LocalStack in local development).
            config_builder = config_builder.endpoint_url(endpoint_url.as_str().trim_end_matches('/'));
        }
        if args.s3_force_path_style {
            // LocalStack doesn't support virtual-hosted-style bucket addressing.
            config_builder = config_builder.force_path_style(true);
        }
        tracing::info!("Initialized S3 client.");
        Self::new(Client::from_conf(config_builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        tracing::debug!(bucket, key, "Downloading object.");
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| classify(bucket, key, err))?;
        let body = object
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Network {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                reason: err.to_string(),
            })?;
        Ok(body.into_bytes().to_vec())
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        tracing::debug!(bucket, key, content_type, size = bytes.len(), "Uploading object.");
        let size = bytes.len() as i64;
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .content_length(size)
            .send()
            .await
            .map_err(|err| classify_write(bucket, key, err))?;
        Ok(())
    }
}

// Writes only fail with access or network errors; a missing destination bucket is the latter.
fn classify_write<E>(bucket: &str, key: &str, err: SdkError<E, HttpResponse>) -> StorageError
where
    E: ProvideErrorMetadata + Error + 'static,
{
    match classify(bucket, key, err) {
        StorageError::NotFound { bucket, key } => StorageError::Network {
            reason: format!("bucket `{bucket}` does not exist"),
            bucket,
            key,
        },
        other => other,
    }
}

fn classify<E>(bucket: &str, key: &str, err: SdkError<E, HttpResponse>) -> StorageError
where
    E: ProvideErrorMetadata + Error + 'static,
{
    let code = err.as_service_error().and_then(ProvideErrorMetadata::code);
    let status = err.raw_response().map(|response| response.status().as_u16());
    let (bucket, key) = (bucket.to_owned(), key.to_owned());
    match (code, status) {
        (Some(code), _) if NOT_FOUND_CODES.contains(&code) => StorageError::NotFound { bucket, key },
        (Some(code), _) if ACCESS_DENIED_CODES.contains(&code) => {
            StorageError::AccessDenied { bucket, key }
        }
        (_, Some(404)) => StorageError::NotFound { bucket, key },
        (_, Some(403)) => StorageError::AccessDenied { bucket, key },
        _ => StorageError::Network {
            bucket,
            key,
            reason: DisplayErrorContext(&err).to_string(),
        },
    }
}
