use crate::thumbnails::errors::PipelineError;
use crate::thumbnails::img::{self, ThumbnailSpec};
use crate::thumbnails::keys::ThumbnailKey;
use crate::thumbnails::requests::InvocationRequest;
use crate::thumbnails::storage::ObjectStore;
use image::ImageFormat;
use std::time::Instant;

/// Encoding used when the source format couldn't be detected.
pub const FALLBACK_FORMAT: ImageFormat = ImageFormat::Jpeg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
    Success { output_key: ThumbnailKey },
    Failure { message: String },
}

/// Where and how a thumbnail gets written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub destination_bucket: String,
    pub output_key: ThumbnailKey,
    pub content_type: String,
}

impl OutputDescriptor {
    // The key keeps the source file's extension even when the encoding falls back to JPEG.
    pub fn derive(destination_bucket: &str, source_key: &str, format: ImageFormat) -> Self {
        Self {
            destination_bucket: destination_bucket.to_owned(),
            output_key: ThumbnailKey::for_source(source_key),
            content_type: format!("image/{}", img::format_name(format)),
        }
    }
}

pub struct ThumbnailPipeline<S: ObjectStore> {
    store: S,
    output_bucket: String,
    spec: ThumbnailSpec,
}

impl<S: ObjectStore> ThumbnailPipeline<S> {
    pub fn new(store: S, output_bucket: impl Into<String>, spec: ThumbnailSpec) -> Self {
        Self {
            store,
            output_bucket: output_bucket.into(),
            spec,
        }
    }

    /// Runs one invocation. Never fails: every error ends up in [`PipelineResult::Failure`].
    pub async fn process(&self, request: InvocationRequest) -> PipelineResult {
        let start_time = Instant::now();
        let result = self.try_process(&request).await;
        let elapsed_time = start_time.elapsed().as_micros();
        match result {
            Ok(output_key) => {
                tracing::info!(
                    task = "thumbnail",
                    source_key = request.key.as_deref().unwrap_or_default(),
                    output_key = output_key.as_ref(),
                    processing_time_us = elapsed_time,
                    "Thumbnail created."
                );
                PipelineResult::Success { output_key }
            }
            Err(err) => {
                tracing::warn!(
                    task = "thumbnail",
                    source_bucket = request.bucket.as_deref().unwrap_or_default(),
                    source_key = request.key.as_deref().unwrap_or_default(),
                    error = %err,
                    processing_time_us = elapsed_time,
                    "Thumbnail creation failed."
                );
                PipelineResult::Failure {
                    message: err.to_string(),
                }
            }
        }
    }

    async fn try_process(&self, request: &InvocationRequest) -> Result<ThumbnailKey, PipelineError> {
        let (bucket, key) = request.source()?;

        let bytes = self
            .store
            .fetch(bucket, key)
            .await
            .map_err(PipelineError::Fetch)?;

        let (encoded, format) = render(bytes, self.spec).await?;

        let output = OutputDescriptor::derive(&self.output_bucket, key, format);
        self.store
            .store(
                &output.destination_bucket,
                output.output_key.as_ref(),
                encoded,
                &output.content_type,
            )
            .await
            .map_err(PipelineError::Store)?;

        Ok(output.output_key)
    }
}

/// Decodes, resizes and re-encodes on the blocking pool, keeping the async workers free.
async fn render(
    bytes: Vec<u8>,
    spec: ThumbnailSpec,
) -> Result<(Vec<u8>, ImageFormat), PipelineError> {
    run_blocking(move || {
        let source = img::decode(&bytes).map_err(PipelineError::Decode)?;
        drop(bytes);
        let format = source.format.unwrap_or(FALLBACK_FORMAT);
        let thumbnail = img::resize_to_fit(source.image, &spec);
        let encoded = img::encode(&thumbnail, format).map_err(PipelineError::Encode)?;
        Ok((encoded, format))
    })
    .await
}

/// A panic inside `task` comes back as [`PipelineError::Processing`].
pub async fn run_blocking<T, F>(task: F) -> Result<T, PipelineError>
where
    F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| PipelineError::Processing(err.to_string()))?
}
