use crate::cli::Args;
use crate::thumbnails::img::ThumbnailSpec;
use crate::thumbnails::pipeline::ThumbnailPipeline;
use crate::thumbnails::storage::ObjectStore;
use std::sync::Arc;

/// Process-wide, read-only state shared by every invocation.
pub struct AppContext<S: ObjectStore> {
    pub pipeline: Arc<ThumbnailPipeline<S>>,
}

// Derived `Clone` would require `S: Clone`.
impl<S: ObjectStore> Clone for AppContext<S> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

pub fn init<S: ObjectStore>(args: &Args, store: S) -> AppContext<S> {
    let spec = ThumbnailSpec::new(args.thumb_w, args.thumb_h);
    tracing::info!(
        output_bucket = %args.output_bucket,
        max_width = spec.max_width.get(),
        max_height = spec.max_height.get(),
        "Initialized thumbnail pipeline."
    );
    AppContext {
        pipeline: Arc::new(ThumbnailPipeline::new(store, args.output_bucket.clone(), spec)),
    }
}
