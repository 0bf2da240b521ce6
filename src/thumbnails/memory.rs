use crate::thumbnails::storage::{ObjectStore, StorageError};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Default)]
struct State {
    objects: HashMap<(String, String), Vec<u8>>,
    fetches: Vec<(String, String)>,
    stores: Vec<StoredObject>,
    deny_writes: bool,
}

/// Object store double that records every call. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryObjectStore {
    pub fn with_object(self, bucket: &str, key: &str, bytes: Vec<u8>) -> Self {
        self.lock()
            .objects
            .insert((bucket.to_owned(), key.to_owned()), bytes);
        self
    }

    pub fn denying_writes(self) -> Self {
        self.lock().deny_writes = true;
        self
    }

    pub fn fetches(&self) -> Vec<(String, String)> {
        self.lock().fetches.clone()
    }

    pub fn stores(&self) -> Vec<StoredObject> {
        self.lock().stores.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("In-memory store mutex is poisoned.")
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let mut state = self.lock();
        state.fetches.push((bucket.to_owned(), key.to_owned()));
        state
            .objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            })
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let mut state = self.lock();
        if state.deny_writes {
            return Err(StorageError::AccessDenied {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            });
        }
        state.stores.push(StoredObject {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            bytes,
            content_type: content_type.to_owned(),
        });
        Ok(())
    }
}

pub fn fake_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .expect("Failed to encode fake image.");
    buffer.into_inner()
}
