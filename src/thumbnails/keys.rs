pub const THUMBNAILS_PREFIX: &str = "thumbnails/";
pub const THUMBNAIL_SUFFIX: &str = "_thumb";
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Destination key of a thumbnail: `thumbnails/{name}_thumb{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailKey(String);

impl ThumbnailKey {
    pub fn for_source(source_key: &str) -> Self {
        let file_name = source_key.rsplit('/').next().unwrap_or_default();
        let (name, extension) = split_extension(file_name);
        let extension = if extension.is_empty() {
            DEFAULT_EXTENSION
        } else {
            extension
        };
        Self(format!(
            "{THUMBNAILS_PREFIX}{name}{THUMBNAIL_SUFFIX}{extension}"
        ))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ThumbnailKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Splits at the last dot, ignoring leading dots: `.profile` has no extension.
fn split_extension(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(dot) => file_name.split_at(leading_dots + dot),
        None => (file_name, ""),
    }
}
