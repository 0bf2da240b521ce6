use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::io::Cursor;
use std::num::NonZeroU32;

pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

/// Bounding box every thumbnail must fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSpec {
    pub max_width: NonZeroU32,
    pub max_height: NonZeroU32,
}

impl Default for ThumbnailSpec {
    fn default() -> Self {
        let side = NonZeroU32::new(DEFAULT_THUMBNAIL_SIZE).unwrap_or(NonZeroU32::MIN);
        Self {
            max_width: side,
            max_height: side,
        }
    }
}

impl ThumbnailSpec {
    /// Falls back to the default size for a zero bound.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        let fallback = Self::default();
        Self {
            max_width: NonZeroU32::new(max_width).unwrap_or(fallback.max_width),
            max_height: NonZeroU32::new(max_height).unwrap_or(fallback.max_height),
        }
    }

    /// Target dimensions for an image of the given size. Images that already fit are left
    /// untouched; larger ones are scaled down so that the aspect ratio survives the rounding to
    /// whole pixels as closely as possible.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        let (max_width, max_height) = (self.max_width.get(), self.max_height.get());
        if width <= max_width && height <= max_height {
            return (width, height);
        }

        let aspect = f64::from(width) / f64::from(height);
        let (max_width, max_height) = (f64::from(max_width), f64::from(max_height));
        if max_width / max_height >= aspect {
            let fitted_width = closest_dimension(max_height * aspect, |candidate| {
                (aspect - candidate / max_height).abs()
            });
            (fitted_width, max_height as u32)
        } else {
            let fitted_height = closest_dimension(max_width / aspect, |candidate| {
                if candidate == 0.0 {
                    0.0
                } else {
                    (aspect - max_width / candidate).abs()
                }
            });
            (max_width as u32, fitted_height)
        }
    }
}

// Picks floor or ceil of `ideal`, whichever distorts the aspect ratio less (floor on a tie).
fn closest_dimension(ideal: f64, distortion: impl Fn(f64) -> f64) -> u32 {
    let (floor, ceil) = (ideal.floor(), ideal.ceil());
    let best = if distortion(ceil) < distortion(floor) {
        ceil
    } else {
        floor
    };
    (best as u32).max(1)
}

#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

pub fn decode(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode()?;
    Ok(DecodedImage { image, format })
}

pub fn resize_to_fit(image: DynamicImage, spec: &ThumbnailSpec) -> DynamicImage {
    let (width, height) = spec.fit(image.width(), image.height());
    if (width, height) == (image.width(), image.height()) {
        return image;
    }
    image.resize_exact(width, height, FilterType::CatmullRom)
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ImageError> {
    // For a rough estimate, assume 4 bytes per pixel.
    let estimated_size = (image.width() as usize) * (image.height() as usize) * 4;
    let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));
    image.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}

/// Lowercase format name, as used in `image/{name}` content types.
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Pnm => "pnm",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Tga => "tga",
        ImageFormat::Dds => "dds",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Hdr => "hdr",
        ImageFormat::OpenExr => "openexr",
        ImageFormat::Farbfeld => "farbfeld",
        ImageFormat::Avif => "avif",
        ImageFormat::Qoi => "qoi",
        _ => format.extensions_str().first().copied().unwrap_or("octet-stream"),
    }
}
