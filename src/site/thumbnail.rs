//! Thumbnail decoding
//!
//! Card images are downscaled once after download so the grid does not keep
//! full-size uploads in GPU memory.

use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::error::SiteError;

/// Decode image bytes and fit them inside a `size` x `size` square.
///
/// Images already smaller than the square keep their size.
pub fn decode_thumbnail(bytes: &[u8], size: u32, url: &str) -> Result<Handle, SiteError> {
    let img = image::load_from_memory(bytes).map_err(|source| SiteError::Decode {
        url: url.to_string(),
        source,
    })?;

    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Same as [`decode_thumbnail`], off the async executor
pub async fn decode_thumbnail_async(
    bytes: Vec<u8>,
    size: u32,
    url: String,
) -> Result<Handle, SiteError> {
    tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, size, &url)).await?
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}
