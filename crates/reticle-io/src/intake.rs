use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Read a file once and embed it as a data-URL payload.
///
/// `Ok(None)` means the content is not an image; callers drop it
/// without surfacing anything. Read failures are real errors.
pub async fn load_image(path: &Path) -> Result<Option<String>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(encode_image(&bytes))
}

/// MIME-sniff raw bytes from their magic numbers and wrap them as
/// `data:<mime>;base64,...`. Non-image bytes yield `None`.
pub fn encode_image(bytes: &[u8]) -> Option<String> {
    let format = image::guess_format(bytes).ok()?;
    let mime = format.to_mime_type();
    Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Tiny valid PNG for intake and watcher tests.
#[cfg(test)]
pub(crate) fn png_fixture() -> Vec<u8> {
    let pixels = image::ImageBuffer::from_pixel(2, 2, image::Rgba([0u8, 255, 0, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
