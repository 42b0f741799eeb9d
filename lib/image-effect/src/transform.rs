use crate::{Effect, FilterName, ImageEffectResult};
use image::{DynamicImage, ImageFormat, ImageReader, imageops::FilterType};
use std::path::Path;

/// Largest width or height a processed image may have.
pub const THUMBNAIL_BOUND: u32 = 500;

/// Shrink `image` to fit inside `bound` x `bound`, keeping its aspect ratio.
/// Images that already fit are returned unchanged, never enlarged.
pub fn thumbnail(image: DynamicImage, bound: u32) -> DynamicImage {
    if image.width() <= bound && image.height() <= bound {
        return image;
    }

    image.resize(bound, bound, FilterType::Lanczos3)
}

/// Bound the image to the display size and run one filter over it.
pub fn filter_image(image: DynamicImage, filter: FilterName) -> ImageEffectResult<DynamicImage> {
    let image = thumbnail(image, THUMBNAIL_BOUND);
    let has_alpha = image.color().has_alpha();

    let mut rgba = image.into_rgba8();
    filter.apply(&mut rgba)?;

    let filtered = DynamicImage::ImageRgba8(rgba);
    Ok(if has_alpha {
        filtered
    } else {
        DynamicImage::ImageRgb8(filtered.into_rgb8())
    })
}

/// Filter the image stored at `path` and write the result back over it.
///
/// The filter name is resolved before the file is opened, so an unknown
/// name never reaches the decoder. The output format follows the file
/// extension, or the decoded format when the extension names no writable
/// format. On a failed write the file content is unspecified.
pub fn apply_filter(path: impl AsRef<Path>, filter_name: &str) -> ImageEffectResult<()> {
    let path = path.as_ref();
    let filter = FilterName::try_from_name(filter_name)?;

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = ImageFormat::from_path(path)
        .ok()
        .filter(ImageFormat::writing_enabled)
        .or(reader.format());
    let image = reader.decode()?;
    let (width, height) = (image.width(), image.height());

    let filtered = filter_image(image, filter)?;
    log::debug!(
        "{filter} {}: {width}x{height} -> {}x{}",
        path.display(),
        filtered.width(),
        filtered.height()
    );

    match format {
        Some(format) => filtered.save_with_format(path, format)?,
        None => filtered.save(path)?,
    }

    Ok(())
}
