pub mod filter_catalog;
pub mod kernel_effect;
pub mod transform;

pub use filter_catalog::FilterName;
pub use kernel_effect::Kernel;
pub use transform::{THUMBNAIL_BOUND, apply_filter, filter_image, thumbnail};

use image::RgbaImage;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Filter not found: {0}")]
    FilterNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> ImageEffectResult<()>;
}

impl Effect for FilterName {
    fn apply(&self, image: &mut RgbaImage) -> ImageEffectResult<()> {
        self.kernel().apply(image)
    }
}
