use crate::{Effect, ImageEffectResult};
use image::RgbaImage;
use rayon::prelude::*;

/// Square convolution kernel: `clamp(sum(weight * pixel) / scale + offset)`
/// on the colour channels. Alpha is left untouched.
///
/// Weight rows run bottom-up: the first row weighs the line below the
/// pixel, the last row the line above. Columns run left to right.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    size: u32,
    weights: &'static [i32],
    scale: i32,
    offset: i32,
}

impl Kernel {
    pub const fn new(size: u32, weights: &'static [i32], scale: i32, offset: i32) -> Self {
        Self {
            size,
            weights,
            scale,
            offset,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn weights(&self) -> &'static [i32] {
        self.weights
    }

    pub fn radius(&self) -> u32 {
        self.size / 2
    }
}

impl Effect for Kernel {
    fn apply(&self, image: &mut RgbaImage) -> ImageEffectResult<()> {
        let (width, height) = image.dimensions();
        let radius = self.radius() as usize;

        // Border pixels within the kernel radius are kept as they are
        if width as usize <= 2 * radius || height as usize <= 2 * radius {
            return Ok(());
        }

        let (width, height) = (width as usize, height as usize);
        let size = self.size as usize;
        let scale = self.scale.max(1) as f32;
        let offset = self.offset as f32;
        let row_stride = width * 4;
        let source = image.as_raw().clone();

        let pixels: &mut [u8] = &mut *image;
        pixels
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .filter(|(y, _)| *y >= radius && *y < height - radius)
            .for_each(|(y, row)| {
                for x in radius..width - radius {
                    for channel in 0..3 {
                        let mut sum = 0i32;

                        for ky in 0..size {
                            let line = (y + radius - ky) * row_stride;
                            for kx in 0..size {
                                let index = line + (x + kx - radius) * 4 + channel;
                                sum += self.weights[ky * size + kx] * source[index] as i32;
                            }
                        }

                        let value = (sum as f32 / scale + offset).round().clamp(0.0, 255.0);
                        row[x * 4 + channel] = value as u8;
                    }
                }
            });

        Ok(())
    }
}
