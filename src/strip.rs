use crate::constants::DARK_THRESHOLD;
use crate::error::StripError;
use crate::types::StripReport;

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Whether all three color channels sit below the threshold. Alpha is not consulted.
#[inline]
pub fn is_dark(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r < DARK_THRESHOLD && g < DARK_THRESHOLD && b < DARK_THRESHOLD
}

/// Clear every dark pixel to fully transparent black, leaving the rest untouched.
///
/// Returns the number of pixels cleared.
pub fn strip_dark_pixels(img: &mut RgbaImage) -> u64 {
    let mut stripped = 0;
    for pixel in img.pixels_mut() {
        if is_dark(pixel) {
            *pixel = TRANSPARENT;
            stripped += 1;
        }
    }
    stripped
}

/// Strip the dark background of the image at `path` and overwrite it as PNG.
pub fn strip_background(path: &Path) -> Result<StripReport, StripError> {
    let mut img = image::open(path)
        .map_err(|source| StripError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let stripped = strip_dark_pixels(&mut img);

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| StripError::Save {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(StripReport {
        path: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
        stripped,
    })
}
