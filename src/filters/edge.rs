use crate::buffer::RasterBuffer;
use crate::error::PrepError;
use crate::filters::legacy_luma_plane;

const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

/// Sobel gradient magnitude over the legacy luma plane.
///
/// Only interior pixels are convolved; border rows and columns keep the
/// zero-initialized magnitude, leaving a one-pixel black frame. The
/// magnitude is truncated to an integer and capped at 255.
pub fn apply(mut image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    let (width, height) = (image.width(), image.height());
    let w = width as usize;
    let h = height as usize;
    let luma = legacy_luma_plane(&image);
    let mut magnitude = vec![0u8; luma.len()];

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut gx = 0.0;
            let mut gy = 0.0;
            let mut k = 0;
            for dy in 0..3usize {
                for dx in 0..3usize {
                    let sample = f64::from(luma[(y + dy - 1) * w + (x + dx - 1)]);
                    gx += SOBEL_X[k] * sample;
                    gy += SOBEL_Y[k] * sample;
                    k += 1;
                }
            }
            let mag = (gx * gx + gy * gy).sqrt().trunc();
            magnitude[y * w + x] = if mag > 255.0 { 255 } else { mag as u8 };
        }
    }

    for y in 0..height {
        for x in 0..width {
            image.set_rgb(x, y, f64::from(magnitude[y as usize * w + x as usize]));
        }
    }
    Ok(image)
}
