use crate::buffer::RasterBuffer;
use crate::error::PrepError;

/// Replace R, G and B with their plain average.
///
/// This is the simple-average conversion the rest of the pipeline builds
/// on, not a luma-weighted one; the neighborhood filters assume all three
/// color channels agree afterwards.
pub fn apply(mut image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b, _] = image.get(x, y);
            let avg = (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0;
            image.set_rgb(x, y, avg);
        }
    }
    Ok(image)
}
