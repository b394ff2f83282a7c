use crate::buffer::RasterBuffer;
use crate::error::PrepError;
use crate::neighborhood::window_mean;

/// Divisive normalization: divide each pixel by its local mean and rescale
/// to the 128 midpoint, flattening uneven illumination across the page.
///
/// The local mean is taken over the 2D window of side `window` (half-size
/// `floor(window / 2)`) on a snapshot of the red channel, normalized by the
/// in-range sample count. Runs after grayscale, where the color channels
/// agree. The clamped write supplies the upper clip at 255; the ratio is
/// never negative, and a zero mean implies a zero numerator.
pub fn apply(mut image: RasterBuffer, window: u32) -> Result<RasterBuffer, PrepError> {
    if window < 1 {
        return Err(PrepError::InvalidParameter {
            name: "window",
            reason: format!("must be at least 1, got {window}"),
        });
    }
    let half = i64::from(window / 2);
    let (width, height) = (image.width(), image.height());
    let snapshot = image.snapshot();

    for y in 0..height {
        for x in 0..width {
            let mean = window_mean(width, height, x, y, half, |sx, sy| {
                f64::from(snapshot.red(sx, sy))
            });
            image.set_rgb(x, y, f64::from(snapshot.red(x, y)) / mean * 128.0);
        }
    }
    Ok(image)
}
