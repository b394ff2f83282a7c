use crate::buffer::{clamp_channel, RasterBuffer, CHANNELS};
use crate::error::PrepError;
use crate::neighborhood::for_each_in_window;

const WEIGHT: f64 = 1.0 / 9.0;

/// Uniform 3x3 box smoothing into a fresh output buffer.
///
/// Each color channel is convolved independently; alpha is copied through
/// unchanged. The weights stay 1/9 even where part of the window falls
/// outside the image, so border pixels lose the missing contributions and
/// come out darker. This differs from the count-normalized mean the
/// statistics filters use and must stay that way.
pub fn apply(image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    let (width, height) = (image.width(), image.height());
    let mut output = vec![0u8; image.data().len()];

    for y in 0..height {
        for x in 0..width {
            let mut sums = [0.0f64; 3];
            for_each_in_window(width, height, x, y, 1, |sx, sy| {
                let [r, g, b, _] = image.get(sx, sy);
                sums[0] += f64::from(r) * WEIGHT;
                sums[1] += f64::from(g) * WEIGHT;
                sums[2] += f64::from(b) * WEIGHT;
            });

            let offset = (y as usize * width as usize + x as usize) * CHANNELS;
            for c in 0..3 {
                output[offset + c] = clamp_channel(sums[c]);
            }
            output[offset + 3] = image.get(x, y)[3];
        }
    }

    RasterBuffer::new(width, height, output)
}
