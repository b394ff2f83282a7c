use crate::buffer::{clamp_channel, RasterBuffer};
use crate::error::PrepError;

/// Brightness shift followed by a contrast ramp around the 128 midpoint.
///
/// `contrast` is a raw multiplier, not a normalized amount; values well
/// above 1 drive the output toward binary, which is what the document
/// pipeline wants. The shifted value is stored (and therefore clipped)
/// before the contrast ramp reads it back, so the two stages clamp
/// independently.
pub fn apply(
    mut image: RasterBuffer,
    brightness: f64,
    contrast: f64,
) -> Result<RasterBuffer, PrepError> {
    for y in 0..image.height() {
        for x in 0..image.width() {
            for c in 0..3 {
                let shifted =
                    f64::from(clamp_channel(f64::from(image.channel(x, y, c)) + brightness));
                image.set_channel(x, y, c, (shifted - 128.0) * contrast + 128.0);
            }
        }
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_brightness_unit_contrast_is_identity() {
        let img = RasterBuffer::from_fn(8, 2, |x, y| {
            [(x * 30) as u8, (y * 90 + 5) as u8, 128, 255]
        })
        .unwrap();

        let result = apply(img.clone(), 0.0, 1.0).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_high_contrast_binarizes_around_midpoint() {
        let img = RasterBuffer::from_fn(2, 1, |x, _| if x == 0 { [100; 4] } else { [150; 4] }).unwrap();
        let result = apply(img, 10.0, 50.0).unwrap();
        // 110 and 160 land on opposite sides of 128 and saturate.
        assert_eq!(result.channel(0, 0, 0), 0);
        assert_eq!(result.channel(1, 0, 0), 255);
    }

    #[test]
    fn test_brightness_clips_before_contrast_reads_back() {
        let img = RasterBuffer::filled(1, 1, [250, 250, 250, 255]).unwrap();
        let result = apply(img, 10.0, 0.5).unwrap();
        // 250 + 10 stores as 255, then (255 - 128) * 0.5 + 128 = 191.5 -> 192.
        // Without the intermediate clip this would be 194.
        assert_eq!(result.channel(0, 0, 0), 192);
    }

    #[test]
    fn test_alpha_untouched() {
        let img = RasterBuffer::filled(1, 1, [128, 128, 128, 31]).unwrap();
        let result = apply(img, 40.0, 2.0).unwrap();
        assert_eq!(result.get(0, 0)[3], 31);
    }
}
