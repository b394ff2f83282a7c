//! Global binarization: fixed-level and Otsu-optimal.

use crate::buffer::{clamp_channel, RasterBuffer};
use crate::error::PrepError;

/// ITU-R BT.709 luma weights for the global threshold. The windowed
/// detectors use the legacy 0.3/0.59/0.11 weights instead; the two
/// conventions are intentionally distinct.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Binarize against a fixed luma cutoff. `level` is a fraction of the full
/// channel range in `[0, 1]`; the cutoff is `floor(level * 255)` and a
/// pixel turns white when its luma reaches it.
pub fn apply(mut image: RasterBuffer, level: f64) -> Result<RasterBuffer, PrepError> {
    if !(0.0..=1.0).contains(&level) {
        return Err(PrepError::InvalidParameter {
            name: "level",
            reason: format!("must lie in [0, 1], got {level}"),
        });
    }
    let cutoff = (level * 255.0).floor();
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b, _] = image.get(x, y);
            let luma = LUMA_R * f64::from(r) + LUMA_G * f64::from(g) + LUMA_B * f64::from(b);
            image.set_rgb(x, y, if luma >= cutoff { 255.0 } else { 0.0 });
        }
    }
    Ok(image)
}

/// Binarize at the Otsu-optimal cutoff: the luma level that maximizes
/// between-class variance over the histogram. Pixels strictly above the
/// cutoff turn white.
pub fn otsu(mut image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    let (width, height) = (image.width(), image.height());
    let mut luma = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b, _] = image.get(x, y);
            luma.push(clamp_channel(
                LUMA_R * f64::from(r) + LUMA_G * f64::from(g) + LUMA_B * f64::from(b),
            ));
        }
    }

    let mut histogram = [0u64; 256];
    for &v in &luma {
        histogram[v as usize] += 1;
    }
    let cutoff = otsu_cutoff(&histogram, luma.len() as u64);

    for y in 0..height {
        for x in 0..width {
            let v = luma[y as usize * width as usize + x as usize];
            image.set_rgb(x, y, if v > cutoff { 255.0 } else { 0.0 });
        }
    }
    Ok(image)
}

fn otsu_cutoff(histogram: &[u64; 256], total: u64) -> u8 {
    let weighted_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &n)| value as f64 * n as f64)
        .sum();

    let mut background = 0u64;
    let mut background_sum = 0.0;
    let mut best_cutoff = 0u8;
    let mut best_variance = 0.0f64;

    for value in 0..256usize {
        background += histogram[value];
        if background == 0 {
            continue;
        }
        let foreground = total - background;
        if foreground == 0 {
            break;
        }
        background_sum += value as f64 * histogram[value] as f64;

        let mean_background = background_sum / background as f64;
        let mean_foreground = (weighted_total - background_sum) / foreground as f64;
        let variance = background as f64
            * foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if variance > best_variance {
            best_variance = variance;
            best_cutoff = value as u8;
        }
    }

    best_cutoff
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left half pure black, right half pure white.
    fn split_image(width: u32, height: u32) -> RasterBuffer {
        RasterBuffer::from_fn(width, height, |x, _| {
            if x < width / 2 {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            }
        })
        .unwrap()
    }

    #[test]
    fn test_threshold_preserves_black_white_split() {
        let img = split_image(8, 4);
        let result = apply(img.clone(), 0.5).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_threshold_uses_bt709_weights() {
        // Pure green luma is 0.7152 * 255 = 182.4, pure red is 54.2;
        // at level 0.5 the cutoff is 127.
        let img = RasterBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                [0, 255, 0, 255]
            } else {
                [255, 0, 0, 255]
            }
        })
        .unwrap();

        let result = apply(img, 0.5).unwrap();
        assert_eq!(result.channel(0, 0, 0), 255);
        assert_eq!(result.channel(1, 0, 0), 0);
    }

    #[test]
    fn test_threshold_cutoff_is_inclusive() {
        // floor(0.5 * 255) = 127, and luma 127 must land on the white side.
        let img = RasterBuffer::filled(1, 1, [127, 127, 127, 255]).unwrap();
        let result = apply(img, 0.5).unwrap();
        assert_eq!(result.channel(0, 0, 0), 255);
    }

    #[test]
    fn test_threshold_rejects_out_of_range_level() {
        let img = RasterBuffer::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply(img.clone(), -0.1).is_err());
        assert!(apply(img, 1.1).is_err());
    }

    #[test]
    fn test_otsu_separates_bimodal_image() {
        let img = split_image(10, 10);
        let result = otsu(img.clone()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_otsu_cutoff_lands_between_modes() {
        let mut histogram = [0u64; 256];
        histogram[50] = 40;
        histogram[200] = 60;
        let cutoff = otsu_cutoff(&histogram, 100);
        assert!((50..200).contains(&(cutoff as usize)), "got {cutoff}");
    }
}
