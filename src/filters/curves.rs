//! Tonal curves: level stretch and the power-curve family.

use crate::buffer::RasterBuffer;
use crate::error::PrepError;

/// Stretch the `[black, white]` range to the full channel range.
pub fn level(mut image: RasterBuffer, black: f64, white: f64) -> Result<RasterBuffer, PrepError> {
    if white <= black {
        return Err(PrepError::InvalidParameter {
            name: "white",
            reason: format!("white level {white} must exceed black level {black}"),
        });
    }
    map_channels(&mut image, |c| (c - black) / (white - black) * 255.0);
    Ok(image)
}

/// Gamma curve `255 * (c/255)^(1/radius)`; radius above 1 brightens the
/// midtones.
pub fn gamma(mut image: RasterBuffer, radius: f64) -> Result<RasterBuffer, PrepError> {
    ensure_positive("radius", radius)?;
    map_channels(&mut image, |c| 255.0 * (c / 255.0).powf(1.0 / radius));
    Ok(image)
}

/// Same curve as [`gamma`], kept a separate named operation because
/// callers treat the parameter as a film-density radius rather than a
/// display gamma.
pub fn density(mut image: RasterBuffer, radius: f64) -> Result<RasterBuffer, PrepError> {
    ensure_positive("radius", radius)?;
    map_channels(&mut image, |c| (c / 255.0).powf(1.0 / radius) * 255.0);
    Ok(image)
}

/// Direct power curve `255 * (c/255)^depth`; depth above 1 darkens the
/// midtones.
pub fn tree_depth(mut image: RasterBuffer, depth: f64) -> Result<RasterBuffer, PrepError> {
    ensure_positive("depth", depth)?;
    map_channels(&mut image, |c| (c / 255.0).powf(depth) * 255.0);
    Ok(image)
}

fn map_channels(image: &mut RasterBuffer, f: impl Fn(f64) -> f64) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            for c in 0..3 {
                let value = f(f64::from(image.channel(x, y, c)));
                image.set_channel(x, y, c, value);
            }
        }
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PrepError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(PrepError::InvalidParameter {
            name,
            reason: format!("must be positive, got {value}"),
        })
    }
}
