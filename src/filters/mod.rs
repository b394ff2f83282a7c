//! Individual raster filters.
//!
//! Every filter is an independently callable free function that takes the
//! buffer by value, validates its parameters before touching a pixel, and
//! returns the transformed buffer. Alpha is never modified (smoothing
//! copies it through unchanged).
//!
//! - **Point transforms**: [`grayscale`], [`adjust`], [`curves`],
//!   [`threshold`]
//! - **Local statistics**: [`normalize`], [`adaptive`], [`smooth`]
//! - **Morphology**: [`morphology`]
//! - **Edge detection**: [`edge`]

pub mod adaptive;
pub mod adjust;
pub mod curves;
pub mod edge;
pub mod grayscale;
pub mod morphology;
pub mod normalize;
pub mod smooth;
pub mod threshold;

use crate::buffer::{clamp_channel, RasterBuffer};

/// Legacy NTSC-style luma weights used by the windowed detectors (adaptive
/// threshold, Sobel). The fixed global threshold uses BT.709 weights
/// instead; the two conventions are intentionally distinct.
pub(crate) const LUMA_LEGACY: [f64; 3] = [0.3, 0.59, 0.11];

/// Collapse the image to a single-channel luma plane with the legacy
/// weights, one clamped-written byte per pixel.
pub(crate) fn legacy_luma_plane(image: &RasterBuffer) -> Vec<u8> {
    let mut plane = Vec::with_capacity(image.width() as usize * image.height() as usize);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b, _] = image.get(x, y);
            let luma = LUMA_LEGACY[0] * f64::from(r)
                + LUMA_LEGACY[1] * f64::from(g)
                + LUMA_LEGACY[2] * f64::from(b);
            plane.push(clamp_channel(luma));
        }
    }
    plane
}
