//! Interop with the `image` crate at the decoder/renderer boundary.
//!
//! Decoding and encoding are the caller's job; these conversions just move
//! the bytes across without copying.

use image::RgbaImage;

use crate::buffer::RasterBuffer;
use crate::error::PrepError;

impl TryFrom<RgbaImage> for RasterBuffer {
    type Error = PrepError;

    fn try_from(image: RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        RasterBuffer::new(width, height, image.into_raw())
    }
}

impl From<RasterBuffer> for RgbaImage {
    fn from(buffer: RasterBuffer) -> Self {
        let (width, height) = (buffer.width(), buffer.height());
        // The buffer invariant guarantees the byte count matches.
        RgbaImage::from_raw(width, height, buffer.into_raw())
            .expect("raster buffer length matches its dimensions")
    }
}
