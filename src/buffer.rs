//! In-memory RGBA pixel store with clamped-channel write semantics.
//!
//! The buffer is row-major interleaved R,G,B,A with the origin at the top
//! left. Its length invariant (`width * height * 4`) is enforced at
//! construction, so a malformed buffer can never reach a filter. Coordinate
//! bounds are the caller's responsibility; out-of-range accesses panic.

use crate::error::PrepError;

/// Interleaved channels per pixel (R, G, B, A).
pub(crate) const CHANNELS: usize = 4;

/// The single clamped-write primitive: round half to even, clip to
/// [0, 255], store. NaN stores as 0. Every channel assignment in the crate
/// goes through this function so rounding and clipping stay identical
/// across filters.
pub(crate) fn clamp_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Row-major interleaved RGBA 8-bit pixel store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap a decoded byte vector. Fails with [`PrepError::ShapeMismatch`]
    /// when the length does not match `width * height * 4` or either
    /// dimension is zero.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PrepError> {
        let expected = width as usize * height as usize * CHANNELS;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(PrepError::ShapeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self, PrepError> {
        let len = width as usize * height as usize * CHANNELS;
        let data = pixel.into_iter().cycle().take(len).collect();
        Self::new(width, height, data)
    }

    /// Buffer built pixel by pixel from `f(x, y)`.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 4],
    ) -> Result<Self, PrepError> {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and hand the bytes back to the renderer side.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// R, G, B, A at `(x, y)`. Panics when the coordinate is out of range.
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Single channel at `(x, y)`; `channel` is 0..4.
    pub fn channel(&self, x: u32, y: u32, channel: usize) -> u8 {
        assert!(channel < CHANNELS, "channel index {channel} out of range");
        self.data[self.index(x, y) + channel]
    }

    /// Clamped write of one color channel; `channel` is 0..3, alpha is
    /// never written through this path.
    pub fn set_channel(&mut self, x: u32, y: u32, channel: usize, value: f64) {
        assert!(channel < CHANNELS - 1, "channel index {channel} is not a color channel");
        let i = self.index(x, y);
        self.data[i + channel] = clamp_channel(value);
    }

    /// Clamped write of the same value to R, G and B; alpha is left alone.
    pub fn set_rgb(&mut self, x: u32, y: u32, value: f64) {
        let i = self.index(x, y);
        let v = clamp_channel(value);
        self.data[i] = v;
        self.data[i + 1] = v;
        self.data[i + 2] = v;
    }

    /// Immutable point-in-time copy used as the read source by the
    /// neighborhood filters within one pass.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            data: self.data.clone().into_boxed_slice(),
        }
    }
}

/// Frozen copy of a [`RasterBuffer`] taken before a neighborhood pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: u32,
    data: Box<[u8]>,
}

impl Snapshot {
    /// Flat interleaved bytes, for the flat-offset neighbor policy.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Red channel at `(x, y)`, for the windowed policy. The neighborhood
    /// filters run after grayscale, where all three color channels agree.
    pub fn red(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize * self.width as usize + x as usize) * CHANNELS]
    }
}
